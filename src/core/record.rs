//! Narrowing of raw JSON objects into [`TrademarkRecord`].
//!
//! Two failure channels are kept apart: structural problems reject the whole
//! record with a [`RecordError`], while unparseable dates only drop the field.

use crate::core::date::parse_date_value;
use crate::domain::model::{RawRecord, TrademarkRecord};
use chrono::NaiveDate;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("missing required field `{field}`")]
    MissingRequiredField { field: &'static str },

    #[error("field `{field}` expected {expected}, found {found}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

pub type RecordResult<T> = std::result::Result<T, RecordError>;

const APPLICATION_NUMBER: &str = "applicationNumber";

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(field: &'static str, expected: &'static str, value: &Value) -> RecordError {
    RecordError::TypeMismatch {
        field,
        expected,
        found: json_kind(value),
    }
}

/// Look up a field, treating explicit `null` the same as a missing key.
fn present<'a>(obj: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    obj.get(field).filter(|v| !v.is_null())
}

fn required_string(obj: &Map<String, Value>, field: &'static str) -> RecordResult<String> {
    match present(obj, field) {
        None => Err(RecordError::MissingRequiredField { field }),
        Some(Value::String(s)) if s.is_empty() => Err(RecordError::MissingRequiredField { field }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(mismatch(field, "string", other)),
    }
}

fn optional_string(obj: &Map<String, Value>, field: &'static str) -> RecordResult<Option<String>> {
    match present(obj, field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(mismatch(field, "string", other)),
    }
}

fn optional_string_list(
    obj: &Map<String, Value>,
    field: &'static str,
) -> RecordResult<Option<Vec<Option<String>>>> {
    let Some(value) = present(obj, field) else {
        return Ok(None);
    };
    let Value::Array(items) = value else {
        return Err(mismatch(field, "array", value));
    };

    items
        .iter()
        .map(|item| match item {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            other => Err(mismatch(field, "array of strings", other)),
        })
        .collect::<RecordResult<Vec<_>>>()
        .map(Some)
}

fn optional_date(obj: &Map<String, Value>, field: &str) -> Option<NaiveDate> {
    present(obj, field).and_then(parse_date_value)
}

/// Element-wise date parsing; an empty list counts as absent.
fn optional_date_list(
    obj: &Map<String, Value>,
    field: &'static str,
) -> RecordResult<Option<Vec<Option<NaiveDate>>>> {
    match present(obj, field) {
        None => Ok(None),
        Some(Value::Array(items)) if items.is_empty() => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items.iter().map(parse_date_value).collect())),
        Some(other) => Err(mismatch(field, "array", other)),
    }
}

impl TrademarkRecord {
    /// Validate one raw record. Unknown keys are ignored.
    pub fn from_raw(raw: &RawRecord) -> RecordResult<Self> {
        let Value::Object(obj) = raw else {
            return Err(mismatch("<record>", "object", raw));
        };

        Ok(Self {
            application_number: required_string(obj, APPLICATION_NUMBER)?,
            product_name: optional_string(obj, "productName")?,
            product_name_eng: optional_string(obj, "productNameEng")?,
            application_date: optional_date(obj, "applicationDate"),
            register_status: optional_string(obj, "registerStatus")?,
            publication_number: optional_string(obj, "publicationNumber")?,
            publication_date: optional_date(obj, "publicationDate"),
            registration_number: optional_string_list(obj, "registrationNumber")?,
            registration_date: optional_date_list(obj, "registrationDate")?,
            international_reg_numbers: optional_string(obj, "internationalRegNumbers")?,
            international_reg_date: optional_date(obj, "internationalRegDate"),
            priority_claim_num_list: optional_string_list(obj, "priorityClaimNumList")?,
            priority_claim_date_list: optional_date_list(obj, "priorityClaimDateList")?,
            asign_product_main_code_list: optional_string_list(obj, "asignProductMainCodeList")?,
            asign_product_sub_code_list: optional_string_list(obj, "asignProductSubCodeList")?,
            vienna_code_list: optional_string_list(obj, "viennaCodeList")?,
        })
    }
}

impl TryFrom<&RawRecord> for TrademarkRecord {
    type Error = RecordError;

    fn try_from(raw: &RawRecord) -> RecordResult<Self> {
        Self::from_raw(raw)
    }
}
