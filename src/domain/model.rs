use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

/// One untyped record as it appears in the source document.
pub type RawRecord = serde_json::Value;

/// Immutable, ordered set of validated records published by a load.
pub type Snapshot = Arc<Vec<TrademarkRecord>>;

/// A validated trademark registration entry.
///
/// `application_number` is always non-empty. Date fields are either a real
/// calendar date or `None`; list fields keep the source length, with
/// unparseable elements as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrademarkRecord {
    pub product_name: Option<String>,
    pub product_name_eng: Option<String>,
    pub application_number: String,
    pub application_date: Option<NaiveDate>,
    pub register_status: Option<String>,
    pub publication_number: Option<String>,
    pub publication_date: Option<NaiveDate>,
    pub registration_number: Option<Vec<Option<String>>>,
    pub registration_date: Option<Vec<Option<NaiveDate>>>,
    pub international_reg_numbers: Option<String>,
    pub international_reg_date: Option<NaiveDate>,
    pub priority_claim_num_list: Option<Vec<Option<String>>>,
    pub priority_claim_date_list: Option<Vec<Option<NaiveDate>>>,
    pub asign_product_main_code_list: Option<Vec<Option<String>>>,
    pub asign_product_sub_code_list: Option<Vec<Option<String>>>,
    pub vienna_code_list: Option<Vec<Option<String>>>,
}

impl TrademarkRecord {
    /// A record with only the required identifier set.
    pub fn new(application_number: impl Into<String>) -> Self {
        Self {
            product_name: None,
            product_name_eng: None,
            application_number: application_number.into(),
            application_date: None,
            register_status: None,
            publication_number: None,
            publication_date: None,
            registration_number: None,
            registration_date: None,
            international_reg_numbers: None,
            international_reg_date: None,
            priority_claim_num_list: None,
            priority_claim_date_list: None,
            asign_product_main_code_list: None,
            asign_product_sub_code_list: None,
            vienna_code_list: None,
        }
    }
}

/// Outcome of turning a batch of raw records into a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub records: Vec<TrademarkRecord>,
    pub skipped: usize,
}

impl LoadReport {
    pub fn total(&self) -> usize {
        self.records.len() + self.skipped
    }
}

/// Counts reported after a reload; the records themselves go to the snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: usize,
}

impl From<&LoadReport> for LoadSummary {
    fn from(report: &LoadReport) -> Self {
        Self {
            loaded: report.records.len(),
            skipped: report.skipped,
        }
    }
}
