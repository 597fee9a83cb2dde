use crate::domain::model::TrademarkRecord;
use crate::utils::error::Result;
use chrono::NaiveDate;
use std::io::Write;

const LIST_SEPARATOR: &str = ";";

const CSV_HEADER: [&str; 16] = [
    "applicationNumber",
    "productName",
    "productNameEng",
    "applicationDate",
    "registerStatus",
    "publicationNumber",
    "publicationDate",
    "registrationNumber",
    "registrationDate",
    "internationalRegNumbers",
    "internationalRegDate",
    "priorityClaimNumList",
    "priorityClaimDateList",
    "asignProductMainCodeList",
    "asignProductSubCodeList",
    "viennaCodeList",
];

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn date(value: &Option<NaiveDate>) -> String {
    value.map(|d| d.to_string()).unwrap_or_default()
}

/// Absent elements become empty slots so positions stay aligned.
fn text_list(values: &Option<Vec<Option<String>>>) -> String {
    values
        .as_ref()
        .map(|items| {
            items
                .iter()
                .map(|item| item.as_deref().unwrap_or(""))
                .collect::<Vec<_>>()
                .join(LIST_SEPARATOR)
        })
        .unwrap_or_default()
}

fn date_list(values: &Option<Vec<Option<NaiveDate>>>) -> String {
    values
        .as_ref()
        .map(|items| {
            items
                .iter()
                .map(date)
                .collect::<Vec<_>>()
                .join(LIST_SEPARATOR)
        })
        .unwrap_or_default()
}

fn csv_row(record: &TrademarkRecord) -> [String; 16] {
    [
        record.application_number.clone(),
        text(&record.product_name),
        text(&record.product_name_eng),
        date(&record.application_date),
        text(&record.register_status),
        text(&record.publication_number),
        date(&record.publication_date),
        text_list(&record.registration_number),
        date_list(&record.registration_date),
        text(&record.international_reg_numbers),
        date(&record.international_reg_date),
        text_list(&record.priority_claim_num_list),
        date_list(&record.priority_claim_date_list),
        text_list(&record.asign_product_main_code_list),
        text_list(&record.asign_product_sub_code_list),
        text_list(&record.vienna_code_list),
    ]
}

/// Write records as CSV with a header row. List fields are `;`-joined.
pub fn write_csv<W: Write>(records: &[TrademarkRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;
    for record in records {
        csv_writer.write_record(csv_row(record))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn to_json_pretty(records: &[TrademarkRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TrademarkRecord {
        let mut record = TrademarkRecord::new("4019950043843");
        record.product_name = Some("프레스카, 상표".to_string());
        record.application_date = NaiveDate::from_ymd_opt(1995, 11, 17);
        record.registration_date = Some(vec![NaiveDate::from_ymd_opt(1997, 4, 17), None]);
        record.asign_product_sub_code_list = Some(vec![Some("G0301".into()), Some("G0303".into())]);
        record
    }

    #[test]
    fn test_write_csv() {
        let mut buffer = Vec::new();
        write_csv(&[sample()], &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("applicationNumber,productName,productNameEng"));
        assert_eq!(
            lines[1],
            "4019950043843,\"프레스카, 상표\",,1995-11-17,,,,,1997-04-17;,,,,,,G0301;G0303,"
        );
    }

    #[test]
    fn test_write_csv_header_only_when_empty() {
        let mut buffer = Vec::new();
        write_csv(&[], &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_json_uses_source_field_names() {
        let json = to_json_pretty(&[sample()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["applicationNumber"], "4019950043843");
        assert_eq!(value[0]["applicationDate"], "1995-11-17");
        assert_eq!(value[0]["registrationDate"][1], serde_json::Value::Null);
        assert_eq!(value[0]["registerStatus"], serde_json::Value::Null);
    }
}
