//! Export Formatter
//!
//! Renders the ledger as a JSON backup document or a flat CSV report.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::clock::{iso_date, iso_timestamp};
use crate::domain::{Customer, PaymentRecord};
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;

pub const CSV_HEADER: [&str; 5] = ["Customer Name", "Item Name", "Cost", "Date", "Status"];

/// Full backup document
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument<'a> {
    pub customers: &'a [Customer],
    pub payment_history: &'a [PaymentRecord],
    pub export_date: String,
    pub total_customers: usize,
    pub total_outstanding: f64,
    pub total_payments: f64,
}

impl<'a> ExportDocument<'a> {
    pub fn new(ledger: &'a Ledger, exported_at: DateTime<Utc>) -> Self {
        Self {
            customers: ledger.customers(),
            payment_history: ledger.payments(),
            export_date: iso_timestamp(exported_at),
            total_customers: ledger.customers().len(),
            total_outstanding: ledger.total_outstanding(),
            total_payments: ledger.total_collected(),
        }
    }
}

/// Pretty-printed JSON backup
pub fn export_json(ledger: &Ledger, exported_at: DateTime<Utc>) -> LedgerResult<String> {
    Ok(serde_json::to_string_pretty(&ExportDocument::new(ledger, exported_at))?)
}

/// One row per owed item; customers without items get a single
/// `No items` row.
pub fn export_csv(ledger: &Ledger) -> LedgerResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for customer in ledger.customers() {
        if customer.items.is_empty() {
            writer.write_record([customer.name.as_str(), "No items", "0", "N/A", "No debt"])?;
            continue;
        }
        for item in &customer.items {
            let cost = item.cost.to_string();
            writer.write_record([
                customer.name.as_str(),
                item.name.as_str(),
                cost.as_str(),
                item.date.as_str(),
                "Outstanding",
            ])?;
        }
    }

    let bytes = writer.into_inner().map_err(|e| LedgerError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| LedgerError::Export(e.to_string()))
}

pub fn json_file_name(date: NaiveDate) -> String {
    format!("creditkeeper-data-{}.json", iso_date(date))
}

pub fn csv_file_name(date: NaiveDate) -> String {
    format!("creditkeeper-customers-{}.csv", iso_date(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, FixedClock};

    fn ledger() -> Ledger {
        let clock = FixedClock::at_millis(1_709_285_400_000);
        let mut ledger = Ledger::new();
        let asha = ledger.add_customer("Asha", &clock).unwrap().id;
        ledger.add_customer("Ravi", &clock).unwrap();
        ledger.add_item(&asha, "Rice", 100.0, "2024-02-01", &clock).unwrap();
        ledger.add_item(&asha, "Oil", 12.5, "2024-02-03", &clock).unwrap();
        ledger.record_payment(&asha, 20.0, &clock).unwrap();
        ledger
    }

    #[test]
    fn test_csv_rows_per_item_and_placeholder() {
        let csv = export_csv(&ledger()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Customer Name,Item Name,Cost,Date,Status",
                "Asha,Rice,80,2024-02-01,Outstanding",
                "Asha,Oil,12.5,2024-02-03,Outstanding",
                "Ravi,No items,0,N/A,No debt",
            ]
        );
    }

    #[test]
    fn test_csv_for_empty_ledger_is_header_only() {
        assert_eq!(export_csv(&Ledger::new()).unwrap(), "Customer Name,Item Name,Cost,Date,Status\n");
    }

    #[test]
    fn test_csv_quotes_names_with_commas() {
        let clock = FixedClock::at_millis(0);
        let mut ledger = Ledger::new();
        ledger.add_customer("Rao, Asha", &clock).unwrap();
        let csv = export_csv(&ledger).unwrap();
        assert!(csv.lines().any(|line| line == "\"Rao, Asha\",No items,0,N/A,No debt"));
    }

    #[test]
    fn test_json_document_fields() {
        let ledger = ledger();
        let clock = FixedClock::at_millis(1_709_285_400_000);
        let json = export_json(&ledger, clock.now()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["exportDate"], "2024-03-01T09:30:00.000Z");
        assert_eq!(value["totalCustomers"], 2);
        assert_eq!(value["totalOutstanding"].as_f64(), Some(92.5));
        assert_eq!(value["totalPayments"].as_f64(), Some(20.0));
        assert_eq!(value["customers"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["paymentHistory"][0]["customerId"], value["customers"][0]["id"]);
    }

    #[test]
    fn test_file_names() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(json_file_name(date), "creditkeeper-data-2024-03-01.json");
        assert_eq!(csv_file_name(date), "creditkeeper-customers-2024-03-01.csv");
    }
}
