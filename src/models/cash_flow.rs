//! Cash movement records (deposits and withdrawals)

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::broker::Broker;
use super::currency::Currency;
use super::tag::TagColor;

/// Direction of a cash movement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordType {
    Deposit,
    Withdrawal,
    Other(String),
}

impl RecordType {
    pub fn all() -> Vec<RecordType> {
        vec![RecordType::Deposit, RecordType::Withdrawal]
    }

    pub fn code(&self) -> &str {
        match self {
            RecordType::Deposit => "DEPOSIT",
            RecordType::Withdrawal => "WITHDRAWAL",
            RecordType::Other(code) => code,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            RecordType::Deposit => "Deposit",
            RecordType::Withdrawal => "Withdrawal",
            RecordType::Other(code) => code,
        }
    }

    pub fn tag_color(&self) -> TagColor {
        match self {
            RecordType::Deposit => TagColor::Green,
            RecordType::Withdrawal => TagColor::Orange,
            RecordType::Other(_) => TagColor::Default,
        }
    }
}

impl From<String> for RecordType {
    fn from(code: String) -> Self {
        match code.as_str() {
            "DEPOSIT" => RecordType::Deposit,
            "WITHDRAWAL" => RecordType::Withdrawal,
            _ => RecordType::Other(code),
        }
    }
}

impl From<RecordType> for String {
    fn from(value: RecordType) -> Self {
        value.code().to_string()
    }
}

/// Cash flow record as returned by the API, with the broker joined in
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowRecord {
    pub id: i64,
    pub record_date: NaiveDate,
    pub broker_id: i64,
    #[serde(default)]
    pub broker: Option<Broker>,
    pub record_type: RecordType,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: Currency,
    #[serde(default)]
    pub bank: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CashFlowRecord {
    /// Broker display name, falling back to the raw id when the join is absent
    pub fn broker_label(&self) -> String {
        match &self.broker {
            Some(broker) => broker.broker_name.clone(),
            None => format!("#{}", self.broker_id),
        }
    }

    /// Amount with withdrawals negated, for sorting and summaries
    pub fn signed_amount(&self) -> Decimal {
        match self.record_type {
            RecordType::Withdrawal => -self.amount,
            _ => self.amount,
        }
    }
}

/// Payload for creating a cash flow record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCashFlowRecord {
    pub record_date: NaiveDate,
    pub broker_id: i64,
    pub record_type: RecordType,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_record_type_round_trip() {
        for record_type in RecordType::all() {
            let code = record_type.code().to_string();
            assert_eq!(RecordType::from(code), record_type);
        }
    }

    #[test]
    fn test_unknown_record_type_falls_back() {
        let record_type = RecordType::from("TRANSFER".to_string());
        assert_eq!(record_type.label(), "TRANSFER");
        assert_eq!(record_type.tag_color(), TagColor::Default);
    }

    #[test]
    fn test_record_deserializes_with_joined_broker() {
        let json = r#"{
            "id": 11,
            "recordDate": "2024-01-15",
            "brokerId": 3,
            "broker": {"id": 3, "brokerName": "Futu Securities", "country": "HK", "isActive": true},
            "recordType": "DEPOSIT",
            "amount": 50000.0,
            "currency": "CNY",
            "bank": "CMB",
            "description": null
        }"#;
        let record: CashFlowRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.record_type, RecordType::Deposit);
        assert_eq!(record.amount, dec!(50000));
        assert_eq!(record.broker_label(), "Futu Securities");
        assert_eq!(record.bank.as_deref(), Some("CMB"));
    }

    #[test]
    fn test_broker_label_falls_back_to_id() {
        let json = r#"{
            "id": 12,
            "recordDate": "2024-02-05",
            "brokerId": 9,
            "recordType": "WITHDRAWAL",
            "amount": 15000.0,
            "currency": "CNY"
        }"#;
        let record: CashFlowRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.broker_label(), "#9");
    }

    #[test]
    fn test_signed_amount_negates_withdrawals() {
        let json = r#"{
            "id": 1,
            "recordDate": "2024-02-05",
            "brokerId": 1,
            "recordType": "WITHDRAWAL",
            "amount": 3000.0,
            "currency": "USD"
        }"#;
        let record: CashFlowRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.signed_amount(), dec!(-3000));
    }
}
