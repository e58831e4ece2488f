//! Cash flow record endpoints

use chrono::NaiveDate;

use super::{ApiClient, ApiError};
use crate::models::{CashFlowRecord, NewCashFlowRecord, RecordType};

impl ApiClient {
    pub async fn fetch_cash_flow_records(&self) -> Result<Vec<CashFlowRecord>, ApiError> {
        self.get_data("/cash-flow-records").await
    }

    pub async fn fetch_cash_flow_record(&self, id: i64) -> Result<CashFlowRecord, ApiError> {
        self.get_data(&format!("/cash-flow-records/{}", id)).await
    }

    pub async fn fetch_cash_flow_by_broker(
        &self,
        broker_id: i64,
    ) -> Result<Vec<CashFlowRecord>, ApiError> {
        self.get_data(&format!("/cash-flow-records/broker/{}", broker_id))
            .await
    }

    pub async fn fetch_cash_flow_by_type(
        &self,
        record_type: &RecordType,
    ) -> Result<Vec<CashFlowRecord>, ApiError> {
        self.get_data(&format!("/cash-flow-records/type/{}", record_type.code()))
            .await
    }

    pub async fn fetch_cash_flow_by_date_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<CashFlowRecord>, ApiError> {
        self.get_data_with_query(
            "/cash-flow-records/date-range",
            &[
                ("startDate", start_date.to_string()),
                ("endDate", end_date.to_string()),
            ],
        )
        .await
    }

    /// Records for one broker inside a date window
    pub async fn fetch_cash_flow_by_broker_and_date_range(
        &self,
        broker_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<CashFlowRecord>, ApiError> {
        self.get_data_with_query(
            &format!("/cash-flow-records/broker/{}/date-range", broker_id),
            &[
                ("startDate", start_date.to_string()),
                ("endDate", end_date.to_string()),
            ],
        )
        .await
    }

    pub async fn create_cash_flow_record(
        &self,
        record: &NewCashFlowRecord,
    ) -> Result<CashFlowRecord, ApiError> {
        self.post_data("/cash-flow-records", record).await
    }

    pub async fn delete_cash_flow_record(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(&format!("/cash-flow-records/{}", id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_client;
    use crate::models::{Currency, NewCashFlowRecord, RecordType};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_by_type_uses_wire_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cash-flow-records/type/WITHDRAWAL"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "SUCCESS",
                "message": "ok",
                "data": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let records = test_client(&server.uri())
            .fetch_cash_flow_by_type(&RecordType::Withdrawal)
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_date_range_query_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cash-flow-records/date-range"))
            .and(query_param("startDate", "2024-01-01"))
            .and(query_param("endDate", "2024-03-31"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "SUCCESS",
                "message": "ok",
                "data": [{
                    "id": 1,
                    "recordDate": "2024-01-15",
                    "brokerId": 3,
                    "recordType": "DEPOSIT",
                    "amount": 50000.0,
                    "currency": "CNY"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let records = test_client(&server.uri())
            .fetch_cash_flow_by_date_range(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].amount, dec!(50000));
    }

    #[tokio::test]
    async fn test_create_posts_amount_as_number() {
        let server = MockServer::start().await;
        let record = NewCashFlowRecord {
            record_date: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            broker_id: 2,
            record_type: RecordType::Deposit,
            amount: dec!(5000),
            currency: Currency::Usd,
            bank: Some("HSBC".to_string()),
            description: None,
        };
        Mock::given(method("POST"))
            .and(path("/api/cash-flow-records"))
            .and(body_json(json!({
                "recordDate": "2024-02-10",
                "brokerId": 2,
                "recordType": "DEPOSIT",
                "amount": 5000.0,
                "currency": "USD",
                "bank": "HSBC"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "status": "SUCCESS",
                "message": "created",
                "data": {
                    "id": 9,
                    "recordDate": "2024-02-10",
                    "brokerId": 2,
                    "recordType": "DEPOSIT",
                    "amount": 5000.0,
                    "currency": "USD",
                    "bank": "HSBC"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let created = test_client(&server.uri())
            .create_cash_flow_record(&record)
            .await
            .unwrap();
        assert_eq!(created.id, 9);
        assert_eq!(created.currency, Currency::Usd);
    }
}
