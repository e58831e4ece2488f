//! Trade record endpoints

use chrono::NaiveDate;

use super::{ApiClient, ApiError};
use crate::models::{AssetType, NewTradeRecord, TradeRecord};

impl ApiClient {
    pub async fn fetch_trade_records(&self) -> Result<Vec<TradeRecord>, ApiError> {
        self.get_data("/trade-records").await
    }

    pub async fn fetch_trade_record(&self, id: i64) -> Result<TradeRecord, ApiError> {
        self.get_data(&format!("/trade-records/{}", id)).await
    }

    pub async fn fetch_trades_by_broker(
        &self,
        broker_id: i64,
    ) -> Result<Vec<TradeRecord>, ApiError> {
        self.get_data(&format!("/trade-records/broker/{}", broker_id))
            .await
    }

    pub async fn fetch_trades_by_asset_type(
        &self,
        asset_type: &AssetType,
    ) -> Result<Vec<TradeRecord>, ApiError> {
        self.get_data(&format!("/trade-records/asset-type/{}", asset_type.code()))
            .await
    }

    pub async fn fetch_trades_by_strategy(
        &self,
        strategy_id: i64,
    ) -> Result<Vec<TradeRecord>, ApiError> {
        self.get_data(&format!("/trade-records/strategy/{}", strategy_id))
            .await
    }

    /// Case-insensitive substring search on the traded symbol
    pub async fn search_trades_by_symbol(
        &self,
        symbol: &str,
    ) -> Result<Vec<TradeRecord>, ApiError> {
        self.get_data_with_query("/trade-records/search", &[("symbol", symbol)])
            .await
    }

    pub async fn fetch_trades_by_date_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<TradeRecord>, ApiError> {
        self.get_data_with_query(
            "/trade-records/date-range",
            &[
                ("startDate", start_date.to_string()),
                ("endDate", end_date.to_string()),
            ],
        )
        .await
    }

    pub async fn create_trade_record(
        &self,
        record: &NewTradeRecord,
    ) -> Result<TradeRecord, ApiError> {
        self.post_data("/trade-records", record).await
    }

    pub async fn update_trade_record(
        &self,
        id: i64,
        record: &NewTradeRecord,
    ) -> Result<TradeRecord, ApiError> {
        self.put_data(&format!("/trade-records/{}", id), record).await
    }

    pub async fn delete_trade_record(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(&format!("/trade-records/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_client;
    use crate::models::{AssetType, Currency, NewTradeRecord, TradeType};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn trade_json(id: i64, symbol: &str) -> serde_json::Value {
        json!({
            "id": id,
            "tradeDate": "2024-06-03",
            "brokerId": 2,
            "assetType": "STOCK",
            "symbol": symbol,
            "underlyingSymbol": symbol,
            "tradeType": "BUY",
            "quantity": 100,
            "price": 185.5,
            "amount": 18550.0,
            "fee": 9.28,
            "currency": "USD"
        })
    }

    #[tokio::test]
    async fn test_search_sends_symbol_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/trade-records/search"))
            .and(query_param("symbol", "aapl"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "SUCCESS",
                "message": "ok",
                "data": [trade_json(1, "AAPL")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let trades = test_client(&server.uri())
            .search_trades_by_symbol("aapl")
            .await
            .unwrap();
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].symbol, "AAPL");
    }

    #[tokio::test]
    async fn test_fetch_by_asset_type_uses_wire_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/trade-records/asset-type/OPTION_CALL"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "SUCCESS",
                "message": "ok",
                "data": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let trades = test_client(&server.uri())
            .fetch_trades_by_asset_type(&AssetType::OptionCall)
            .await
            .unwrap();
        assert!(trades.is_empty());
    }

    #[tokio::test]
    async fn test_create_trade_posts_full_payload() {
        let server = MockServer::start().await;
        let record = NewTradeRecord {
            trade_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            broker_id: 2,
            asset_type: AssetType::Stock,
            symbol: "AAPL".to_string(),
            name: Some("Apple Inc".to_string()),
            underlying_symbol: "AAPL".to_string(),
            trade_type: TradeType::Buy,
            quantity: 100,
            price: dec!(185.5),
            amount: dec!(18550),
            fee: dec!(9.28),
            currency: Currency::Usd,
            strategy_id: None,
        };
        Mock::given(method("POST"))
            .and(path("/api/trade-records"))
            .and(body_json(json!({
                "tradeDate": "2024-06-03",
                "brokerId": 2,
                "assetType": "STOCK",
                "symbol": "AAPL",
                "name": "Apple Inc",
                "underlyingSymbol": "AAPL",
                "tradeType": "BUY",
                "quantity": 100,
                "price": 185.5,
                "amount": 18550.0,
                "fee": 9.28,
                "currency": "USD"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "status": "SUCCESS",
                "message": "created",
                "data": trade_json(31, "AAPL")
            })))
            .expect(1)
            .mount(&server)
            .await;

        let created = test_client(&server.uri())
            .create_trade_record(&record)
            .await
            .unwrap();
        assert_eq!(created.id, 31);
        assert_eq!(created.amount, dec!(18550));
    }

    #[tokio::test]
    async fn test_rejected_create_surfaces_validation_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/trade-records"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "status": "ERROR",
                "message": "Quantity must be greater than 0"
            })))
            .mount(&server)
            .await;

        let record = NewTradeRecord {
            trade_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            broker_id: 2,
            asset_type: AssetType::Stock,
            symbol: "AAPL".to_string(),
            name: None,
            underlying_symbol: "AAPL".to_string(),
            trade_type: TradeType::Buy,
            quantity: 0,
            price: dec!(185.5),
            amount: dec!(0),
            fee: dec!(0),
            currency: Currency::Usd,
            strategy_id: None,
        };
        let err = test_client(&server.uri())
            .create_trade_record(&record)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Quantity must be greater than 0");
    }
}
