//! Strategy endpoints

use super::{ApiClient, ApiError};
use crate::models::{NewStrategy, Strategy};

impl ApiClient {
    pub async fn fetch_strategies(&self) -> Result<Vec<Strategy>, ApiError> {
        self.get_data("/strategies").await
    }

    pub async fn fetch_strategy(&self, id: i64) -> Result<Strategy, ApiError> {
        self.get_data(&format!("/strategies/{}", id)).await
    }

    pub async fn create_strategy(&self, strategy: &NewStrategy) -> Result<Strategy, ApiError> {
        self.post_data("/strategies", strategy).await
    }

    pub async fn update_strategy(
        &self,
        id: i64,
        strategy: &NewStrategy,
    ) -> Result<Strategy, ApiError> {
        self.put_data(&format!("/strategies/{}", id), strategy).await
    }

    pub async fn delete_strategy(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(&format!("/strategies/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_client;
    use crate::models::NewStrategy;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_update_strategy_puts_to_id_path() {
        let server = MockServer::start().await;
        let payload = NewStrategy {
            strategy_name: "Wheel".to_string(),
            description: Some("Sell puts, take assignment, sell calls".to_string()),
        };
        Mock::given(method("PUT"))
            .and(path("/api/strategies/4"))
            .and(body_json(json!({
                "strategyName": "Wheel",
                "description": "Sell puts, take assignment, sell calls"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "SUCCESS",
                "message": "updated",
                "data": {
                    "id": 4,
                    "strategyName": "Wheel",
                    "description": "Sell puts, take assignment, sell calls",
                    "createdAt": "2024-03-01T09:15:00",
                    "updatedAt": "2024-06-02T10:00:00"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let updated = test_client(&server.uri())
            .update_strategy(4, &payload)
            .await
            .unwrap();
        assert_eq!(updated.strategy_name, "Wheel");
    }

    #[tokio::test]
    async fn test_delete_strategy_succeeds_on_null_data() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/strategies/4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "SUCCESS",
                "message": "deleted",
                "data": null
            })))
            .expect(1)
            .mount(&server)
            .await;

        test_client(&server.uri()).delete_strategy(4).await.unwrap();
    }
}
