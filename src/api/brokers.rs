//! Broker directory endpoints

use super::{ApiClient, ApiError};
use crate::models::{Broker, Country, NewBroker};

impl ApiClient {
    pub async fn fetch_brokers(&self) -> Result<Vec<Broker>, ApiError> {
        self.get_data("/brokers").await
    }

    pub async fn fetch_broker(&self, id: i64) -> Result<Broker, ApiError> {
        self.get_data(&format!("/brokers/{}", id)).await
    }

    /// Brokers with `isActive` set, used to fill form selects
    pub async fn fetch_active_brokers(&self) -> Result<Vec<Broker>, ApiError> {
        self.get_data("/brokers/active").await
    }

    pub async fn fetch_brokers_by_country(
        &self,
        country: &Country,
    ) -> Result<Vec<Broker>, ApiError> {
        self.get_data(&format!("/brokers/country/{}", country.code()))
            .await
    }

    pub async fn search_brokers(&self, keyword: &str) -> Result<Vec<Broker>, ApiError> {
        self.get_data_with_query("/brokers/search", &[("keyword", keyword)])
            .await
    }

    pub async fn create_broker(&self, broker: &NewBroker) -> Result<Broker, ApiError> {
        self.post_data("/brokers", broker).await
    }

    pub async fn update_broker(&self, id: i64, broker: &NewBroker) -> Result<Broker, ApiError> {
        self.put_data(&format!("/brokers/{}", id), broker).await
    }

    pub async fn delete_broker(&self, id: i64) -> Result<(), ApiError> {
        self.delete_resource(&format!("/brokers/{}", id)).await
    }
}
