//! Trading strategy reference data

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Strategy a trade can be attributed to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    pub id: i64,
    pub strategy_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload for creating or updating a strategy
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStrategy {
    pub strategy_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_deserializes_server_timestamps() {
        let json = r#"{
            "id": 7,
            "strategyName": "Covered calls",
            "description": "Monthly income on core holdings",
            "createdAt": "2024-03-01T09:15:00",
            "updatedAt": "2024-05-20T18:02:11"
        }"#;
        let strategy: Strategy = serde_json::from_str(json).unwrap();
        assert_eq!(strategy.id, 7);
        assert_eq!(strategy.strategy_name, "Covered calls");
        assert_eq!(
            strategy.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2024-03-01 09:15:00"
        );
        assert!(strategy.updated_at > strategy.created_at);
    }

    #[test]
    fn test_new_strategy_serializes_camel_case() {
        let payload = NewStrategy {
            strategy_name: "Grid trading".to_string(),
            description: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["strategyName"], "Grid trading");
        assert!(json.get("description").is_none());
    }
}
