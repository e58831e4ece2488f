//! Broker directory types

use serde::{Deserialize, Serialize};

use super::tag::TagColor;

/// Country or region a broker operates from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Country {
    Cn,
    Hk,
    Us,
    Sg,
    Uk,
    Jp,
    Nz,
    Au,
    Other(String),
}

impl Country {
    pub fn all() -> Vec<Country> {
        vec![
            Country::Cn,
            Country::Hk,
            Country::Us,
            Country::Sg,
            Country::Uk,
            Country::Jp,
            Country::Nz,
            Country::Au,
        ]
    }

    pub fn code(&self) -> &str {
        match self {
            Country::Cn => "CN",
            Country::Hk => "HK",
            Country::Us => "US",
            Country::Sg => "SG",
            Country::Uk => "UK",
            Country::Jp => "JP",
            Country::Nz => "NZ",
            Country::Au => "AU",
            Country::Other(code) => code,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Country::Cn => "China",
            Country::Hk => "Hong Kong",
            Country::Us => "United States",
            Country::Sg => "Singapore",
            Country::Uk => "United Kingdom",
            Country::Jp => "Japan",
            Country::Nz => "New Zealand",
            Country::Au => "Australia",
            Country::Other(code) => code,
        }
    }

    pub fn tag_color(&self) -> TagColor {
        match self {
            Country::Cn => TagColor::Red,
            Country::Hk => TagColor::Magenta,
            Country::Us => TagColor::Blue,
            Country::Sg => TagColor::Green,
            Country::Uk => TagColor::Purple,
            Country::Jp => TagColor::Orange,
            Country::Nz => TagColor::Cyan,
            Country::Au => TagColor::Gold,
            Country::Other(_) => TagColor::Default,
        }
    }
}

impl From<String> for Country {
    fn from(code: String) -> Self {
        match code.as_str() {
            "CN" => Country::Cn,
            "HK" => Country::Hk,
            "US" => Country::Us,
            "SG" => Country::Sg,
            "UK" => Country::Uk,
            "JP" => Country::Jp,
            "NZ" => Country::Nz,
            "AU" => Country::Au,
            _ => Country::Other(code),
        }
    }
}

impl From<Country> for String {
    fn from(value: Country) -> Self {
        value.code().to_string()
    }
}

/// Broker account as returned by the directory endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Broker {
    pub id: i64,
    pub broker_name: String,
    pub country: Country,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Payload for creating or updating a broker
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBroker {
    pub broker_name: String,
    pub country: Country,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_codes_round_trip() {
        for country in Country::all() {
            let code = country.code().to_string();
            assert_eq!(Country::from(code), country);
        }
    }

    #[test]
    fn test_unknown_country_falls_back() {
        let country = Country::from("DE".to_string());
        assert_eq!(country.code(), "DE");
        assert_eq!(country.label(), "DE");
        assert_eq!(country.tag_color(), TagColor::Default);
    }

    #[test]
    fn test_broker_deserializes_from_wire_shape() {
        let json = r#"{
            "id": 3,
            "brokerName": "Futu Securities",
            "country": "HK",
            "description": "Main HK account",
            "email": null,
            "phone": null,
            "isActive": false
        }"#;
        let broker: Broker = serde_json::from_str(json).unwrap();
        assert_eq!(broker.id, 3);
        assert_eq!(broker.broker_name, "Futu Securities");
        assert_eq!(broker.country, Country::Hk);
        assert_eq!(broker.description.as_deref(), Some("Main HK account"));
        assert_eq!(broker.email, None);
        assert!(!broker.is_active);
    }

    #[test]
    fn test_missing_is_active_defaults_to_true() {
        let json = r#"{"id": 1, "brokerName": "IBKR", "country": "US"}"#;
        let broker: Broker = serde_json::from_str(json).unwrap();
        assert!(broker.is_active);
    }

    #[test]
    fn test_new_broker_omits_empty_optionals() {
        let payload = NewBroker {
            broker_name: "Tiger".to_string(),
            country: Country::Sg,
            description: None,
            email: Some("ops@tiger.example".to_string()),
            phone: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["brokerName"], "Tiger");
        assert_eq!(json["country"], "SG");
        assert_eq!(json["email"], "ops@tiger.example");
        assert!(json.get("description").is_none());
        assert!(json.get("phone").is_none());
    }
}
