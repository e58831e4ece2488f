//! Settlement currencies

use serde::{Deserialize, Serialize};

use super::tag::TagColor;

/// Currency a record settles in
///
/// Unknown wire codes are preserved in `Other` so that new backend
/// currencies render as their raw code instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Currency {
    Cny,
    Hkd,
    Usd,
    Other(String),
}

impl Currency {
    /// Known currencies, in the order filter cycles and selects offer them
    pub fn all() -> Vec<Currency> {
        vec![Currency::Cny, Currency::Hkd, Currency::Usd]
    }

    /// Wire code for this currency
    pub fn code(&self) -> &str {
        match self {
            Currency::Cny => "CNY",
            Currency::Hkd => "HKD",
            Currency::Usd => "USD",
            Currency::Other(code) => code,
        }
    }

    /// Display label (currencies render as their code)
    pub fn label(&self) -> &str {
        self.code()
    }

    /// Symbol prefixed to trade amounts; HKD amounts carry no symbol
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            Currency::Cny => Some("¥"),
            Currency::Usd => Some("$"),
            Currency::Hkd | Currency::Other(_) => None,
        }
    }

    pub fn tag_color(&self) -> TagColor {
        match self {
            Currency::Cny => TagColor::Blue,
            Currency::Hkd => TagColor::Magenta,
            Currency::Usd => TagColor::Purple,
            Currency::Other(_) => TagColor::Default,
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Cny
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        match code.as_str() {
            "CNY" => Currency::Cny,
            "HKD" => Currency::Hkd,
            "USD" => Currency::Usd,
            _ => Currency::Other(code),
        }
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_round_trip() {
        for currency in Currency::all() {
            let code = currency.code().to_string();
            assert_eq!(Currency::from(code), currency);
        }
    }

    #[test]
    fn test_unknown_code_is_preserved() {
        let currency = Currency::from("EUR".to_string());
        assert_eq!(currency, Currency::Other("EUR".to_string()));
        assert_eq!(currency.code(), "EUR");
        assert_eq!(currency.tag_color(), TagColor::Default);
        assert_eq!(currency.symbol(), None);
    }

    #[test]
    fn test_serde_uses_wire_codes() {
        let json = serde_json::to_string(&Currency::Usd).unwrap();
        assert_eq!(json, "\"USD\"");
        let parsed: Currency = serde_json::from_str("\"HKD\"").unwrap();
        assert_eq!(parsed, Currency::Hkd);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Currency::Cny.symbol(), Some("¥"));
        assert_eq!(Currency::Usd.symbol(), Some("$"));
        assert_eq!(Currency::Hkd.symbol(), None);
    }
}
