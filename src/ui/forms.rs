//! Form field state and input validation for the modal editors

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Free-text input with an attached validation error
#[derive(Debug, Clone)]
pub struct TextField {
    pub label: &'static str,
    pub value: String,
    pub error: Option<String>,
}

impl TextField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            error: None,
        }
    }

    pub fn with_value(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            error: None,
        }
    }

    pub fn insert(&mut self, c: char) {
        self.value.push(c);
        self.error = None;
    }

    pub fn backspace(&mut self) {
        self.value.pop();
        self.error = None;
    }

    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    /// Trimmed value as an optional payload field
    pub fn optional(&self) -> Option<String> {
        let trimmed = self.trimmed();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

/// One-of-N choice cycled with the arrow keys
#[derive(Debug, Clone)]
pub struct SelectField<T> {
    pub label: &'static str,
    pub options: Vec<T>,
    pub selected: usize,
    pub error: Option<String>,
}

impl<T> SelectField<T> {
    pub fn new(label: &'static str, options: Vec<T>) -> Self {
        Self {
            label,
            options,
            selected: 0,
            error: None,
        }
    }

    pub fn current(&self) -> Option<&T> {
        self.options.get(self.selected)
    }

    pub fn next_option(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
            self.error = None;
        }
    }

    pub fn previous_option(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + self.options.len() - 1) % self.options.len();
            self.error = None;
        }
    }

    pub fn select_where(&mut self, predicate: impl Fn(&T) -> bool) {
        if let Some(index) = self.options.iter().position(predicate) {
            self.selected = index;
        }
    }
}

/// Cursor over a form's fields; Tab order is declaration order
#[derive(Debug, Clone, Copy)]
pub struct Focus {
    pub index: usize,
    pub count: usize,
}

impl Focus {
    pub fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.count;
    }

    pub fn previous(&mut self) {
        self.index = (self.index + self.count - 1) % self.count;
    }
}

// Validators mirror the server's column constraints so bad input never
// leaves the client.

pub fn require(value: &str, label: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(format!("{} is required", label))
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn max_len(value: &str, limit: usize, label: &str) -> Result<(), String> {
    if value.chars().count() > limit {
        Err(format!("{} must be at most {} characters", label, limit))
    } else {
        Ok(())
    }
}

/// Loose shape check: one `@` with something on both sides and a dot after
pub fn valid_email(value: &str) -> Result<(), String> {
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.ends_with('.') {
        Err("Invalid email address".to_string())
    } else {
        Ok(())
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| "Date must be YYYY-MM-DD".to_string())
}

pub fn parse_positive_decimal(value: &str, label: &str) -> Result<Decimal, String> {
    let parsed = Decimal::from_str(value.trim())
        .map_err(|_| format!("{} must be a number", label))?;
    if parsed <= Decimal::ZERO {
        Err(format!("{} must be greater than zero", label))
    } else {
        Ok(parsed)
    }
}

pub fn parse_non_negative_decimal(value: &str, label: &str) -> Result<Decimal, String> {
    let parsed = Decimal::from_str(value.trim())
        .map_err(|_| format!("{} must be a number", label))?;
    if parsed < Decimal::ZERO {
        Err(format!("{} must not be negative", label))
    } else {
        Ok(parsed)
    }
}

pub fn parse_positive_int(value: &str, label: &str) -> Result<i64, String> {
    let parsed: i64 = value
        .trim()
        .parse()
        .map_err(|_| format!("{} must be a whole number", label))?;
    if parsed <= 0 {
        Err(format!("{} must be greater than zero", label))
    } else {
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_require_trims_and_rejects_blank() {
        assert_eq!(require("  Futu ", "Name").unwrap(), "Futu");
        assert!(require("   ", "Name").is_err());
    }

    #[test]
    fn test_max_len_counts_characters() {
        assert!(max_len("abcde", 5, "Code").is_ok());
        assert!(max_len("abcdef", 5, "Code").is_err());
    }

    #[test]
    fn test_email_shapes() {
        assert!(valid_email("ops@broker.example").is_ok());
        assert!(valid_email("no-at-sign").is_err());
        assert!(valid_email("@broker.example").is_err());
        assert!(valid_email("ops@nodot").is_err());
        assert!(valid_email("ops@trailing.").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-06-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        assert!(parse_date("06/01/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
    }

    #[test]
    fn test_amount_must_be_positive() {
        assert_eq!(parse_positive_decimal("1000.00", "Amount").unwrap(), dec!(1000));
        assert!(parse_positive_decimal("0", "Amount").is_err());
        assert!(parse_positive_decimal("-5", "Amount").is_err());
        assert!(parse_positive_decimal("ten", "Amount").is_err());
    }

    #[test]
    fn test_fee_may_be_zero() {
        assert_eq!(parse_non_negative_decimal("0", "Fee").unwrap(), Decimal::ZERO);
        assert!(parse_non_negative_decimal("-0.01", "Fee").is_err());
    }

    #[test]
    fn test_quantity_is_a_positive_integer() {
        assert_eq!(parse_positive_int("100", "Quantity").unwrap(), 100);
        assert!(parse_positive_int("0", "Quantity").is_err());
        assert!(parse_positive_int("1.5", "Quantity").is_err());
    }

    #[test]
    fn test_select_field_cycles() {
        let mut select = SelectField::new("Currency", vec!["CNY", "HKD", "USD"]);
        assert_eq!(select.current(), Some(&"CNY"));
        select.next_option();
        assert_eq!(select.current(), Some(&"HKD"));
        select.previous_option();
        select.previous_option();
        assert_eq!(select.current(), Some(&"USD"));
    }

    #[test]
    fn test_focus_wraps() {
        let mut focus = Focus::new(3);
        focus.previous();
        assert_eq!(focus.index, 2);
        focus.next();
        assert_eq!(focus.index, 0);
    }
}
