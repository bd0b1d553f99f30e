//! Quotation records consumed by the renderer.
//!
//! These types are plain data supplied by the caller. The renderer reads them
//! and never recomputes or cross-checks the arithmetic they carry: a line's
//! `total` and the grand `total` are displayed exactly as given.

use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A priced offer sent to a prospective customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    #[serde(default)]
    pub reference_number: String,
    #[serde(with = "quote_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub email: String,
    /// Tax identifier of the customer
    #[serde(default)]
    pub gstn: String,
    /// Free text; embedded line breaks are kept in the output
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
    /// Grand total as supplied by the caller
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One priced entry of a quotation.
///
/// Numeric fields are optional so that a malformed record still renders; an
/// absent value shows up as a blank cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit_price: Option<f64>,
    #[serde(default)]
    pub total: Option<f64>,
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: f64, unit_price: f64, total: f64) -> Self {
        Self {
            description: description.into(),
            quantity: Some(quantity),
            unit_price: Some(unit_price),
            total: Some(total),
        }
    }
}

impl Quotation {
    /// Parse a quotation from its JSON representation (camelCase keys).
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidInput(e.to_string()))
    }

    /// Read and parse a quotation JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&raw)
    }

    /// Notes to print, or `None` when the block should be left out.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.is_empty())
    }
}

/// Parse the date forms accepted on input.
///
/// A bare `YYYY-MM-DD` is taken as a calendar date. Timestamps keep the date
/// in their own offset; nothing is shifted into the local zone.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

mod quote_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_date(&raw)
            .ok_or_else(|| de::Error::custom(format!("unrecognised date `{}`", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_json() {
        let q = Quotation::from_json(
            r#"{
                "referenceNumber": "Q-2024-001",
                "date": "2024-04-05",
                "customerName": "Acme Fabricators",
                "email": "buyer@acme.test",
                "gstn": "09ABCDE1234F1Z5",
                "address": "12 Mill Road\nKanpur",
                "items": [{"description": "Clear float 6mm", "quantity": 3, "unitPrice": 10, "total": 30}],
                "total": 30
            }"#,
        )
        .unwrap();
        assert_eq!(q.reference_number, "Q-2024-001");
        assert_eq!(q.date, NaiveDate::from_ymd_opt(2024, 4, 5).unwrap());
        assert_eq!(q.items[0].unit_price, Some(10.0));
        assert_eq!(q.total, Some(30.0));
        assert!(q.notes().is_none());
    }

    #[test]
    fn missing_numbers_are_absent_not_errors() {
        let q = Quotation::from_json(
            r#"{"date": "2024-01-02", "items": [{"description": "Hole charges"}]}"#,
        )
        .unwrap();
        assert_eq!(q.items[0].quantity, None);
        assert_eq!(q.items[0].total, None);
        assert_eq!(q.total, None);
    }

    #[test]
    fn empty_notes_are_treated_as_absent() {
        let mut q = Quotation::from_json(r#"{"date": "2024-01-02", "notes": ""}"#).unwrap();
        assert!(q.notes().is_none());
        q.notes = Some("Rush order".into());
        assert_eq!(q.notes(), Some("Rush order"));
    }

    #[test]
    fn timestamps_keep_their_own_date() {
        assert_eq!(
            parse_date("2024-04-05T23:30:00+05:30"),
            NaiveDate::from_ymd_opt(2024, 4, 5)
        );
        assert_eq!(
            parse_date("2024-04-05T10:00:00.000Z"),
            NaiveDate::from_ymd_opt(2024, 4, 5)
        );
        assert_eq!(
            parse_date("2024-04-05T10:00:00"),
            NaiveDate::from_ymd_opt(2024, 4, 5)
        );
        assert!(parse_date("next tuesday").is_none());
    }

    #[test]
    fn invalid_date_is_reported_as_invalid_input() {
        let err = Quotation::from_json(r#"{"date": "05/04/2024"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
