//! Helpers for validating and merging editable fields.
//!
//! Convention for partial updates: an absent (or `null`) field keeps the
//! stored value; an empty string clears an optional field and is rejected
//! for a required one.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

use crate::error::DomainError;

/// Take a required field from a create request.
pub(crate) fn require(field: &str, value: Option<String>) -> Result<String, DomainError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DomainError::validation(format!("{field} is required"))),
    }
}

/// Overwrite a required field when the request provides it.
pub(crate) fn merge_required(
    target: &mut String,
    field: &str,
    value: Option<String>,
) -> Result<(), DomainError> {
    if let Some(v) = value {
        if v.trim().is_empty() {
            return Err(DomainError::validation(format!("{field} must not be empty")));
        }
        *target = v;
    }
    Ok(())
}

/// Overwrite an optional field when the request provides it.
pub(crate) fn merge_optional(target: &mut Option<String>, value: Option<String>) {
    if let Some(v) = value {
        *target = optional(Some(v));
    }
}

/// Empty or whitespace-only strings become `None`.
pub(crate) fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_datetime(field: &str, raw: &str) -> Result<DateTime<Utc>, DomainError> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DomainError::validation(format!("{field} is not a valid date")))
}

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
/// Use together with `#[serde(default)]`.
pub(crate) fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn require_rejects_blank() {
        assert!(require("title", Some("  ".into())).is_err());
        assert!(require("title", None).is_err());
        assert_eq!(require("title", Some("x".into())).unwrap(), "x");
    }

    #[test]
    fn merge_required_keeps_existing_when_absent() {
        let mut title = "old".to_string();
        merge_required(&mut title, "title", None).unwrap();
        assert_eq!(title, "old");
        merge_required(&mut title, "title", Some("new".into())).unwrap();
        assert_eq!(title, "new");
        assert!(merge_required(&mut title, "title", Some("".into())).is_err());
        assert_eq!(title, "new");
    }

    #[test]
    fn merge_optional_clears_on_empty_string() {
        let mut image = Some("/uploads/a.png".to_string());
        merge_optional(&mut image, None);
        assert!(image.is_some());
        merge_optional(&mut image, Some(String::new()));
        assert!(image.is_none());
    }

    #[test]
    fn parse_datetime_accepts_both_formats() {
        let d = parse_datetime("date", "2024-05-01").unwrap();
        assert_eq!((d.year(), d.month(), d.day(), d.hour()), (2024, 5, 1, 0));

        let t = parse_datetime("date", "2024-05-01T09:30:00+08:00").unwrap();
        assert_eq!(t.hour(), 1);

        assert!(parse_datetime("date", "next tuesday").is_err());
    }
}
