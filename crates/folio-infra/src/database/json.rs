//! JSONB list columns.
//!
//! List-valued fields are stored as JSON arrays. A value that no longer
//! matches the element type reads back as an empty list and is logged.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub(crate) fn decode_list<T: DeserializeOwned>(column: &'static str, value: Value) -> Vec<T> {
    if value.is_null() {
        return Vec::new();
    }
    match serde_json::from_value(value) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(column, error = %e, "Undecodable list column, using empty list");
            Vec::new()
        }
    }
}

pub(crate) fn encode_list<T: Serialize>(items: &[T]) -> Value {
    serde_json::to_value(items).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to encode list column");
        Value::Array(Vec::new())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::domain::Faq;
    use serde_json::json;

    #[test]
    fn decodes_in_order() {
        let faqs: Vec<Faq> = decode_list(
            "faqs",
            json!([
                {"question": "Q1", "answer": "A1"},
                {"question": "Q2", "answer": "A2"}
            ]),
        );
        assert_eq!(faqs.len(), 2);
        assert_eq!(faqs[0].question, "Q1");
        assert_eq!(faqs[1].answer, "A2");
    }

    #[test]
    fn malformed_value_reads_as_empty() {
        let faqs: Vec<Faq> = decode_list("faqs", json!("not a list"));
        assert!(faqs.is_empty());

        let images: Vec<String> = decode_list("images", Value::Null);
        assert!(images.is_empty());
    }

    #[test]
    fn encodes_strings_as_array() {
        let value = encode_list(&["a".to_string(), "b".to_string()]);
        assert_eq!(value, json!(["a", "b"]));
    }
}
