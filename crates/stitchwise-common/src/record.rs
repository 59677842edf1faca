//! The loosely-typed analysis record returned by the ethics analyzer service.
//!
//! The service emits a flat JSON object whose fields are all optional and
//! occasionally wrongly typed (it is ultimately an LLM behind a scraper).
//! Every accessor here is total: a missing or mistyped field reads as `None`
//! and the normalizer substitutes its documented default downstream.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Wire keys as the analyzer service emits them.
pub mod keys {
    pub const OVERALL_ETHICAL_RATING: &str = "Overall Ethical Rating";
    pub const BRAND: &str = "Brand";
    pub const PRODUCT_NAME: &str = "Product Name";
    pub const ANIMAL_MATERIALS: &str = "Animal Materials";
    pub const MATERIAL_COMPOSITION: &str = "Material Composition";
    pub const MANUFACTURING_COUNTRY: &str = "Manufacturing Country";
    pub const SUSTAINABILITY_PRACTICES: &str = "Sustainability Practices";
    pub const LABOR_CONDITIONS: &str = "Labor Conditions";
    pub const TRANSPARENCY_LEVEL: &str = "Transparency Level";
    pub const RELATED_LINKS: &str = "Related Links";
    /// Present only on failure payloads.
    pub const ERROR: &str = "Error";
}

/// One analysis result, exactly as received.
///
/// Lives only as transient hand-off state between the submission and report
/// views; never persisted, never re-fetchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawAnalysisRecord(Map<String, Value>);

impl RawAnalysisRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an arbitrary response body. Anything other than a JSON object
    /// becomes the empty record — a malformed payload is never an error.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// JavaScript-style truthiness over JSON values.
///
/// The defaulting rules substitute a fallback for any falsy raw value, not
/// just absent ones: `0`, `""`, `false`, and `null` all read as missing.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_non_object_is_empty() {
        assert!(RawAnalysisRecord::from_value(json!("not an object")).is_empty());
        assert!(RawAnalysisRecord::from_value(json!([1, 2, 3])).is_empty());
        assert!(RawAnalysisRecord::from_value(Value::Null).is_empty());
    }

    #[test]
    fn test_accessors_are_total() {
        let record = RawAnalysisRecord::from_value(json!({
            "Brand": "Acme",
            "Overall Ethical Rating": "eight",
        }));
        assert_eq!(record.text(keys::BRAND), Some("Acme"));
        // Wrongly typed rating reads as absent, not as an error.
        assert_eq!(record.number(keys::OVERALL_ETHICAL_RATING), None);
        assert_eq!(record.text(keys::LABOR_CONDITIONS), None);
    }

    #[test]
    fn test_deserializes_from_plain_object() {
        let record: RawAnalysisRecord =
            serde_json::from_str(r#"{"Overall Ethical Rating": 8.5}"#).unwrap();
        assert_eq!(record.number(keys::OVERALL_ETHICAL_RATING), Some(8.5));
    }

    #[test]
    fn test_truthiness() {
        assert!(!truthy(&json!(null)));
        assert!(!truthy(&json!(false)));
        assert!(!truthy(&json!(0)));
        assert!(!truthy(&json!(0.0)));
        assert!(!truthy(&json!("")));
        assert!(truthy(&json!("0")));
        assert!(truthy(&json!(-1)));
        assert!(truthy(&json!([])));
        assert!(truthy(&json!({})));
    }
}
