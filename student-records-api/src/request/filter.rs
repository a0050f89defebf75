//! JSON filter parameters carried in the query string.
//!
//! Each endpoint declares the parameter names it understands (`criteria`,
//! `personFilter`, ...). Resolution is purely syntactic: the raw value is
//! parsed as JSON, and typed shapes are decoded on demand.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

use crate::error::ApiError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("Invalid JSON in filter parameter '{name}': {message}")]
    InvalidJson { name: String, message: String },

    #[error("Filter parameter '{name}' does not match the expected shape: {message}")]
    Shape { name: String, message: String },
}

impl From<FilterError> for ApiError {
    fn from(err: FilterError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

/// The declared filter parameters present on one request, parsed to JSON.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterParams {
    values: Vec<(&'static str, Value)>,
}

impl FilterParams {
    /// Parse every declared parameter that appears in `query`.
    ///
    /// Undeclared parameters are ignored. A blank value counts as `null`.
    pub fn resolve(
        query: &HashMap<String, String>,
        declared: &[&'static str],
    ) -> Result<Self, FilterError> {
        let mut values = Vec::new();
        for name in declared {
            let Some(raw) = query.get(*name) else { continue };
            let value = if raw.trim().is_empty() {
                Value::Null
            } else {
                serde_json::from_str(raw).map_err(|e| FilterError::InvalidJson {
                    name: name.to_string(),
                    message: e.to_string(),
                })?
            };
            values.push((*name, value));
        }
        Ok(Self { values })
    }

    pub fn is_present(&self) -> bool {
        !self.values.is_empty()
    }

    /// True when the caller supplied filter parameters but none of them
    /// constrains anything. Such a request matches nothing.
    pub fn is_empty_request(&self) -> bool {
        self.is_present() && self.values.iter().all(|(_, v)| is_meaningless(v))
    }

    pub fn raw(&self, name: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    /// Decode a parameter into its typed shape.
    ///
    /// Missing or meaningless values decode to `T::default()`.
    pub fn decode<T>(&self, name: &str) -> Result<T, FilterError>
    where
        T: DeserializeOwned + Default,
    {
        match self.raw(name) {
            Some(value) if !is_meaningless(value) => serde_json::from_value(value.clone())
                .map_err(|e| FilterError::Shape {
                    name: name.to_string(),
                    message: e.to_string(),
                }),
            _ => Ok(T::default()),
        }
    }
}

/// `null`, blank strings, empty arrays and objects whose members are all
/// meaningless carry no constraint.
pub fn is_meaningless(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.iter().all(is_meaningless),
        Value::Object(map) => map.values().all(is_meaningless),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde::Deserialize;
    use serde_json::json;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(deny_unknown_fields)]
    struct Criteria {
        code: Option<String>,
    }

    #[rstest]
    #[case(json!(null), true)]
    #[case(json!(""), true)]
    #[case(json!("  "), true)]
    #[case(json!({}), true)]
    #[case(json!([]), true)]
    #[case(json!({"student": {"id": ""}}), true)]
    #[case(json!({"academicPrograms": [{"id": null}]}), true)]
    #[case(json!({"code": "MATH"}), false)]
    #[case(json!({"registration": "open"}), false)]
    #[case(json!(false), false)]
    #[case(json!(0), false)]
    fn test_is_meaningless(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_meaningless(&value), expected);
    }

    #[test]
    fn test_undeclared_parameters_are_ignored() {
        let params = FilterParams::resolve(
            &query(&[("criteria", "{}"), ("other", "{not json")]),
            &["criteria"],
        )
        .unwrap();
        assert!(params.is_present());
        assert!(params.is_empty_request());
    }

    #[test]
    fn test_no_filters_is_not_an_empty_request() {
        let params = FilterParams::resolve(&query(&[]), &["criteria", "personFilter"]).unwrap();
        assert!(!params.is_present());
        assert!(!params.is_empty_request());
    }

    #[test]
    fn test_any_meaningful_parameter_keeps_request_alive() {
        let params = FilterParams::resolve(
            &query(&[
                ("criteria", "{}"),
                ("personFilter", r#"{"personFilter":{"id":"abc"}}"#),
            ]),
            &["criteria", "personFilter"],
        )
        .unwrap();
        assert!(!params.is_empty_request());
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = FilterParams::resolve(&query(&[("criteria", "{code:")]), &["criteria"])
            .unwrap_err();
        assert!(matches!(err, FilterError::InvalidJson { ref name, .. } if name == "criteria"));
    }

    #[test]
    fn test_blank_value_counts_as_null() {
        let params = FilterParams::resolve(&query(&[("criteria", "")]), &["criteria"]).unwrap();
        assert_eq!(params.raw("criteria"), Some(&Value::Null));
        assert!(params.is_empty_request());
    }

    #[test]
    fn test_decode_typed_shape() {
        let params = FilterParams::resolve(
            &query(&[("criteria", r#"{"code":"MATH"}"#)]),
            &["criteria"],
        )
        .unwrap();
        let criteria: Criteria = params.decode("criteria").unwrap();
        assert_eq!(criteria.code.as_deref(), Some("MATH"));

        let missing: Criteria = params.decode("personFilter").unwrap();
        assert_eq!(missing, Criteria::default());
    }

    #[test]
    fn test_decode_shape_mismatch() {
        let params = FilterParams::resolve(
            &query(&[("criteria", r#"{"colour":"red"}"#)]),
            &["criteria"],
        )
        .unwrap();
        let err = params.decode::<Criteria>("criteria").unwrap_err();
        assert!(matches!(err, FilterError::Shape { .. }));
    }
}
