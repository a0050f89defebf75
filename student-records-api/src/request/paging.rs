use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::error::ApiError;

pub const OFFSET_PARAM: &str = "offset";
pub const LIMIT_PARAM: &str = "limit";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PagingError {
    #[error("Invalid offset '{0}': expected a non-negative integer")]
    InvalidOffset(String),

    #[error("Invalid limit '{0}': expected a positive integer")]
    InvalidLimit(String),
}

impl From<PagingError> for ApiError {
    fn from(err: PagingError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

/// Offset/limit window requested for a paged list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    pub offset: usize,
    pub limit: usize,
}

impl Paging {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }

    /// Read `offset` and `limit` from the query string.
    ///
    /// Absent values take `(0, default_limit)`; a limit above the default is
    /// clamped to it.
    pub fn from_query(
        query: &HashMap<String, String>,
        default_limit: usize,
    ) -> Result<Self, PagingError> {
        let offset = match non_blank(query, OFFSET_PARAM) {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|_| PagingError::InvalidOffset(raw.to_string()))?,
            None => 0,
        };

        let limit = match non_blank(query, LIMIT_PARAM) {
            Some(raw) => match raw.parse::<usize>() {
                Ok(0) | Err(_) => return Err(PagingError::InvalidLimit(raw.to_string())),
                Ok(limit) => limit.min(default_limit),
            },
            None => default_limit,
        };

        Ok(Self { offset, limit })
    }
}

fn non_blank<'a>(query: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    query
        .get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_absent() {
        let paging = Paging::from_query(&query(&[]), 100).unwrap();
        assert_eq!(paging, Paging::new(0, 100));
    }

    #[test]
    fn test_explicit_values() {
        let paging = Paging::from_query(&query(&[("offset", "20"), ("limit", "10")]), 100).unwrap();
        assert_eq!(paging, Paging::new(20, 10));
    }

    #[test]
    fn test_limit_is_clamped_to_default() {
        let paging = Paging::from_query(&query(&[("limit", "500")]), 100).unwrap();
        assert_eq!(paging.limit, 100);
    }

    #[rstest]
    #[case("-1")]
    #[case("ten")]
    #[case("1.5")]
    fn test_invalid_offset(#[case] raw: &str) {
        let err = Paging::from_query(&query(&[("offset", raw)]), 100).unwrap_err();
        assert_eq!(err, PagingError::InvalidOffset(raw.to_string()));
    }

    #[rstest]
    #[case("0")]
    #[case("-5")]
    #[case("all")]
    fn test_invalid_limit(#[case] raw: &str) {
        let err = Paging::from_query(&query(&[("limit", raw)]), 100).unwrap_err();
        assert_eq!(err, PagingError::InvalidLimit(raw.to_string()));
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let paging = Paging::from_query(&query(&[("offset", ""), ("limit", " ")]), 200).unwrap();
        assert_eq!(paging, Paging::new(0, 200));
    }
}
