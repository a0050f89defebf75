//! Request normalization shared by every endpoint.

pub mod filter;
pub mod paging;

pub use filter::{FilterError, FilterParams};
pub use paging::{Paging, PagingError};

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap, Uri},
};
use std::collections::HashMap;

use crate::{error::ApiError, middleware::auth::Caller};

/// Everything the pipeline needs from the incoming request.
#[derive(Debug, Clone)]
pub struct EndpointRequest {
    pub caller: Caller,
    pub bypass_cache: bool,
    pub query: HashMap<String, String>,
    pub uri: Uri,
}

impl EndpointRequest {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        parse_query(self.uri.query())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for EndpointRequest
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let caller = parts
            .extensions
            .get::<Caller>()
            .cloned()
            .ok_or_else(|| ApiError::Unauthorized("Authentication is required.".to_string()))?;

        Ok(Self {
            caller,
            bypass_cache: bypass_cache(&parts.headers),
            query: parse_query(parts.uri.query()).into_iter().collect(),
            uri: parts.uri.clone(),
        })
    }
}

/// `Cache-Control: no-cache` asks the service to skip its caches.
///
/// No other directive is interpreted.
pub fn bypass_cache(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::CACHE_CONTROL)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .any(|directive| directive.trim().eq_ignore_ascii_case("no-cache"))
}

fn parse_query(query: Option<&str>) -> Vec<(String, String)> {
    query
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use rstest::rstest;

    #[rstest]
    #[case(Some("no-cache"), true)]
    #[case(Some("No-Cache"), true)]
    #[case(Some("max-age=0, no-cache"), true)]
    #[case(Some("no-store"), false)]
    #[case(Some("max-age=60"), false)]
    #[case(None, false)]
    fn test_bypass_cache(#[case] value: Option<&'static str>, #[case] expected: bool) {
        let mut headers = HeaderMap::new();
        if let Some(value) = value {
            headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(value));
        }
        assert_eq!(bypass_cache(&headers), expected);
    }

    #[test]
    fn test_parse_query_decodes_json_values() {
        let pairs = parse_query(Some("criteria=%7B%22type%22%3A%22major%22%7D&limit=5"));
        assert_eq!(
            pairs,
            vec![
                ("criteria".to_string(), r#"{"type":"major"}"#.to_string()),
                ("limit".to_string(), "5".to_string()),
            ]
        );
    }
}
