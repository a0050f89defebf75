//! Paged list responses.
//!
//! The body is the plain JSON array of entities; paging metadata travels in
//! headers (`X-Total-Count`, `X-hedtech-pageOffset`, `X-hedtech-pageMaxSize`)
//! with an optional RFC 8288 `Link` header for navigation.

use axum::{
    http::{header, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::request::paging::{Paging, LIMIT_PARAM, OFFSET_PARAM};

pub const TOTAL_COUNT_HEADER: &str = "x-total-count";
pub const PAGE_OFFSET_HEADER: &str = "x-hedtech-pageoffset";
pub const PAGE_MAX_SIZE_HEADER: &str = "x-hedtech-pagemaxsize";

/// Navigation links for paginated responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationLinks {
    pub first: String,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub last: String,
}

impl PaginationLinks {
    /// Creates links for `path`, preserving every query parameter except
    /// the paging ones.
    pub fn new(path: &str, query: &[(String, String)], paging: Paging, total: usize) -> Self {
        let limit = paging.limit.max(1);
        let last_offset = if total == 0 {
            0
        } else {
            ((total - 1) / limit) * limit
        };

        let link = |offset: usize| {
            let mut serializer = url::form_urlencoded::Serializer::new(String::new());
            for (key, value) in query {
                if key != OFFSET_PARAM && key != LIMIT_PARAM {
                    serializer.append_pair(key, value);
                }
            }
            serializer.append_pair(OFFSET_PARAM, &offset.to_string());
            serializer.append_pair(LIMIT_PARAM, &limit.to_string());
            format!("{}?{}", path, serializer.finish())
        };

        let prev = (paging.offset > 0).then(|| link(paging.offset.saturating_sub(limit)));
        let next = (paging.offset + limit < total).then(|| link(paging.offset + limit));

        Self {
            first: link(0),
            prev,
            next,
            last: link(last_offset),
        }
    }

    pub fn header_value(&self) -> String {
        let mut links = vec![format!("<{}>; rel=\"first\"", self.first)];
        if let Some(prev) = &self.prev {
            links.push(format!("<{}>; rel=\"prev\"", prev));
        }
        if let Some(next) = &self.next {
            links.push(format!("<{}>; rel=\"next\"", next));
        }
        links.push(format!("<{}>; rel=\"last\"", self.last));
        links.join(", ")
    }
}

/// A page of entities together with the paging window and total count.
#[derive(Debug, Clone)]
pub struct PagedResponse<T> {
    pub items: Vec<T>,
    pub paging: Paging,
    pub total: usize,
    pub links: Option<PaginationLinks>,
}

impl<T> PagedResponse<T> {
    pub fn new(items: Vec<T>, paging: Paging, total: usize) -> Self {
        Self {
            items,
            paging,
            total,
            links: None,
        }
    }

    /// Paged response for a request that cannot match anything.
    pub fn empty(paging: Paging) -> Self {
        Self::new(Vec::new(), paging, 0)
    }

    pub fn with_links(mut self, path: &str, query: &[(String, String)]) -> Self {
        self.links = Some(PaginationLinks::new(path, query, self.paging, self.total));
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from(self.total));
        headers.insert(PAGE_OFFSET_HEADER, HeaderValue::from(self.paging.offset));
        headers.insert(PAGE_MAX_SIZE_HEADER, HeaderValue::from(self.paging.limit));
        if let Some(links) = &self.links {
            if let Ok(value) = HeaderValue::from_str(&links.header_value()) {
                headers.insert(header::LINK, value);
            }
        }
        headers
    }
}

impl<T: Serialize> IntoResponse for PagedResponse<T> {
    fn into_response(self) -> Response {
        let headers = self.headers();
        (headers, Json(self.items)).into_response()
    }
}
