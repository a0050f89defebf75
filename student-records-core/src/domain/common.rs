use serde::{Deserialize, Serialize};

use super::ids::Guid;

/// Anything the integration API hands back that carries an identifier.
///
/// Ethos metadata (privacy lists, extended data) is keyed by this value.
pub trait Identified {
    fn id(&self) -> &str;
}

/// Reference to another resource, serialized as `{"id": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuidObject {
    pub id: Guid,
}

impl GuidObject {
    pub fn new(id: impl Into<Guid>) -> Self {
        Self { id: id.into() }
    }
}

/// Named query `personFilter`: restricts results to the members of a saved person filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PersonFilterFilter {
    pub person_filter: Option<GuidObject>,
}

impl PersonFilterFilter {
    pub fn person_filter_id(&self) -> Option<Guid> {
        self.person_filter.as_ref().map(|p| p.id.clone())
    }
}

/// One page of a larger result set together with the total number of matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: usize) -> Self {
        Self { items, total }
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}
