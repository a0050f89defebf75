use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Identifies a resource and the representation version being served.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceRoute {
    pub resource: String,
    pub version: String,
}

impl ResourceRoute {
    pub fn new(resource: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for ResourceRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{}", self.resource, self.version)
    }
}

/// Tenant-specific extension properties for one entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedData {
    pub resource_id: String,
    pub properties: Map<String, Value>,
}

/// Privacy and extension metadata gathered for a successful read.
///
/// Attached to the response and applied to the body on the way out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EthosContext {
    /// Dotted property paths (e.g. `person.id`) the caller may not see.
    pub privacy_paths: Vec<String>,
    pub extended: Vec<ExtendedData>,
}

impl EthosContext {
    pub fn new(privacy_paths: Vec<String>, extended: Vec<ExtendedData>) -> Self {
        Self {
            privacy_paths,
            extended,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.privacy_paths.is_empty() && self.extended.is_empty()
    }

    pub fn extended_for(&self, id: &str) -> Option<&ExtendedData> {
        self.extended
            .iter()
            .find(|e| e.resource_id.eq_ignore_ascii_case(id))
    }
}
