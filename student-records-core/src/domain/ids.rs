use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The all-zero GUID. Create requests must carry it in place of a real id.
pub const NIL_GUID: &str = "00000000-0000-0000-0000-000000000000";

/// Opaque GUID addressing an integration resource.
///
/// Stored as the string the caller sent: the ERP decides whether it
/// refers to anything, so no parsing happens at the edge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Guid(pub String);

impl Guid {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn nil() -> Self {
        Self(NIL_GUID.to_string())
    }

    pub fn is_nil(&self) -> bool {
        self.0.eq_ignore_ascii_case(NIL_GUID)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// GUID comparison is case-insensitive.
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl Default for Guid {
    fn default() -> Self {
        Self::nil()
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Guid {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Guid {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<Uuid> for Guid {
    fn from(uuid: Uuid) -> Self {
        Self(uuid.to_string())
    }
}

impl AsRef<str> for Guid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
