use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::common::Identified;

/// Faculty consent for a student to add a section (legacy version 1 resource).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct AddAuthorization {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub section_id: String,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub add_authorization_code: Option<String>,
    #[serde(default)]
    pub is_revoked: bool,
    #[serde(default)]
    pub assigned_by: Option<String>,
    #[serde(default)]
    pub assigned_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub revoked_by: Option<String>,
    #[serde(default)]
    pub revoked_time: Option<DateTime<Utc>>,
}

impl Identified for AddAuthorization {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of a create request; the ERP assigns the id and code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct AddAuthorizationInput {
    #[validate(length(min = 1))]
    pub section_id: String,
    #[validate(length(min = 1))]
    pub student_id: String,
    #[serde(default)]
    pub assigned_by: Option<String>,
    #[serde(default)]
    pub assigned_time: Option<DateTime<Utc>>,
}
