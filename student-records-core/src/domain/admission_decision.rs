use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    common::{GuidObject, Identified},
    ids::Guid,
};

/// Admission decision, v11.1.0 representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionDecision {
    #[serde(default)]
    pub id: Guid,
    pub application: GuidObject,
    pub decision_type: GuidObject,
    pub decided_on: DateTime<Utc>,
}

impl Identified for AdmissionDecision {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

/// `criteria` filter for the admission decisions list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AdmissionDecisionCriteria {
    pub application: Option<GuidObject>,
    pub decided_on: Option<DateTime<Utc>>,
}

/// Normalized arguments for an admission decisions query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdmissionDecisionQuery {
    pub application_id: Option<Guid>,
    pub decided_on: Option<DateTime<Utc>>,
    pub person_filter: Option<Guid>,
}
