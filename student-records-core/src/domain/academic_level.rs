use serde::{Deserialize, Serialize};

use super::{common::Identified, ids::Guid};

/// Legacy (version 1) academic level: ERP code plus description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcademicLevel {
    pub code: String,
    pub description: String,
}

impl Identified for AcademicLevel {
    fn id(&self) -> &str {
        &self.code
    }
}

/// Academic level, v6.1.0 representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicLevel2 {
    pub id: Guid,
    pub code: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Identified for AcademicLevel2 {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}
