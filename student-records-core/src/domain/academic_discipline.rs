use serde::{Deserialize, Serialize};

use super::{common::Identified, ids::Guid};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcademicDisciplineType {
    Major,
    Minor,
    Concentration,
}

impl AcademicDisciplineType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AcademicDisciplineType::Major => "major",
            AcademicDisciplineType::Minor => "minor",
            AcademicDisciplineType::Concentration => "concentration",
        }
    }
}

/// Status of a major. `NotSet` means "do not constrain".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MajorStatus {
    #[default]
    NotSet,
    Active,
    Inactive,
}

/// Academic discipline, v6 representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicDiscipline {
    pub id: Guid,
    pub code: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub discipline_type: AcademicDisciplineType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingCountry {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discipline_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisciplineReporting {
    pub country: ReportingCountry,
}

/// Academic discipline, v7 and v10 representation (adds government reporting).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicDiscipline2 {
    pub id: Guid,
    pub code: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub discipline_type: AcademicDisciplineType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting: Option<Vec<DisciplineReporting>>,
}

/// Academic discipline, v15 representation (adds major status).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicDiscipline3 {
    pub id: Guid,
    pub code: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub discipline_type: AcademicDisciplineType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting: Option<Vec<DisciplineReporting>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MajorStatus>,
}

impl Identified for AcademicDiscipline {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Identified for AcademicDiscipline2 {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Identified for AcademicDiscipline3 {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

/// `criteria` filter for the v15 list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AcademicDisciplineCriteria {
    #[serde(rename = "type")]
    pub discipline_type: Option<AcademicDisciplineType>,
}

/// Named query `majorStatus`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MajorStatusFilter {
    pub major_status: Option<MajorStatus>,
}
