use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    common::{GuidObject, Identified},
    ids::Guid,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialType {
    Degree,
    Certificate,
    Diploma,
    Honorary,
    Other,
}

/// Student academic credential, v1.0.0 representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAcademicCredential {
    pub id: Guid,
    pub student: GuidObject,
    pub credential: GuidObject,
    pub credential_type: CredentialType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub academic_level: Option<GuidObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub academic_programs: Option<Vec<GuidObject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentialed_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduated_on: Option<NaiveDate>,
}

impl Identified for StudentAcademicCredential {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

/// `criteria` filter for the academic credentials list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StudentAcademicCredentialCriteria {
    pub student: Option<GuidObject>,
    pub academic_level: Option<GuidObject>,
    pub credential_type: Option<CredentialType>,
}

/// Named query `academicPrograms`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AcademicProgramsFilter {
    pub academic_programs: Option<Vec<GuidObject>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentAcademicCredentialQuery {
    pub student_id: Option<Guid>,
    pub academic_level_id: Option<Guid>,
    pub credential_type: Option<CredentialType>,
    pub person_filter: Option<Guid>,
    pub academic_program_ids: Vec<Guid>,
}
