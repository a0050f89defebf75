//! JSON seed data for the in-memory store.
//!
//! Every section is optional:
//!
//! ```json
//! {
//!   "academicLevels": [{"id": "...", "code": "UG", "title": "Undergraduate"}],
//!   "personFilters": {"<filter guid>": ["<person guid>", "..."]},
//!   "applicants": {"<application guid>": "<person guid>"},
//!   "ethos": {
//!     "meal-plan-requests": {"privacyPaths": ["person"], "extended": []}
//!   }
//! }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::Path};
use student_records_core::*;

use crate::error::{StoreError, StoreResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Fixture {
    pub academic_disciplines: Vec<AcademicDiscipline3>,
    pub academic_periods: Vec<AcademicPeriod4>,
    pub academic_levels: Vec<AcademicLevel2>,
    pub admission_decisions: Vec<AdmissionDecision>,
    pub student_grade_point_averages: Vec<StudentGradePointAverage>,
    pub student_academic_credentials: Vec<StudentAcademicCredential>,
    pub meal_plan_requests: Vec<MealPlanRequest>,
    pub add_authorizations: Vec<AddAuthorization>,
    /// Saved person filters: filter GUID to member person GUIDs.
    pub person_filters: HashMap<String, Vec<String>>,
    /// Applicant person GUID per admission application GUID.
    pub applicants: HashMap<String, String>,
    /// Date of the most recent grade behind each grade point average record.
    pub last_grade_dates: HashMap<String, NaiveDate>,
    /// Ethos metadata per resource name.
    pub ethos: HashMap<String, ResourceMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceMetadata {
    pub privacy_paths: Vec<String>,
    pub extended: Vec<ExtendedData>,
}

impl Fixture {
    pub async fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let raw = tokio::fs::read(path).await.map_err(|source| StoreError::Io {
            path: display.clone(),
            source,
        })?;

        serde_json::from_slice(&raw).map_err(|source| StoreError::Fixture {
            path: display,
            source,
        })
    }
}
