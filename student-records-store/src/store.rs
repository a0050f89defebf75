use std::{collections::HashMap, path::Path, sync::atomic::AtomicU64};

use chrono::NaiveDate;
use student_records_core::*;

use crate::{
    error::StoreResult,
    fixture::{Fixture, ResourceMetadata},
    table::Table,
};

/// Stand-alone implementation of every coordination service.
///
/// Each resource is held once in its newest representation; older
/// versions are projected from it on read.
#[derive(Debug)]
pub struct InMemoryStore {
    pub(crate) disciplines: Table<AcademicDiscipline3>,
    pub(crate) periods: Table<AcademicPeriod4>,
    pub(crate) levels: Table<AcademicLevel2>,
    pub(crate) admission_decisions: Table<AdmissionDecision>,
    pub(crate) grade_point_averages: Table<StudentGradePointAverage>,
    pub(crate) academic_credentials: Table<StudentAcademicCredential>,
    pub(crate) meal_plan_requests: Table<MealPlanRequest>,
    pub(crate) add_authorizations: Table<AddAuthorization>,
    pub(crate) person_filters: HashMap<String, Vec<String>>,
    pub(crate) applicants: HashMap<String, String>,
    pub(crate) last_grade_dates: HashMap<String, NaiveDate>,
    pub(crate) ethos: HashMap<String, ResourceMetadata>,
    pub(crate) next_authorization_id: AtomicU64,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::from_fixture(Fixture::default())
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fixture(fixture: Fixture) -> Self {
        let next_authorization_id = fixture
            .add_authorizations
            .iter()
            .filter_map(|a| a.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            disciplines: Table::seeded("academic-disciplines", fixture.academic_disciplines),
            periods: Table::seeded("academic-periods", fixture.academic_periods),
            levels: Table::seeded("academic-levels", fixture.academic_levels),
            admission_decisions: Table::seeded(
                "admission-decisions",
                fixture.admission_decisions,
            ),
            grade_point_averages: Table::seeded(
                "student-grade-point-averages",
                fixture.student_grade_point_averages,
            ),
            academic_credentials: Table::seeded(
                "student-academic-credentials",
                fixture.student_academic_credentials,
            ),
            meal_plan_requests: Table::seeded("meal-plan-requests", fixture.meal_plan_requests),
            add_authorizations: Table::seeded("add-authorizations", fixture.add_authorizations),
            person_filters: lower_keys(fixture.person_filters),
            applicants: lower_keys(fixture.applicants),
            last_grade_dates: lower_keys(fixture.last_grade_dates),
            ethos: fixture.ethos,
            next_authorization_id: AtomicU64::new(next_authorization_id),
        }
    }

    /// Seed from a JSON fixture file.
    pub async fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let fixture = Fixture::load(path).await?;
        let store = Self::from_fixture(fixture);
        tracing::info!(
            academic_disciplines = store.disciplines.len(),
            academic_periods = store.periods.len(),
            academic_levels = store.levels.len(),
            admission_decisions = store.admission_decisions.len(),
            meal_plan_requests = store.meal_plan_requests.len(),
            "Loaded student records fixture"
        );
        Ok(store)
    }

    /// Members of a saved person filter. An unknown filter has no members.
    pub(crate) fn person_filter_members(&self, filter_id: &Guid) -> Vec<String> {
        self.person_filters
            .get(&filter_id.as_str().to_ascii_lowercase())
            .map(|members| members.iter().map(|m| m.to_ascii_lowercase()).collect())
            .unwrap_or_default()
    }
}

fn lower_keys<V>(map: HashMap<String, V>) -> HashMap<String, V> {
    map.into_iter()
        .map(|(k, v)| (k.to_ascii_lowercase(), v))
        .collect()
}
