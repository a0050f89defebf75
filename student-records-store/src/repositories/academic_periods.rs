use async_trait::async_trait;
use student_records_core::*;

use crate::InMemoryStore;

fn to_v6(p: AcademicPeriod4) -> AcademicPeriod2 {
    AcademicPeriod2 {
        id: p.id,
        code: p.code,
        title: p.title,
        description: p.description,
        start_on: p.start_on,
        end_on: p.end_on,
        category: p.category,
    }
}

fn to_v8(p: AcademicPeriod4) -> AcademicPeriod3 {
    AcademicPeriod3 {
        id: p.id,
        code: p.code,
        title: p.title,
        description: p.description,
        start_on: p.start_on,
        end_on: p.end_on,
        category: p.category,
        census_dates: p.census_dates,
        registration: p.registration,
    }
}

/// Absent filter fields do not constrain. `startOn`/`endOn` bound the period's dates.
fn period_matches(p: &AcademicPeriod4, filter: &AcademicPeriodFilter) -> bool {
    filter
        .code
        .as_deref()
        .map_or(true, |code| p.code.eq_ignore_ascii_case(code))
        && filter
            .registration
            .map_or(true, |r| p.registration == Some(r))
        && filter
            .category_type()
            .map_or(true, |t| p.category.category_type == t)
        && filter.start_on.map_or(true, |start| p.start_on >= start)
        && filter.end_on.map_or(true, |end| p.end_on <= end)
}

#[async_trait]
impl AcademicPeriodService for InMemoryStore {
    async fn get_academic_periods2(
        &self,
        _bypass_cache: bool,
    ) -> ServiceResult<Vec<AcademicPeriod2>> {
        Ok(self.periods.all().into_iter().map(to_v6).collect())
    }

    async fn get_academic_periods3(
        &self,
        registration: Option<RegistrationStatus>,
        _bypass_cache: bool,
    ) -> ServiceResult<Vec<AcademicPeriod3>> {
        let filter = AcademicPeriodFilter {
            registration,
            ..Default::default()
        };
        Ok(self
            .periods
            .select(|p| period_matches(p, &filter))
            .into_iter()
            .map(to_v8)
            .collect())
    }

    async fn get_academic_periods4(
        &self,
        filter: AcademicPeriodFilter,
        bypass_cache: bool,
    ) -> ServiceResult<Vec<AcademicPeriod4>> {
        tracing::debug!(?filter, bypass_cache, "Listing academic periods");
        Ok(self.periods.select(|p| period_matches(p, &filter)))
    }

    async fn get_academic_period2_by_guid(
        &self,
        guid: &str,
        _bypass_cache: bool,
    ) -> ServiceResult<Option<AcademicPeriod2>> {
        Ok(self.periods.get(guid).map(to_v6))
    }

    async fn get_academic_period3_by_guid(
        &self,
        guid: &str,
        _bypass_cache: bool,
    ) -> ServiceResult<Option<AcademicPeriod3>> {
        Ok(self.periods.get(guid).map(to_v8))
    }

    async fn get_academic_period4_by_guid(
        &self,
        guid: &str,
        _bypass_cache: bool,
    ) -> ServiceResult<Option<AcademicPeriod4>> {
        Ok(self.periods.get(guid))
    }
}
