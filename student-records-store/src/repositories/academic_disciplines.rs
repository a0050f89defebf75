use async_trait::async_trait;
use student_records_core::*;

use crate::InMemoryStore;

fn to_v6(d: AcademicDiscipline3) -> AcademicDiscipline {
    AcademicDiscipline {
        id: d.id,
        code: d.code,
        title: d.title,
        description: d.description,
        discipline_type: d.discipline_type,
    }
}

fn to_v7(d: AcademicDiscipline3) -> AcademicDiscipline2 {
    AcademicDiscipline2 {
        id: d.id,
        code: d.code,
        title: d.title,
        description: d.description,
        discipline_type: d.discipline_type,
        reporting: d.reporting,
    }
}

/// `NotSet` leaves the status unconstrained.
fn status_matches(d: &AcademicDiscipline3, status: MajorStatus) -> bool {
    status == MajorStatus::NotSet || d.status == Some(status)
}

#[async_trait]
impl AcademicDisciplineService for InMemoryStore {
    async fn get_academic_disciplines(
        &self,
        _bypass_cache: bool,
    ) -> ServiceResult<Vec<AcademicDiscipline>> {
        Ok(self.disciplines.all().into_iter().map(to_v6).collect())
    }

    async fn get_academic_disciplines2(
        &self,
        _bypass_cache: bool,
    ) -> ServiceResult<Vec<AcademicDiscipline2>> {
        Ok(self.disciplines.all().into_iter().map(to_v7).collect())
    }

    async fn get_academic_disciplines3(
        &self,
        major_status: MajorStatus,
        discipline_type: Option<AcademicDisciplineType>,
        _bypass_cache: bool,
    ) -> ServiceResult<Vec<AcademicDiscipline3>> {
        Ok(self.disciplines.select(|d| {
            status_matches(d, major_status)
                && discipline_type.map_or(true, |t| d.discipline_type == t)
        }))
    }

    async fn get_academic_discipline_by_guid(
        &self,
        guid: &str,
    ) -> ServiceResult<Option<AcademicDiscipline>> {
        Ok(self.disciplines.get(guid).map(to_v6))
    }

    async fn get_academic_discipline2_by_guid(
        &self,
        guid: &str,
    ) -> ServiceResult<Option<AcademicDiscipline2>> {
        Ok(self.disciplines.get(guid).map(to_v7))
    }
}
