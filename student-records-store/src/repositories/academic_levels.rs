use async_trait::async_trait;
use student_records_core::*;

use crate::InMemoryStore;

#[async_trait]
impl CurriculumService for InMemoryStore {
    /// Legacy code/description pairs, ordered by code.
    async fn get_academic_levels(&self) -> ServiceResult<Vec<AcademicLevel>> {
        let mut levels: Vec<AcademicLevel> = self
            .levels
            .all()
            .into_iter()
            .map(|l| AcademicLevel {
                code: l.code,
                description: l.description.unwrap_or(l.title),
            })
            .collect();
        levels.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(levels)
    }

    async fn get_academic_levels2(
        &self,
        _bypass_cache: bool,
    ) -> ServiceResult<Vec<AcademicLevel2>> {
        Ok(self.levels.all())
    }

    async fn get_academic_level2_by_guid(
        &self,
        guid: &str,
    ) -> ServiceResult<Option<AcademicLevel2>> {
        Ok(self.levels.get(guid))
    }
}
