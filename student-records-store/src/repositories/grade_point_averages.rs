use async_trait::async_trait;
use student_records_core::*;

use crate::InMemoryStore;

#[async_trait]
impl StudentGradePointAverageService for InMemoryStore {
    async fn get_student_grade_point_averages(
        &self,
        offset: usize,
        limit: usize,
        query: StudentGradePointAverageQuery,
        _bypass_cache: bool,
    ) -> ServiceResult<Page<StudentGradePointAverage>> {
        Ok(self.grade_point_averages.page(
            |gpa| {
                query
                    .student_id
                    .as_ref()
                    .map_or(true, |student| student.matches(gpa.student.id.as_str()))
                    && query.grade_date.map_or(true, |since| {
                        self.last_grade_dates
                            .get(&gpa.id.as_str().to_ascii_lowercase())
                            .is_some_and(|posted| *posted >= since)
                    })
            },
            offset,
            limit,
        ))
    }

    async fn get_student_grade_point_average_by_guid(
        &self,
        guid: &str,
        _bypass_cache: bool,
    ) -> ServiceResult<Option<StudentGradePointAverage>> {
        Ok(self.grade_point_averages.get(guid))
    }
}
