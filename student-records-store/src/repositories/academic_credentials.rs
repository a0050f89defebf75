use async_trait::async_trait;
use student_records_core::*;

use crate::InMemoryStore;

/// Every requested program must appear on the credential.
fn has_programs(credential: &StudentAcademicCredential, programs: &[Guid]) -> bool {
    programs.iter().all(|wanted| {
        credential
            .academic_programs
            .iter()
            .flatten()
            .any(|p| wanted.matches(p.id.as_str()))
    })
}

#[async_trait]
impl StudentAcademicCredentialService for InMemoryStore {
    async fn get_student_academic_credentials(
        &self,
        offset: usize,
        limit: usize,
        query: StudentAcademicCredentialQuery,
        _bypass_cache: bool,
    ) -> ServiceResult<Page<StudentAcademicCredential>> {
        let members = query
            .person_filter
            .as_ref()
            .map(|filter| self.person_filter_members(filter));

        Ok(self.academic_credentials.page(
            |c| {
                let student = c.student.id.as_str();
                query
                    .student_id
                    .as_ref()
                    .map_or(true, |id| id.matches(student))
                    && query.academic_level_id.as_ref().map_or(true, |level| {
                        c.academic_level
                            .as_ref()
                            .is_some_and(|l| level.matches(l.id.as_str()))
                    })
                    && query
                        .credential_type
                        .map_or(true, |t| c.credential_type == t)
                    && members
                        .as_ref()
                        .map_or(true, |m| m.iter().any(|p| p.eq_ignore_ascii_case(student)))
                    && has_programs(c, &query.academic_program_ids)
            },
            offset,
            limit,
        ))
    }

    async fn get_student_academic_credential_by_guid(
        &self,
        guid: &str,
        _bypass_cache: bool,
    ) -> ServiceResult<Option<StudentAcademicCredential>> {
        Ok(self.academic_credentials.get(guid))
    }
}
