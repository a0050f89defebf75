use std::sync::atomic::Ordering;

use async_trait::async_trait;
use chrono::Utc;
use student_records_core::*;
use uuid::Uuid;

use crate::{error::StoreError, InMemoryStore};

/// Authorization codes are eight upper-case characters.
fn authorization_code() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_ascii_uppercase()
}

#[async_trait]
impl AddAuthorizationService for InMemoryStore {
    async fn get_add_authorization(&self, id: &str) -> ServiceResult<Option<AddAuthorization>> {
        Ok(self.add_authorizations.get(id))
    }

    async fn get_section_add_authorizations(
        &self,
        section_id: &str,
    ) -> ServiceResult<Vec<AddAuthorization>> {
        Ok(self
            .add_authorizations
            .select(|a| a.section_id.eq_ignore_ascii_case(section_id)))
    }

    async fn get_student_add_authorizations(
        &self,
        student_id: &str,
    ) -> ServiceResult<Vec<AddAuthorization>> {
        Ok(self.add_authorizations.select(|a| {
            a.student_id
                .as_deref()
                .is_some_and(|s| s.eq_ignore_ascii_case(student_id))
        }))
    }

    async fn create_add_authorization(
        &self,
        input: AddAuthorizationInput,
    ) -> ServiceResult<AddAuthorization> {
        let existing = self.add_authorizations.select(|a| {
            !a.is_revoked
                && a.section_id.eq_ignore_ascii_case(&input.section_id)
                && a.student_id
                    .as_deref()
                    .is_some_and(|s| s.eq_ignore_ascii_case(&input.student_id))
        });
        if !existing.is_empty() {
            return Err(StoreError::Duplicate(format!(
                "Student {} already has an add authorization for section {}.",
                input.student_id, input.section_id
            ))
            .into());
        }

        let id = self.next_authorization_id.fetch_add(1, Ordering::SeqCst);
        let created = AddAuthorization {
            id: id.to_string(),
            section_id: input.section_id,
            student_id: Some(input.student_id),
            add_authorization_code: Some(authorization_code()),
            is_revoked: false,
            assigned_by: input.assigned_by,
            assigned_time: input.assigned_time.or_else(|| Some(Utc::now())),
            revoked_by: None,
            revoked_time: None,
        };
        self.add_authorizations.insert(created.clone());
        tracing::info!(
            id = %created.id,
            section = %created.section_id,
            "Created add authorization"
        );
        Ok(created)
    }

    async fn update_add_authorization(
        &self,
        authorization: AddAuthorization,
    ) -> ServiceResult<AddAuthorization> {
        let id = authorization.id.clone();
        Ok(self.add_authorizations.replace(&id, authorization)?)
    }
}
