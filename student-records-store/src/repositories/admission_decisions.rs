use async_trait::async_trait;
use student_records_core::*;

use crate::InMemoryStore;

impl InMemoryStore {
    fn decision_matches(
        &self,
        decision: &AdmissionDecision,
        query: &AdmissionDecisionQuery,
        members: Option<&[String]>,
    ) -> bool {
        let application = decision.application.id.as_str();

        query
            .application_id
            .as_ref()
            .map_or(true, |id| id.matches(application))
            && query.decided_on.map_or(true, |on| decision.decided_on == on)
            && members.map_or(true, |members| {
                self.applicants
                    .get(&application.to_ascii_lowercase())
                    .is_some_and(|person| members.iter().any(|m| m.eq_ignore_ascii_case(person)))
            })
    }
}

#[async_trait]
impl AdmissionDecisionService for InMemoryStore {
    async fn get_admission_decisions(
        &self,
        offset: usize,
        limit: usize,
        query: AdmissionDecisionQuery,
        _bypass_cache: bool,
    ) -> ServiceResult<Page<AdmissionDecision>> {
        let members = query
            .person_filter
            .as_ref()
            .map(|filter| self.person_filter_members(filter));

        Ok(self.admission_decisions.page(
            |d| self.decision_matches(d, &query, members.as_deref()),
            offset,
            limit,
        ))
    }

    async fn get_admission_decision_by_guid(
        &self,
        guid: &str,
        _bypass_cache: bool,
    ) -> ServiceResult<Option<AdmissionDecision>> {
        Ok(self.admission_decisions.get(guid))
    }

    async fn create_admission_decision(
        &self,
        decision: AdmissionDecision,
    ) -> ServiceResult<AdmissionDecision> {
        if decision.application.id.as_str().trim().is_empty() {
            return Err(ServiceError::MissingArgument(
                "Application id is required.".to_string(),
            ));
        }

        let created = AdmissionDecision {
            id: Guid::new(),
            ..decision
        };
        self.admission_decisions.insert(created.clone());
        tracing::info!(id = %created.id, "Created admission decision");
        Ok(created)
    }
}
