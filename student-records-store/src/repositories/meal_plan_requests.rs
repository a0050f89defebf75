use async_trait::async_trait;
use chrono::Utc;
use student_records_core::*;

use crate::{InMemoryStore, StoreError};

#[async_trait]
impl MealPlanRequestService for InMemoryStore {
    async fn get_meal_plan_requests(
        &self,
        offset: usize,
        limit: usize,
        _bypass_cache: bool,
    ) -> ServiceResult<Page<MealPlanRequest>> {
        Ok(self.meal_plan_requests.page(|_| true, offset, limit))
    }

    async fn get_meal_plan_request_by_guid(
        &self,
        guid: &str,
        _bypass_cache: bool,
    ) -> ServiceResult<Option<MealPlanRequest>> {
        Ok(self.meal_plan_requests.get(guid))
    }

    async fn create_meal_plan_request(
        &self,
        request: MealPlanRequest,
    ) -> ServiceResult<MealPlanRequest> {
        let id = if request.id.is_nil() {
            Guid::new()
        } else {
            request.id.clone()
        };
        if self.meal_plan_requests.get(id.as_str()).is_some() {
            let message = format!("Meal plan request '{}' already exists.", id);
            return Err(StoreError::Duplicate(message).into());
        }

        let created = MealPlanRequest {
            id,
            submitted_on: request.submitted_on.or_else(|| Some(Utc::now())),
            ..request
        };
        self.meal_plan_requests.insert(created.clone());
        tracing::info!(id = %created.id, "Created meal plan request");
        Ok(created)
    }

    async fn update_meal_plan_request(
        &self,
        guid: &str,
        request: MealPlanRequest,
    ) -> ServiceResult<MealPlanRequest> {
        let updated = MealPlanRequest {
            id: Guid::from(guid),
            ..request
        };
        let updated = self.meal_plan_requests.replace(guid, updated)?;
        tracing::info!(id = %updated.id, "Updated meal plan request");
        Ok(updated)
    }
}
