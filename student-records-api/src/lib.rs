//! HTTP layer of the student-records integration API.
//!
//! Every resource is exposed through versioned handlers that run the shared
//! [`pipeline`]: permission gate, request normalization, a single call into
//! the coordination services held by [`AppState`], Ethos metadata lookup and
//! error mapping.

pub mod error;
pub mod handlers;
pub mod merge;
pub mod middleware;
pub mod observability;
pub mod pipeline;
pub mod request;
pub mod response;
pub mod versioning;

use axum::Router;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use student_records_core::{
    AcademicDisciplineService, AcademicPeriodService, AddAuthorizationService,
    AdmissionDecisionService, CurriculumService, EthosMetadataService, MealPlanRequestService,
    StudentAcademicCredentialService, StudentGradePointAverageService,
};

pub use error::{ApiError, ApiResult};
pub use versioning::VersionedRoutes;

/// Settings the HTTP layer needs from the server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    pub jwt_secret: String,
    pub include_link_headers: bool,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            jwt_secret: "change-me".to_string(),
            include_link_headers: false,
        }
    }
}

/// Coordination services behind the API.
#[derive(Clone)]
pub struct AppState {
    pub metadata: Arc<dyn EthosMetadataService + Send + Sync>,
    pub disciplines: Arc<dyn AcademicDisciplineService + Send + Sync>,
    pub periods: Arc<dyn AcademicPeriodService + Send + Sync>,
    pub curriculum: Arc<dyn CurriculumService + Send + Sync>,
    pub admission_decisions: Arc<dyn AdmissionDecisionService + Send + Sync>,
    pub grade_point_averages: Arc<dyn StudentGradePointAverageService + Send + Sync>,
    pub academic_credentials: Arc<dyn StudentAcademicCredentialService + Send + Sync>,
    pub meal_plan_requests: Arc<dyn MealPlanRequestService + Send + Sync>,
    pub add_authorizations: Arc<dyn AddAuthorizationService + Send + Sync>,
    pub settings: ApiSettings,
}

impl AppState {
    /// Build a state where one backend implements every service.
    pub fn from_backend<B>(backend: Arc<B>, settings: ApiSettings) -> Self
    where
        B: EthosMetadataService
            + AcademicDisciplineService
            + AcademicPeriodService
            + CurriculumService
            + AdmissionDecisionService
            + StudentGradePointAverageService
            + StudentAcademicCredentialService
            + MealPlanRequestService
            + AddAuthorizationService
            + Send
            + Sync
            + 'static,
    {
        Self {
            metadata: backend.clone(),
            disciplines: backend.clone(),
            periods: backend.clone(),
            curriculum: backend.clone(),
            admission_decisions: backend.clone(),
            grade_point_averages: backend.clone(),
            academic_credentials: backend.clone(),
            meal_plan_requests: backend.clone(),
            add_authorizations: backend,
            settings,
        }
    }
}

/// Every versioned resource route, authenticated and Ethos-formatted.
pub fn routes(state: AppState) -> Router {
    handlers::register(VersionedRoutes::new())
        .into_router()
        .layer(axum::middleware::from_fn(
            middleware::ethos_response_middleware,
        ))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth_middleware,
        ))
        .with_state(state)
}
