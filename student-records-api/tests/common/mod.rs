#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::Value;
use std::sync::Arc;
use student_records_api::{middleware::Claims, ApiSettings, AppState};
use student_records_core::*;
use tower::ServiceExt;

pub const SECRET: &str = "integration-test-secret";
pub const GUID: &str = "7a2bf6b5-cdcd-4c8f-b5d8-3053bf5b3fbc";

/// One mock per service. A mock without expectations panics when called,
/// which is how tests prove a service was never reached.
#[derive(Default)]
pub struct Mocks {
    pub metadata: MockEthosMetadataService,
    pub disciplines: MockAcademicDisciplineService,
    pub periods: MockAcademicPeriodService,
    pub curriculum: MockCurriculumService,
    pub admission_decisions: MockAdmissionDecisionService,
    pub grade_point_averages: MockStudentGradePointAverageService,
    pub academic_credentials: MockStudentAcademicCredentialService,
    pub meal_plan_requests: MockMealPlanRequestService,
    pub add_authorizations: MockAddAuthorizationService,
    pub settings: ApiSettings,
}

impl Mocks {
    pub fn new() -> Self {
        Self {
            settings: ApiSettings {
                jwt_secret: SECRET.to_string(),
                include_link_headers: false,
            },
            ..Default::default()
        }
    }

    /// Ethos lookups that find nothing, for tests that reach step 4.
    pub fn with_empty_ethos(mut self) -> Self {
        self.metadata
            .expect_data_privacy_list()
            .returning(|_, _| Ok(Vec::new()));
        self.metadata
            .expect_extended_data()
            .returning(|_, _| Ok(Vec::new()));
        self
    }

    pub fn into_app(self) -> Router {
        let state = AppState {
            metadata: Arc::new(self.metadata),
            disciplines: Arc::new(self.disciplines),
            periods: Arc::new(self.periods),
            curriculum: Arc::new(self.curriculum),
            admission_decisions: Arc::new(self.admission_decisions),
            grade_point_averages: Arc::new(self.grade_point_averages),
            academic_credentials: Arc::new(self.academic_credentials),
            meal_plan_requests: Arc::new(self.meal_plan_requests),
            add_authorizations: Arc::new(self.add_authorizations),
            settings: self.settings,
        };
        student_records_api::routes(state)
    }
}

pub fn token(permissions: &[PermissionCode]) -> String {
    let now = chrono::Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: "jdoe".to_string(),
        exp: now + 3600,
        iat: now,
        person_id: "0001234".to_string(),
        permissions: permissions.iter().map(|p| p.code().to_string()).collect(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

pub fn integration_type(version: &str) -> String {
    format!("application/vnd.hedtech.integration.v{}+json", version)
}

pub fn get(uri: &str, permissions: &[PermissionCode]) -> axum::http::request::Builder {
    Request::builder()
        .uri(uri)
        .method("GET")
        .header(header::AUTHORIZATION, format!("Bearer {}", token(permissions)))
}

pub fn get_versioned(uri: &str, version: &str, permissions: &[PermissionCode]) -> Request<Body> {
    get(uri, permissions)
        .header(header::ACCEPT, integration_type(version))
        .body(Body::empty())
        .unwrap()
}

pub fn send_json(
    method: &str,
    uri: &str,
    content_type: &str,
    body: &Value,
    permissions: &[PermissionCode],
) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .header(header::AUTHORIZATION, format!("Bearer {}", token(permissions)))
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn call(app: Router, request: Request<Body>) -> (StatusCode, Response<Body>) {
    let response = app.oneshot(request).await.unwrap();
    (response.status(), response)
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn header_str<'a>(response: &'a Response<Body>, name: &str) -> Option<&'a str> {
    response.headers().get(name).and_then(|v| v.to_str().ok())
}

pub fn discipline3(id: &str, status: MajorStatus) -> AcademicDiscipline3 {
    AcademicDiscipline3 {
        id: Guid::from(id),
        code: "HIST".to_string(),
        title: "History".to_string(),
        description: None,
        discipline_type: AcademicDisciplineType::Major,
        reporting: None,
        status: Some(status),
    }
}

pub fn discipline(id: &str) -> AcademicDiscipline {
    AcademicDiscipline {
        id: Guid::from(id),
        code: "MATH".to_string(),
        title: "Mathematics".to_string(),
        description: None,
        discipline_type: AcademicDisciplineType::Major,
    }
}

pub fn discipline2(id: &str) -> AcademicDiscipline2 {
    AcademicDiscipline2 {
        id: Guid::from(id),
        code: "MATH".to_string(),
        title: "Mathematics".to_string(),
        description: None,
        discipline_type: AcademicDisciplineType::Major,
        reporting: None,
    }
}

pub fn meal_plan_request(id: &str) -> MealPlanRequest {
    MealPlanRequest {
        id: Guid::from(id),
        person: GuidObject::new("person-1"),
        meal_plan: GuidObject::new("plan-1"),
        academic_period: None,
        start_on: None,
        end_on: None,
        status: MealPlanRequestStatus::Submitted,
        submitted_on: None,
    }
}

/// `path?k=v&...` with every value form-encoded.
pub fn with_query(path: &str, pairs: &[(&str, &str)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    format!("{}?{}", path, serializer.finish())
}
