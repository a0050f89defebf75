//! Legacy (version 1) add authorization endpoints.
//!
//! Errors use the legacy `{"message": ...}` body and there is no Ethos
//! formatting. Authorization rules are enforced by the service.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::Method,
    response::Response,
};
use student_records_core::{AddAuthorization, AddAuthorizationInput};
use validator::Validate;

use crate::{
    error::ApiError,
    pipeline::{parse_body, EndpointError, EndpointSpec, Pipeline},
    request::EndpointRequest,
    versioning::{ApiVersion, VersionedRoutes},
    AppState,
};

const COLLECTION: &str = "/add-authorizations";
const ITEM: &str = "/add-authorizations/:id";
const BY_SECTION: &str = "/sections/:section_id/add-authorizations";
const BY_STUDENT: &str = "/students/:student_id/add-authorizations";

const V1: EndpointSpec = EndpointSpec::legacy(
    "add-authorizations",
    ApiVersion::major(1),
    "add authorization",
    "add authorizations",
);

pub fn register(routes: VersionedRoutes) -> VersionedRoutes {
    routes
        .legacy(ITEM, Method::GET, V1.version, true, get_v1)
        .legacy(COLLECTION, Method::POST, V1.version, true, create_v1)
        .legacy(COLLECTION, Method::PUT, V1.version, true, update_v1)
        .legacy(BY_SECTION, Method::GET, V1.version, true, list_for_section_v1)
        .legacy(BY_STUDENT, Method::GET, V1.version, true, list_for_student_v1)
}

async fn get_v1(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: EndpointRequest,
) -> Response {
    let key = id.clone();
    Pipeline::new(state, &V1, request)
        .single(&id, |state, _query| async move {
            state
                .add_authorizations
                .get_add_authorization(&key)
                .await
                .map_err(EndpointError::from)
        })
        .await
}

async fn create_v1(
    State(state): State<AppState>,
    request: EndpointRequest,
    body: Bytes,
) -> Response {
    Pipeline::new(state, &V1, request)
        .created(
            |created: &AddAuthorization| format!("{}/{}", COLLECTION, created.id),
            |state, _query| async move {
                let input: AddAuthorizationInput = parse_body(&body, "add authorization")?;
                input.validate().map_err(ApiError::from)?;

                state
                    .add_authorizations
                    .create_add_authorization(input)
                    .await
                    .map_err(EndpointError::from)
            },
        )
        .await
}

async fn update_v1(
    State(state): State<AppState>,
    request: EndpointRequest,
    body: Bytes,
) -> Response {
    Pipeline::new(state, &V1, request)
        .update(|state, _query| async move {
            if body.iter().all(u8::is_ascii_whitespace) {
                return Err(ApiError::BadRequest(
                    "Must provide the add authorization item to update.".to_string(),
                )
                .into());
            }
            let authorization: AddAuthorization = parse_body(&body, "add authorization")?;
            authorization.validate().map_err(ApiError::from)?;

            state
                .add_authorizations
                .update_add_authorization(authorization)
                .await
                .map_err(EndpointError::from)
        })
        .await
}

async fn list_for_section_v1(
    State(state): State<AppState>,
    Path(section_id): Path<String>,
    request: EndpointRequest,
) -> Response {
    Pipeline::new(state, &V1, request)
        .list(|state, _query| async move {
            state
                .add_authorizations
                .get_section_add_authorizations(&section_id)
                .await
                .map_err(EndpointError::from)
        })
        .await
}

async fn list_for_student_v1(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    request: EndpointRequest,
) -> Response {
    Pipeline::new(state, &V1, request)
        .list(|state, _query| async move {
            state
                .add_authorizations
                .get_student_add_authorizations(&student_id)
                .await
                .map_err(EndpointError::from)
        })
        .await
}
