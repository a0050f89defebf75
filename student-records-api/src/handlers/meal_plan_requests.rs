use axum::{
    body::Bytes,
    extract::{Path, State},
    http::Method,
    response::Response,
};
use serde_json::Value;
use student_records_core::{Guid, MealPlanRequest, PermissionCode};

use crate::{
    error::ApiError,
    merge::merge_for_update,
    pipeline::{not_supported, parse_body, EndpointError, EndpointResult, EndpointSpec, Pipeline},
    request::EndpointRequest,
    versioning::{ApiVersion, VersionedRoutes},
    AppState,
};

const COLLECTION: &str = "/meal-plan-requests";
const ITEM: &str = "/meal-plan-requests/:id";
const LABEL: &str = "meal plan request";

const fn spec(version: ApiVersion) -> EndpointSpec {
    EndpointSpec::integration("meal-plan-requests", version, LABEL, "meal plan requests")
}

const V10: EndpointSpec = spec(ApiVersion::major(10))
    .permissions(&[
        PermissionCode::ViewMealPlanRequest,
        PermissionCode::CreateMealPlanRequest,
    ])
    .paged(100);

const MUTATE_V10: EndpointSpec =
    spec(ApiVersion::major(10)).permissions(&[PermissionCode::CreateMealPlanRequest]);

pub fn register(routes: VersionedRoutes) -> VersionedRoutes {
    routes
        .default_version(COLLECTION, Method::GET, V10.version, list_v10)
        .default_version(ITEM, Method::GET, V10.version, get_v10)
        .version(COLLECTION, Method::POST, MUTATE_V10.version, create_v10)
        .version(ITEM, Method::PUT, MUTATE_V10.version, update_v10)
        .unsupported(ITEM, Method::DELETE, not_supported)
}

async fn list_v10(State(state): State<AppState>, request: EndpointRequest) -> Response {
    Pipeline::new(state, &V10, request)
        .paged(|state, query| async move {
            state
                .meal_plan_requests
                .get_meal_plan_requests(query.offset(), query.limit(), query.bypass_cache)
                .await
                .map_err(EndpointError::from)
        })
        .await
}

async fn get_v10(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: EndpointRequest,
) -> Response {
    let guid = id.clone();
    Pipeline::new(state, &V10, request)
        .single(&id, |state, query| async move {
            state
                .meal_plan_requests
                .get_meal_plan_request_by_guid(&guid, query.bypass_cache)
                .await
                .map_err(EndpointError::from)
        })
        .await
}

async fn create_v10(
    State(state): State<AppState>,
    request: EndpointRequest,
    body: Bytes,
) -> Response {
    Pipeline::new(state, &MUTATE_V10, request)
        .create(|state, _query| async move {
            let raw: Value = parse_body(&body, LABEL)?;
            check_create_id(&raw)?;
            let meal_plan_request: MealPlanRequest = serde_json::from_value(raw)
                .map_err(|e| ApiError::BadRequest(format!("Invalid {}: {}", LABEL, e)))?;

            state
                .meal_plan_requests
                .create_meal_plan_request(meal_plan_request)
                .await
                .map_err(EndpointError::from)
        })
        .await
}

/// Partial update: the body is merged over the stored request.
async fn update_v10(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: EndpointRequest,
    body: Bytes,
) -> Response {
    Pipeline::new(state, &MUTATE_V10, request)
        .update(|state, _query| async move {
            let patch: Value = parse_body(&body, LABEL)?;
            check_update_target(&id, &patch)?;

            let existing = state
                .meal_plan_requests
                .get_meal_plan_request_by_guid(&id, true)
                .await?
                .ok_or_else(|| {
                    ApiError::NotFound(format!("No {} was found for GUID '{}'.", LABEL, id))
                })?;

            let privacy_paths = state
                .metadata
                .data_privacy_list(&MUTATE_V10.route(), true)
                .await?;
            let merged: MealPlanRequest = merge_for_update(&existing, patch, &privacy_paths)
                .map_err(|e| ApiError::BadRequest(format!("Invalid {}: {}", LABEL, e)))?;

            state
                .meal_plan_requests
                .update_meal_plan_request(&id, merged)
                .await
                .map_err(EndpointError::from)
        })
        .await
}

/// A new request must carry an id. Nil asks the ERP to assign one.
fn check_create_id(body: &Value) -> EndpointResult<()> {
    match body.get("id").and_then(Value::as_str) {
        Some(id) if !id.trim().is_empty() => Ok(()),
        _ => {
            let message = "The id must be specified in the request body.".to_string();
            Err(ApiError::BadRequest(message).into())
        }
    }
}

/// The route GUID must be a real id that agrees with the body.
fn check_update_target(guid: &str, patch: &Value) -> EndpointResult<()> {
    let body_id = patch.get("id").and_then(Value::as_str);

    let message = if guid.trim().is_empty() {
        "The GUID must be specified in the request URL."
    } else if !body_id.is_some_and(|b| b.eq_ignore_ascii_case(guid)) {
        "Id not the same as in request body."
    } else if Guid::from(guid).is_nil() {
        "Nil GUID cannot be used in PUT operation."
    } else {
        return Ok(());
    };
    Err(ApiError::BadRequest(message.to_string()).into())
}
