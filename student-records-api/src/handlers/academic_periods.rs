use axum::{
    extract::{Path, State},
    http::Method,
    response::Response,
};
use student_records_core::{AcademicPeriodFilter, AcademicPeriodRegistrationCriteria};

use crate::{
    pipeline::{not_supported, EndpointError, EndpointSpec, Pipeline},
    request::EndpointRequest,
    versioning::{ApiVersion, VersionedRoutes},
    AppState,
};

const COLLECTION: &str = "/academic-periods";
const ITEM: &str = "/academic-periods/:id";

const fn spec(version: ApiVersion) -> EndpointSpec {
    EndpointSpec::integration(
        "academic-periods",
        version,
        "academic period",
        "academic periods",
    )
}

const V6: EndpointSpec = spec(ApiVersion::major(6));
const V8: EndpointSpec = spec(ApiVersion::major(8)).filters(&["criteria"]);
const V16_1_0: EndpointSpec = spec(ApiVersion::new(16, 1, 0)).filters(&["criteria"]);

pub fn register(routes: VersionedRoutes) -> VersionedRoutes {
    routes
        .default_version(COLLECTION, Method::GET, V16_1_0.version, list_v16_1_0)
        .version(COLLECTION, Method::GET, V8.version, list_v8)
        .version(COLLECTION, Method::GET, V6.version, list_v6)
        .default_version(ITEM, Method::GET, V16_1_0.version, get_v16_1_0)
        .version(ITEM, Method::GET, V8.version, get_v8)
        .version(ITEM, Method::GET, V6.version, get_v6)
        .unsupported(COLLECTION, Method::POST, not_supported)
        .unsupported(ITEM, Method::PUT, not_supported)
        .unsupported(ITEM, Method::DELETE, not_supported)
}

async fn list_v16_1_0(State(state): State<AppState>, request: EndpointRequest) -> Response {
    Pipeline::new(state, &V16_1_0, request)
        .list(|state, query| async move {
            let filter: AcademicPeriodFilter = query.filter("criteria")?;
            state
                .periods
                .get_academic_periods4(filter, query.bypass_cache)
                .await
                .map_err(EndpointError::from)
        })
        .await
}

async fn list_v8(State(state): State<AppState>, request: EndpointRequest) -> Response {
    Pipeline::new(state, &V8, request)
        .list(|state, query| async move {
            let criteria: AcademicPeriodRegistrationCriteria = query.filter("criteria")?;
            state
                .periods
                .get_academic_periods3(criteria.registration, query.bypass_cache)
                .await
                .map_err(EndpointError::from)
        })
        .await
}

async fn list_v6(State(state): State<AppState>, request: EndpointRequest) -> Response {
    Pipeline::new(state, &V6, request)
        .list(|state, query| async move {
            state
                .periods
                .get_academic_periods2(query.bypass_cache)
                .await
                .map_err(EndpointError::from)
        })
        .await
}

async fn get_v16_1_0(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: EndpointRequest,
) -> Response {
    let guid = id.clone();
    Pipeline::new(state, &V16_1_0, request)
        .single(&id, |state, query| async move {
            state
                .periods
                .get_academic_period4_by_guid(&guid, query.bypass_cache)
                .await
                .map_err(EndpointError::from)
        })
        .await
}

async fn get_v8(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: EndpointRequest,
) -> Response {
    let guid = id.clone();
    Pipeline::new(state, &V8, request)
        .single(&id, |state, query| async move {
            state
                .periods
                .get_academic_period3_by_guid(&guid, query.bypass_cache)
                .await
                .map_err(EndpointError::from)
        })
        .await
}

async fn get_v6(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: EndpointRequest,
) -> Response {
    let guid = id.clone();
    Pipeline::new(state, &V6, request)
        .single(&id, |state, query| async move {
            state
                .periods
                .get_academic_period2_by_guid(&guid, query.bypass_cache)
                .await
                .map_err(EndpointError::from)
        })
        .await
}
