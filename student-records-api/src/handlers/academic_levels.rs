use axum::{
    extract::{Path, State},
    http::Method,
    response::Response,
};

use crate::{
    pipeline::{not_supported, EndpointError, EndpointSpec, Pipeline},
    request::EndpointRequest,
    versioning::{ApiVersion, VersionedRoutes},
    AppState,
};

const COLLECTION: &str = "/academic-levels";
const ITEM: &str = "/academic-levels/:id";

/// Code/description pairs from the original self-service API.
const V1: EndpointSpec = EndpointSpec::legacy(
    "academic-levels",
    ApiVersion::major(1),
    "academic level",
    "academic levels",
);

const V6_1_0: EndpointSpec = EndpointSpec::integration(
    "academic-levels",
    ApiVersion::new(6, 1, 0),
    "academic level",
    "academic levels",
);

pub fn register(routes: VersionedRoutes) -> VersionedRoutes {
    routes
        .default_version(COLLECTION, Method::GET, V6_1_0.version, list_v6_1_0)
        .legacy(COLLECTION, Method::GET, V1.version, false, list_v1)
        .default_version(ITEM, Method::GET, V6_1_0.version, get_v6_1_0)
        .unsupported(COLLECTION, Method::POST, not_supported)
        .unsupported(ITEM, Method::PUT, not_supported)
        .unsupported(ITEM, Method::DELETE, not_supported)
}

async fn list_v1(State(state): State<AppState>, request: EndpointRequest) -> Response {
    Pipeline::new(state, &V1, request)
        .list(|state, _query| async move {
            state
                .curriculum
                .get_academic_levels()
                .await
                .map_err(EndpointError::from)
        })
        .await
}

async fn list_v6_1_0(State(state): State<AppState>, request: EndpointRequest) -> Response {
    Pipeline::new(state, &V6_1_0, request)
        .list(|state, query| async move {
            state
                .curriculum
                .get_academic_levels2(query.bypass_cache)
                .await
                .map_err(EndpointError::from)
        })
        .await
}

async fn get_v6_1_0(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: EndpointRequest,
) -> Response {
    let guid = id.clone();
    Pipeline::new(state, &V6_1_0, request)
        .single(&id, |state, _query| async move {
            state
                .curriculum
                .get_academic_level2_by_guid(&guid)
                .await
                .map_err(EndpointError::from)
        })
        .await
}
