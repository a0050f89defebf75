use axum::{
    extract::{Path, State},
    http::Method,
    response::Response,
};
use student_records_core::{AcademicDisciplineCriteria, MajorStatusFilter};

use crate::{
    pipeline::{not_supported, EndpointError, EndpointSpec, Pipeline},
    request::EndpointRequest,
    versioning::{ApiVersion, VersionedRoutes},
    AppState,
};

const COLLECTION: &str = "/academic-disciplines";
const ITEM: &str = "/academic-disciplines/:id";

const fn spec(version: ApiVersion) -> EndpointSpec {
    EndpointSpec::integration(
        "academic-disciplines",
        version,
        "academic discipline",
        "academic disciplines",
    )
}

const V6: EndpointSpec = spec(ApiVersion::major(6));
const V7: EndpointSpec = spec(ApiVersion::major(7));
const V10: EndpointSpec = spec(ApiVersion::major(10));
const V15: EndpointSpec = spec(ApiVersion::major(15)).filters(&["criteria", "majorStatus"]);

pub fn register(routes: VersionedRoutes) -> VersionedRoutes {
    routes
        .default_version(COLLECTION, Method::GET, V15.version, list_v15)
        .version(COLLECTION, Method::GET, V10.version, list_v10)
        .version(COLLECTION, Method::GET, V7.version, list_v7)
        .version(COLLECTION, Method::GET, V6.version, list_v6)
        .default_version(ITEM, Method::GET, V15.version, get_v15)
        .version(ITEM, Method::GET, V10.version, get_v10)
        .version(ITEM, Method::GET, V7.version, get_v7)
        .version(ITEM, Method::GET, V6.version, get_v6)
        .unsupported(COLLECTION, Method::POST, not_supported)
        .unsupported(ITEM, Method::PUT, not_supported)
        .unsupported(ITEM, Method::DELETE, not_supported)
}

/// Major/minor disciplines filtered by type and major status.
async fn list_v15(State(state): State<AppState>, request: EndpointRequest) -> Response {
    Pipeline::new(state, &V15, request)
        .list(|state, query| async move {
            let criteria: AcademicDisciplineCriteria = query.filter("criteria")?;
            let major_status: MajorStatusFilter = query.filter("majorStatus")?;

            state
                .disciplines
                .get_academic_disciplines3(
                    major_status.major_status.unwrap_or_default(),
                    criteria.discipline_type,
                    query.bypass_cache,
                )
                .await
                .map_err(EndpointError::from)
        })
        .await
}

async fn list_v10(State(state): State<AppState>, request: EndpointRequest) -> Response {
    list_disciplines2(state, &V10, request).await
}

async fn list_v7(State(state): State<AppState>, request: EndpointRequest) -> Response {
    list_disciplines2(state, &V7, request).await
}

async fn list_disciplines2(
    state: AppState,
    spec: &EndpointSpec,
    request: EndpointRequest,
) -> Response {
    Pipeline::new(state, spec, request)
        .list(|state, query| async move {
            state
                .disciplines
                .get_academic_disciplines2(query.bypass_cache)
                .await
                .map_err(EndpointError::from)
        })
        .await
}

async fn list_v6(State(state): State<AppState>, request: EndpointRequest) -> Response {
    Pipeline::new(state, &V6, request)
        .list(|state, query| async move {
            state
                .disciplines
                .get_academic_disciplines(query.bypass_cache)
                .await
                .map_err(EndpointError::from)
        })
        .await
}

async fn get_v15(state: State<AppState>, id: Path<String>, request: EndpointRequest) -> Response {
    get_discipline2(state, &V15, id, request).await
}

async fn get_v10(state: State<AppState>, id: Path<String>, request: EndpointRequest) -> Response {
    get_discipline2(state, &V10, id, request).await
}

async fn get_v7(state: State<AppState>, id: Path<String>, request: EndpointRequest) -> Response {
    get_discipline2(state, &V7, id, request).await
}

/// Versions 7 through 15 share the v7 single-entity shape.
async fn get_discipline2(
    State(state): State<AppState>,
    spec: &EndpointSpec,
    Path(id): Path<String>,
    request: EndpointRequest,
) -> Response {
    let guid = id.clone();
    Pipeline::new(state, spec, request)
        .single(&id, |state, _query| async move {
            state
                .disciplines
                .get_academic_discipline2_by_guid(&guid)
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
        .single(&id, |state, _query| async move {
            state
                .disciplines
                .get_academic_discipline_by_guid(&guid)
                .await
                .map_err(EndpointError::from)
        })
        .await
}
