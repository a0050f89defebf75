use axum::{
    extract::{Path, State},
    http::Method,
    response::Response,
};
use student_records_core::{
    AcademicProgramsFilter, PermissionCode, PersonFilterFilter, StudentAcademicCredentialCriteria,
    StudentAcademicCredentialQuery,
};

use crate::{
    pipeline::{not_supported, EndpointError, EndpointSpec, Pipeline},
    request::EndpointRequest,
    versioning::{ApiVersion, VersionedRoutes},
    AppState,
};

const COLLECTION: &str = "/student-academic-credentials";
const ITEM: &str = "/student-academic-credentials/:id";

const V1_0_0: EndpointSpec = EndpointSpec::integration(
    "student-academic-credentials",
    ApiVersion::new(1, 0, 0),
    "student academic credential",
    "student academic credentials",
)
.permissions(&[PermissionCode::ViewStudentAcademicCredentials])
.filters(&["criteria", "personFilter", "academicPrograms"])
.paged(100);

pub fn register(routes: VersionedRoutes) -> VersionedRoutes {
    routes
        .default_version(COLLECTION, Method::GET, V1_0_0.version, list_v1_0_0)
        .default_version(ITEM, Method::GET, V1_0_0.version, get_v1_0_0)
        .unsupported(COLLECTION, Method::POST, not_supported)
        .unsupported(ITEM, Method::PUT, not_supported)
        .unsupported(ITEM, Method::DELETE, not_supported)
}

async fn list_v1_0_0(State(state): State<AppState>, request: EndpointRequest) -> Response {
    Pipeline::new(state, &V1_0_0, request)
        .paged(|state, query| async move {
            let criteria: StudentAcademicCredentialCriteria = query.filter("criteria")?;
            let person_filter: PersonFilterFilter = query.filter("personFilter")?;
            let programs: AcademicProgramsFilter = query.filter("academicPrograms")?;

            let args = StudentAcademicCredentialQuery {
                student_id: criteria.student.map(|s| s.id),
                academic_level_id: criteria.academic_level.map(|l| l.id),
                credential_type: criteria.credential_type,
                person_filter: person_filter.person_filter_id(),
                academic_program_ids: programs
                    .academic_programs
                    .unwrap_or_default()
                    .into_iter()
                    .map(|p| p.id)
                    .collect(),
            };

            state
                .academic_credentials
                .get_student_academic_credentials(
                    query.offset(),
                    query.limit(),
                    args,
                    query.bypass_cache,
                )
                .await
                .map_err(EndpointError::from)
        })
        .await
}

async fn get_v1_0_0(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: EndpointRequest,
) -> Response {
    let guid = id.clone();
    Pipeline::new(state, &V1_0_0, request)
        .single(&id, |state, query| async move {
            state
                .academic_credentials
                .get_student_academic_credential_by_guid(&guid, query.bypass_cache)
                .await
                .map_err(EndpointError::from)
        })
        .await
}
