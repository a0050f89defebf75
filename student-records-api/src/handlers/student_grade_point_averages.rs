use axum::{
    extract::{Path, State},
    http::Method,
    response::Response,
};
use student_records_core::{
    GradeDateFilter, PermissionCode, StudentGradePointAverageCriteria,
    StudentGradePointAverageQuery,
};

use crate::{
    pipeline::{not_supported, EndpointError, EndpointSpec, Pipeline},
    request::EndpointRequest,
    versioning::{ApiVersion, VersionedRoutes},
    AppState,
};

const COLLECTION: &str = "/student-grade-point-averages";
const ITEM: &str = "/student-grade-point-averages/:id";

const V1_0_0: EndpointSpec = EndpointSpec::integration(
    "student-grade-point-averages",
    ApiVersion::new(1, 0, 0),
    "student grade point average",
    "student grade point averages",
)
.permissions(&[PermissionCode::ViewStudentGradePointAverages])
.filters(&["criteria", "gradeDate"])
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
            let criteria: StudentGradePointAverageCriteria = query.filter("criteria")?;
            let grade_date: GradeDateFilter = query.filter("gradeDate")?;

            let args = StudentGradePointAverageQuery {
                student_id: criteria.student.map(|s| s.id),
                grade_date: grade_date.grade_date,
            };

            state
                .grade_point_averages
                .get_student_grade_point_averages(
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
                .grade_point_averages
                .get_student_grade_point_average_by_guid(&guid, query.bypass_cache)
                .await
                .map_err(EndpointError::from)
        })
        .await
}
