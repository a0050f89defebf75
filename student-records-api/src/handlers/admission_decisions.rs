use axum::{
    body::Bytes,
    extract::{Path, State},
    http::Method,
    response::Response,
};
use student_records_core::{
    AdmissionDecision, AdmissionDecisionCriteria, AdmissionDecisionQuery, PermissionCode,
    PersonFilterFilter,
};

use crate::{
    error::ApiError,
    pipeline::{not_supported, parse_body, EndpointError, EndpointResult, EndpointSpec, Pipeline},
    request::EndpointRequest,
    versioning::{ApiVersion, VersionedRoutes},
    AppState,
};

const COLLECTION: &str = "/admission-decisions";
const ITEM: &str = "/admission-decisions/:id";

const fn spec(version: ApiVersion) -> EndpointSpec {
    EndpointSpec::integration(
        "admission-decisions",
        version,
        "admission decision",
        "admission decisions",
    )
}

const V11_1_0: EndpointSpec = spec(ApiVersion::new(11, 1, 0))
    .permissions(&[
        PermissionCode::ViewAdmissionDecisions,
        PermissionCode::UpdateAdmissionDecisions,
    ])
    .filters(&["criteria", "personFilter"])
    .paged(100);

const CREATE_V11_1_0: EndpointSpec =
    spec(ApiVersion::new(11, 1, 0)).permissions(&[PermissionCode::UpdateAdmissionDecisions]);

pub fn register(routes: VersionedRoutes) -> VersionedRoutes {
    routes
        .default_version(COLLECTION, Method::GET, V11_1_0.version, list_v11_1_0)
        .default_version(ITEM, Method::GET, V11_1_0.version, get_v11_1_0)
        .default_version(COLLECTION, Method::POST, CREATE_V11_1_0.version, create_v11_1_0)
        .unsupported(ITEM, Method::PUT, not_supported)
        .unsupported(ITEM, Method::DELETE, not_supported)
}

async fn list_v11_1_0(State(state): State<AppState>, request: EndpointRequest) -> Response {
    Pipeline::new(state, &V11_1_0, request)
        .paged(|state, query| async move {
            let criteria: AdmissionDecisionCriteria = query.filter("criteria")?;
            let person_filter: PersonFilterFilter = query.filter("personFilter")?;

            let args = AdmissionDecisionQuery {
                application_id: criteria.application.map(|a| a.id),
                decided_on: criteria.decided_on,
                person_filter: person_filter.person_filter_id(),
            };

            state
                .admission_decisions
                .get_admission_decisions(query.offset(), query.limit(), args, query.bypass_cache)
                .await
                .map_err(EndpointError::from)
        })
        .await
}

async fn get_v11_1_0(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: EndpointRequest,
) -> Response {
    let guid = id.clone();
    Pipeline::new(state, &V11_1_0, request)
        .single(&id, |state, query| async move {
            state
                .admission_decisions
                .get_admission_decision_by_guid(&guid, query.bypass_cache)
                .await
                .map_err(EndpointError::from)
        })
        .await
}

async fn create_v11_1_0(
    State(state): State<AppState>,
    request: EndpointRequest,
    body: Bytes,
) -> Response {
    Pipeline::new(state, &CREATE_V11_1_0, request)
        .create(|state, _query| async move {
            let decision: AdmissionDecision = parse_body(&body, "admission decision")?;
            validate_new_decision(&decision)?;

            state
                .admission_decisions
                .create_admission_decision(decision)
                .await
                .map_err(EndpointError::from)
        })
        .await
}

fn validate_new_decision(decision: &AdmissionDecision) -> EndpointResult<()> {
    if decision.id.as_str().is_empty() {
        return bad_request("Id is required.");
    }
    if !decision.id.is_nil() {
        return bad_request("On a post you can not define a GUID.");
    }
    if decision.application.id.as_str().trim().is_empty() {
        return bad_request("Application id is required.");
    }
    if decision.decision_type.id.as_str().trim().is_empty() {
        return bad_request("Decision type id is required.");
    }
    Ok(())
}

fn bad_request(message: &str) -> EndpointResult<()> {
    Err(ApiError::BadRequest(message.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use student_records_core::{Guid, GuidObject};

    fn decision(id: &str) -> AdmissionDecision {
        AdmissionDecision {
            id: Guid::from(id),
            application: GuidObject::new("app-1"),
            decision_type: GuidObject::new("admit"),
            decided_on: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_new_decision_requires_nil_id() {
        assert!(validate_new_decision(&decision(student_records_core::NIL_GUID)).is_ok());
        assert!(matches!(
            validate_new_decision(&decision("5b0c4bd1-4d43-4b5d-9d8e-1b5d6c1b8a11")),
            Err(EndpointError::Api(ApiError::BadRequest(m))) if m.contains("can not define a GUID")
        ));
        assert!(validate_new_decision(&decision("")).is_err());
    }

    #[test]
    fn test_new_decision_requires_references() {
        let mut d = decision(student_records_core::NIL_GUID);
        d.decision_type = GuidObject::new("");
        assert!(matches!(
            validate_new_decision(&d),
            Err(EndpointError::Api(ApiError::BadRequest(m))) if m == "Decision type id is required."
        ));
    }
}
