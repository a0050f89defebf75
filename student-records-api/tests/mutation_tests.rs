mod common;

use axum::http::StatusCode;
use common::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use student_records_core::*;

const MEAL_PLAN_WRITE: &[PermissionCode] = &[PermissionCode::CreateMealPlanRequest];
const LEGACY_JSON: &str = "application/vnd.ellucian.v1+json";

fn admission_body(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "application": {"id": "app-1"},
        "decisionType": {"id": "admit"},
        "decidedOn": "2024-03-01T00:00:00Z"
    })
}

#[tokio::test]
async fn test_create_admission_decision() {
    let mut mocks = Mocks::new().with_empty_ethos();
    mocks
        .admission_decisions
        .expect_create_admission_decision()
        .withf(|decision| decision.id.is_nil() && decision.application.id.as_str() == "app-1")
        .times(1)
        .returning(|mut decision| {
            decision.id = Guid::from(GUID);
            Ok(decision)
        });

    let request = send_json(
        "POST",
        "/admission-decisions",
        &integration_type("11.1.0"),
        &admission_body(NIL_GUID),
        &[PermissionCode::UpdateAdmissionDecisions],
    );
    let (status, response) = call(mocks.into_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], json!(GUID));
}

#[tokio::test]
async fn test_create_admission_decision_rejects_caller_guid() {
    let mocks = Mocks::new();
    let request = send_json(
        "POST",
        "/admission-decisions",
        &integration_type("11.1.0"),
        &admission_body(GUID),
        &[PermissionCode::UpdateAdmissionDecisions],
    );

    let (status, response) = call(mocks.into_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["errors"][0]["message"]
        .as_str()
        .unwrap()
        .contains("can not define a GUID"));
}

#[tokio::test]
async fn test_create_admission_decision_requires_update_permission() {
    let mocks = Mocks::new();
    let request = send_json(
        "POST",
        "/admission-decisions",
        "application/json",
        &admission_body(NIL_GUID),
        &[PermissionCode::ViewAdmissionDecisions],
    );

    let (status, _) = call(mocks.into_app(), request).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_meal_plan_request_requires_body() {
    let mocks = Mocks::new();
    let request = send_json(
        "POST",
        "/meal-plan-requests",
        &integration_type("10"),
        &json!(null),
        MEAL_PLAN_WRITE,
    );

    let (status, _) = call(mocks.into_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_meal_plan_request_forwards_caller_guid() {
    let mut mocks = Mocks::new().with_empty_ethos();
    mocks
        .meal_plan_requests
        .expect_create_meal_plan_request()
        .withf(|request| request.id.as_str() == GUID)
        .times(1)
        .returning(Ok);

    let body = serde_json::to_value(meal_plan_request(GUID)).unwrap();
    let request = send_json(
        "POST",
        "/meal-plan-requests",
        &integration_type("10"),
        &body,
        MEAL_PLAN_WRITE,
    );
    let (status, response) = call(mocks.into_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body_json(response).await["id"], json!(GUID));
}

#[tokio::test]
async fn test_create_meal_plan_request_requires_id() {
    let mocks = Mocks::new();
    let mut body = serde_json::to_value(meal_plan_request(GUID)).unwrap();
    body.as_object_mut().unwrap().remove("id");

    let request = send_json(
        "POST",
        "/meal-plan-requests",
        &integration_type("10"),
        &body,
        MEAL_PLAN_WRITE,
    );
    let (status, response) = call(mocks.into_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["errors"][0]["message"]
        .as_str()
        .unwrap()
        .contains("The id must be specified"));
}

#[rstest]
#[case("POST", "/meal-plan-requests".to_string())]
#[case("PUT", format!("/meal-plan-requests/{}", GUID))]
#[tokio::test]
async fn test_meal_plan_mutations_need_explicit_version(
    #[case] method: &str,
    #[case] uri: String,
) {
    let mocks = Mocks::new();
    let body = serde_json::to_value(meal_plan_request(GUID)).unwrap();
    let request = send_json(method, &uri, "application/json", &body, MEAL_PLAN_WRITE);

    let (status, _) = call(mocks.into_app(), request).await;

    assert_eq!(status, StatusCode::NOT_ACCEPTABLE);
}

#[tokio::test]
async fn test_update_meal_plan_request_merges_over_stored() {
    let mut mocks = Mocks::new().with_empty_ethos();
    mocks
        .meal_plan_requests
        .expect_get_meal_plan_request_by_guid()
        .times(1)
        .returning(|guid, _| {
            let mut stored = meal_plan_request(guid);
            stored.academic_period = Some(GuidObject::new("fall-2024"));
            Ok(Some(stored))
        });
    mocks
        .meal_plan_requests
        .expect_update_meal_plan_request()
        .withf(|guid, merged| {
            guid == GUID
                && merged.status == MealPlanRequestStatus::Approved
                && merged.meal_plan.id.as_str() == "plan-1"
                && merged.academic_period == Some(GuidObject::new("fall-2024"))
        })
        .times(1)
        .returning(|_, merged| Ok(merged));

    let request = send_json(
        "PUT",
        &format!("/meal-plan-requests/{}", GUID),
        &integration_type("10"),
        &json!({"id": GUID.to_uppercase(), "status": "approved", "academicPeriod": null}),
        MEAL_PLAN_WRITE,
    );
    let (status, response) = call(mocks.into_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], json!("approved"));
}

#[tokio::test]
async fn test_update_keeps_privacy_restricted_values() {
    let mut mocks = Mocks::new();
    mocks
        .metadata
        .expect_data_privacy_list()
        .returning(|_, _| Ok(vec!["person".to_string()]));
    mocks
        .metadata
        .expect_extended_data()
        .returning(|_, _| Ok(Vec::new()));
    mocks
        .meal_plan_requests
        .expect_get_meal_plan_request_by_guid()
        .returning(|guid, _| Ok(Some(meal_plan_request(guid))));
    mocks
        .meal_plan_requests
        .expect_update_meal_plan_request()
        .withf(|_, merged| merged.person.id.as_str() == "person-1")
        .times(1)
        .returning(|_, merged| Ok(merged));

    let request = send_json(
        "PUT",
        &format!("/meal-plan-requests/{}", GUID),
        &integration_type("10"),
        &json!({"id": GUID, "person": {"id": "someone-else"}}),
        MEAL_PLAN_WRITE,
    );
    let (status, response) = call(mocks.into_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(header_str(&response, "x-content-restricted"), Some("partial"));
}

#[rstest]
#[case(GUID, json!({"id": "a-different-guid"}))]
#[case(NIL_GUID, json!({"id": NIL_GUID}))]
#[tokio::test]
async fn test_update_rejects_mismatched_target(
    #[case] guid: &str,
    #[case] body: serde_json::Value,
) {
    let mocks = Mocks::new();
    let request = send_json(
        "PUT",
        &format!("/meal-plan-requests/{}", guid),
        &integration_type("10"),
        &body,
        MEAL_PLAN_WRITE,
    );

    let (status, _) = call(mocks.into_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_of_missing_request_is_not_found() {
    let mut mocks = Mocks::new();
    mocks
        .meal_plan_requests
        .expect_get_meal_plan_request_by_guid()
        .returning(|_, _| Ok(None));

    let request = send_json(
        "PUT",
        &format!("/meal-plan-requests/{}", GUID),
        &integration_type("10"),
        &json!({"id": GUID, "status": "rejected"}),
        MEAL_PLAN_WRITE,
    );
    let (status, _) = call(mocks.into_app(), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_add_authorization_returns_location() {
    let mut mocks = Mocks::new();
    mocks
        .add_authorizations
        .expect_create_add_authorization()
        .withf(|input| input.section_id == "SEC-1" && input.student_id == "0000123")
        .times(1)
        .returning(|input| {
            Ok(AddAuthorization {
                id: "42".to_string(),
                section_id: input.section_id,
                student_id: Some(input.student_id),
                add_authorization_code: Some("ABC123".to_string()),
                is_revoked: false,
                assigned_by: input.assigned_by,
                assigned_time: input.assigned_time,
                revoked_by: None,
                revoked_time: None,
            })
        });

    let request = send_json(
        "POST",
        "/add-authorizations",
        LEGACY_JSON,
        &json!({"SectionId": "SEC-1", "StudentId": "0000123"}),
        &[],
    );
    let (status, response) = call(mocks.into_app(), request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(header_str(&response, "location"), Some("/add-authorizations/42"));
    let body = body_json(response).await;
    assert_eq!(body["AddAuthorizationCode"], json!("ABC123"));
}

#[tokio::test]
async fn test_add_authorization_validation_uses_legacy_body() {
    let mocks = Mocks::new();
    let request = send_json(
        "POST",
        "/add-authorizations",
        "application/json",
        &json!({"SectionId": "", "StudentId": "0000123"}),
        &[],
    );

    let (status, response) = call(mocks.into_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body.get("errors").is_none());
    assert!(body["message"].as_str().unwrap().contains("section_id"));
}

#[tokio::test]
async fn test_update_add_authorization_conflict() {
    let mut mocks = Mocks::new();
    mocks
        .add_authorizations
        .expect_update_add_authorization()
        .times(1)
        .returning(|_| Err(ServiceError::Conflict("Record is locked by another user.".into())));

    let request = send_json(
        "PUT",
        "/add-authorizations",
        LEGACY_JSON,
        &json!({"Id": "42", "SectionId": "SEC-1", "IsRevoked": true}),
        &[],
    );
    let (status, response) = call(mocks.into_app(), request).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Record is locked by another user."})
    );
}

#[tokio::test]
async fn test_missing_add_authorization_is_not_found() {
    let mut mocks = Mocks::new();
    mocks
        .add_authorizations
        .expect_get_add_authorization()
        .times(1)
        .returning(|_| Ok(None));

    let request = get("/add-authorizations/99", &[])
        .body(axum::body::Body::empty())
        .unwrap();
    let (status, response) = call(mocks.into_app(), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("99"));
}

#[tokio::test]
async fn test_section_add_authorizations() {
    let mut mocks = Mocks::new();
    mocks
        .add_authorizations
        .expect_get_section_add_authorizations()
        .withf(|section_id| section_id == "SEC-1")
        .times(1)
        .returning(|_| Ok(Vec::new()));

    let request = get("/sections/SEC-1/add-authorizations", &[])
        .body(axum::body::Body::empty())
        .unwrap();
    let (status, response) = call(mocks.into_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_legacy_session_expiry() {
    let mut mocks = Mocks::new();
    mocks
        .curriculum
        .expect_get_academic_levels()
        .times(1)
        .returning(|| Err(ServiceError::SessionExpired("expired".into())));

    let request = get("/academic-levels", &[])
        .header("accept", LEGACY_JSON)
        .body(axum::body::Body::empty())
        .unwrap();
    let (status, response) = call(mocks.into_app(), request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Session has expired while retrieving academic levels."})
    );
}
