mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use student_records_core::*;

#[tokio::test]
async fn test_unqualified_request_selects_default_version() {
    let mut mocks = Mocks::new().with_empty_ethos();
    mocks
        .disciplines
        .expect_get_academic_disciplines3()
        .times(1)
        .returning(|_, _, _| Ok(vec![discipline3(GUID, MajorStatus::Active)]));

    let request = get("/academic-disciplines", &[]).body(Body::empty()).unwrap();
    let (status, response) = call(mocks.into_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        header_str(&response, "x-media-type"),
        Some("application/vnd.hedtech.integration.v15+json")
    );
    let body = body_json(response).await;
    assert_eq!(body[0]["status"], json!("active"));
}

#[tokio::test]
async fn test_major_version_selects_frozen_handler() {
    let mut mocks = Mocks::new().with_empty_ethos();
    mocks
        .disciplines
        .expect_get_academic_disciplines()
        .times(1)
        .returning(|_| Ok(vec![discipline(GUID)]));

    let request = get_versioned("/academic-disciplines", "6", &[]);
    let (status, response) = call(mocks.into_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        header_str(&response, "x-media-type"),
        Some("application/vnd.hedtech.integration.v6+json")
    );
    let body = body_json(response).await;
    assert_eq!(body[0]["code"], json!("MATH"));
    assert!(body[0].get("reporting").is_none());
}

#[tokio::test]
async fn test_v7_and_v10_share_discipline_shape() {
    let mut mocks = Mocks::new().with_empty_ethos();
    mocks
        .disciplines
        .expect_get_academic_disciplines2()
        .times(2)
        .returning(|_| Ok(vec![discipline2(GUID)]));
    let app = mocks.into_app();

    for version in ["7", "10"] {
        let (status, response) =
            call(app.clone(), get_versioned("/academic-disciplines", version, &[])).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            header_str(&response, "x-media-type"),
            Some(integration_type(version).as_str())
        );
    }
}

#[tokio::test]
async fn test_full_version_must_match_exactly() {
    let mut mocks = Mocks::new().with_empty_ethos();
    mocks
        .periods
        .expect_get_academic_periods4()
        .times(1)
        .returning(|_, _| Ok(Vec::new()));
    let app = mocks.into_app();

    let (status, _) = call(app.clone(), get_versioned("/academic-periods", "16.1.0", &[])).await;
    assert_eq!(status, StatusCode::OK);

    let (status, response) = call(app, get_versioned("/academic-periods", "16.0.0", &[])).await;
    assert_eq!(status, StatusCode::NOT_ACCEPTABLE);
    let body = body_json(response).await;
    assert!(body["errors"][0]["message"]
        .as_str()
        .unwrap()
        .contains("16.0.0"));
}

#[tokio::test]
async fn test_major_request_matches_highest_registered_minor() {
    let mut mocks = Mocks::new().with_empty_ethos();
    mocks
        .periods
        .expect_get_academic_periods4()
        .times(1)
        .returning(|_, _| Ok(Vec::new()));

    let request = get_versioned("/academic-periods", "16", &[]);
    let (status, response) = call(mocks.into_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        header_str(&response, "x-media-type"),
        Some("application/vnd.hedtech.integration.v16.1.0+json")
    );
}

#[tokio::test]
async fn test_unregistered_version_is_not_acceptable() {
    let mocks = Mocks::new();
    let request = get_versioned("/academic-disciplines", "99", &[]);
    let (status, _) = call(mocks.into_app(), request).await;
    assert_eq!(status, StatusCode::NOT_ACCEPTABLE);
}

#[tokio::test]
async fn test_malformed_media_type_is_bad_request() {
    let mocks = Mocks::new();
    let request = get("/academic-disciplines", &[])
        .header(header::ACCEPT, "application/vnd.hedtech.integration.vX+json")
        .body(Body::empty())
        .unwrap();

    let (status, _) = call(mocks.into_app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_legacy_version_routes_to_legacy_handler() {
    let mut mocks = Mocks::new();
    mocks
        .curriculum
        .expect_get_academic_levels()
        .times(1)
        .returning(|| {
            Ok(vec![AcademicLevel {
                code: "UG".to_string(),
                description: "Undergraduate".to_string(),
            }])
        });

    let request = get("/academic-levels", &[])
        .header(header::ACCEPT, "application/vnd.ellucian.v1+json")
        .body(Body::empty())
        .unwrap();
    let (status, response) = call(mocks.into_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        header_str(&response, "x-media-type"),
        Some("application/vnd.ellucian.v1+json")
    );
    let body = body_json(response).await;
    assert_eq!(body, json!([{"Code": "UG", "Description": "Undergraduate"}]));
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let mocks = Mocks::new();
    let request = Request::builder()
        .uri("/academic-disciplines")
        .body(Body::empty())
        .unwrap();

    let (status, response) = call(mocks.into_app(), request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["errors"][0]["code"], json!("Global.UnauthorizedAccess"));
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_unauthorized() {
    let mut mocks = Mocks::new();
    mocks.settings.jwt_secret = "another-secret".to_string();

    let request = get_versioned("/academic-disciplines", "15", &[]);
    let (status, _) = call(mocks.into_app(), request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// Stubs answer every version and never reach a service.
#[rstest]
#[case("POST", "/academic-periods", None)]
#[case("POST", "/academic-periods", Some("16.1.0"))]
#[case("PUT", "/academic-periods/7a2bf6b5-cdcd-4c8f-b5d8-3053bf5b3fbc", None)]
#[case("DELETE", "/academic-periods/7a2bf6b5-cdcd-4c8f-b5d8-3053bf5b3fbc", None)]
#[case("POST", "/academic-disciplines", Some("15"))]
#[case("DELETE", "/academic-disciplines/7a2bf6b5-cdcd-4c8f-b5d8-3053bf5b3fbc", Some("6"))]
#[case("POST", "/academic-levels", None)]
#[case("PUT", "/admission-decisions/7a2bf6b5-cdcd-4c8f-b5d8-3053bf5b3fbc", Some("11.1.0"))]
#[case("DELETE", "/admission-decisions/7a2bf6b5-cdcd-4c8f-b5d8-3053bf5b3fbc", None)]
#[case("POST", "/student-grade-point-averages", None)]
#[case("PUT", "/student-academic-credentials/7a2bf6b5-cdcd-4c8f-b5d8-3053bf5b3fbc", None)]
#[case("DELETE", "/meal-plan-requests/7a2bf6b5-cdcd-4c8f-b5d8-3053bf5b3fbc", None)]
#[tokio::test]
async fn test_unsupported_mutations_never_call_service(
    #[case] method: &str,
    #[case] uri: &str,
    #[case] version: Option<&str>,
) {
    let mocks = Mocks::new();
    let content_type = version
        .map(integration_type)
        .unwrap_or_else(|| "application/json".to_string());
    let request = send_json(method, uri, &content_type, &json!({"id": GUID}), &[]);

    let (status, response) = call(mocks.into_app(), request).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({"errors": [{
            "code": "Global.Internal.Error",
            "description": "Unsupported Request",
            "message": "Operation not supported."
        }]})
    );
}
