#![allow(dead_code)]

use serde_json::{json, Value};
use student_records_core::*;
use student_records_store::{Fixture, InMemoryStore};

pub const MAJOR_GUID: &str = "11111111-aaaa-4000-8000-000000000001";
pub const MINOR_GUID: &str = "11111111-aaaa-4000-8000-000000000002";
pub const TERM_GUID: &str = "22222222-bbbb-4000-8000-000000000001";
pub const YEAR_GUID: &str = "22222222-bbbb-4000-8000-000000000002";
pub const STUDENT_A: &str = "33333333-cccc-4000-8000-00000000000a";
pub const STUDENT_B: &str = "33333333-cccc-4000-8000-00000000000b";
pub const APPLICATION_A: &str = "44444444-dddd-4000-8000-00000000000a";
pub const APPLICATION_B: &str = "44444444-dddd-4000-8000-00000000000b";
pub const PERSON_FILTER: &str = "55555555-eeee-4000-8000-000000000001";
pub const MEAL_PLAN_REQUEST: &str = "66666666-ffff-4000-8000-000000000001";

/// A small campus: two disciplines, two periods, a handful of student records.
pub fn fixture_json() -> Value {
    json!({
        "academicDisciplines": [
            {"id": MAJOR_GUID, "code": "MATH", "title": "Mathematics", "type": "major",
             "reporting": [{"country": {"code": "USA", "disciplineCode": "27.0101"}}],
             "status": "active"},
            {"id": MINOR_GUID, "code": "ART", "title": "Art", "type": "minor"}
        ],
        "academicPeriods": [
            {"id": TERM_GUID, "code": "2024FA", "title": "Fall 2024",
             "startOn": "2024-08-26T00:00:00Z", "endOn": "2024-12-13T00:00:00Z",
             "category": {"type": "term", "parent": {"id": YEAR_GUID}},
             "registration": "open", "reportingYear": 2024},
            {"id": YEAR_GUID, "code": "2024", "title": "2024-2025",
             "startOn": "2024-08-01T00:00:00Z", "endOn": "2025-07-31T00:00:00Z",
             "category": {"type": "year"}, "registration": "closed"}
        ],
        "academicLevels": [
            {"id": "77777777-0000-4000-8000-000000000002", "code": "UG", "title": "Undergraduate"},
            {"id": "77777777-0000-4000-8000-000000000001", "code": "GR", "title": "Graduate",
             "description": "Graduate studies"}
        ],
        "admissionDecisions": [
            {"id": "88888888-0000-4000-8000-000000000001", "application": {"id": APPLICATION_A},
             "decisionType": {"id": "99999999-0000-4000-8000-000000000001"},
             "decidedOn": "2024-03-01T00:00:00Z"},
            {"id": "88888888-0000-4000-8000-000000000002", "application": {"id": APPLICATION_B},
             "decisionType": {"id": "99999999-0000-4000-8000-000000000001"},
             "decidedOn": "2024-04-01T00:00:00Z"}
        ],
        "studentGradePointAverages": [
            {"id": "aaaaaaaa-0000-4000-8000-000000000001", "student": {"id": STUDENT_A},
             "cumulatives": [{"academicSource": "all", "attemptedCredits": 30.0,
                              "earnedCredits": 30.0, "qualityPoints": 105.0, "value": 3.5}]},
            {"id": "aaaaaaaa-0000-4000-8000-000000000002", "student": {"id": STUDENT_B},
             "cumulatives": []}
        ],
        "studentAcademicCredentials": [
            {"id": "bbbbbbbb-0000-4000-8000-000000000001", "student": {"id": STUDENT_A},
             "credential": {"id": "cccccccc-0000-4000-8000-000000000001"},
             "credentialType": "degree",
             "academicLevel": {"id": "77777777-0000-4000-8000-000000000002"},
             "academicPrograms": [{"id": "dddddddd-0000-4000-8000-000000000001"}]},
            {"id": "bbbbbbbb-0000-4000-8000-000000000002", "student": {"id": STUDENT_B},
             "credential": {"id": "cccccccc-0000-4000-8000-000000000002"},
             "credentialType": "certificate"}
        ],
        "mealPlanRequests": [
            {"id": MEAL_PLAN_REQUEST, "person": {"id": STUDENT_A},
             "mealPlan": {"id": "eeeeeeee-0000-4000-8000-000000000001"}, "status": "submitted"}
        ],
        "addAuthorizations": [
            {"Id": "7", "SectionId": "SEC1", "StudentId": "0001234", "AddAuthorizationCode": "ABCD1234"},
            {"Id": "12", "SectionId": "SEC2", "StudentId": "0005678", "IsRevoked": true}
        ],
        "personFilters": { PERSON_FILTER: [STUDENT_B.to_uppercase()] },
        "applicants": { APPLICATION_A: STUDENT_A, APPLICATION_B: STUDENT_B },
        "lastGradeDates": {
            "aaaaaaaa-0000-4000-8000-000000000001": "2024-05-10",
            "aaaaaaaa-0000-4000-8000-000000000002": "2023-12-15"
        },
        "ethos": {
            "meal-plan-requests": {
                "privacyPaths": ["person"],
                "extended": [{"resourceId": MEAL_PLAN_REQUEST, "properties": {"dormitory": "North"}}]
            }
        }
    })
}

pub fn fixture() -> Fixture {
    serde_json::from_value(fixture_json()).expect("fixture should deserialize")
}

pub fn store() -> InMemoryStore {
    InMemoryStore::from_fixture(fixture())
}

pub fn ids<T: Identified>(rows: &[T]) -> Vec<String> {
    rows.iter().map(|r| r.id().to_string()).collect()
}
