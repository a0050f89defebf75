//! One module per resource. Each exposes `register`, which adds its
//! versioned endpoints to the shared route table.

pub mod academic_disciplines;
pub mod academic_levels;
pub mod academic_periods;
pub mod add_authorizations;
pub mod admission_decisions;
pub mod meal_plan_requests;
pub mod student_academic_credentials;
pub mod student_grade_point_averages;

use crate::versioning::VersionedRoutes;

pub fn register(routes: VersionedRoutes) -> VersionedRoutes {
    [
        academic_disciplines::register,
        academic_levels::register,
        academic_periods::register,
        add_authorizations::register,
        admission_decisions::register,
        meal_plan_requests::register,
        student_academic_credentials::register,
        student_grade_point_averages::register,
    ]
    .into_iter()
    .fold(routes, |routes, register| register(routes))
}
