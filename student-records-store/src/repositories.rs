//! Service trait implementations for [`InMemoryStore`](crate::InMemoryStore),
//! one module per resource.

pub mod academic_credentials;
pub mod academic_disciplines;
pub mod academic_levels;
pub mod academic_periods;
pub mod add_authorizations;
pub mod admission_decisions;
pub mod ethos;
pub mod grade_point_averages;
pub mod meal_plan_requests;
