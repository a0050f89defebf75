pub mod ids;
pub mod common;
pub mod ethos;
pub mod academic_discipline;
pub mod academic_period;
pub mod academic_level;
pub mod admission_decision;
pub mod grade_point_average;
pub mod academic_credential;
pub mod meal_plan_request;
pub mod add_authorization;

pub use ids::*;
pub use common::*;
pub use ethos::*;
pub use academic_discipline::*;
pub use academic_period::*;
pub use academic_level::*;
pub use admission_decision::*;
pub use grade_point_average::*;
pub use academic_credential::*;
pub use meal_plan_request::*;
pub use add_authorization::*;
