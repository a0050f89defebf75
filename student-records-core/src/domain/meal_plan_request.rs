use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    common::{GuidObject, Identified},
    ids::Guid,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealPlanRequestStatus {
    Submitted,
    Approved,
    Rejected,
}

/// Meal plan request, v10 representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanRequest {
    #[serde(default)]
    pub id: Guid,
    pub person: GuidObject,
    pub meal_plan: GuidObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub academic_period: Option<GuidObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_on: Option<DateTime<Utc>>,
    pub status: MealPlanRequestStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_on: Option<DateTime<Utc>>,
}

impl Identified for MealPlanRequest {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}
