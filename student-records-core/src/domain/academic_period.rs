use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{
    common::{GuidObject, Identified},
    ids::Guid,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcademicPeriodCategoryType {
    Year,
    Term,
    Subterm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Open,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicPeriodCategory {
    #[serde(rename = "type")]
    pub category_type: AcademicPeriodCategoryType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<GuidObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preceding: Option<GuidObject>,
}

/// Academic period, v6 representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicPeriod2 {
    pub id: Guid,
    pub code: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_on: DateTime<Utc>,
    pub end_on: DateTime<Utc>,
    pub category: AcademicPeriodCategory,
}

/// Academic period, v8 representation (adds census dates and registration).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicPeriod3 {
    pub id: Guid,
    pub code: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_on: DateTime<Utc>,
    pub end_on: DateTime<Utc>,
    pub category: AcademicPeriodCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub census_dates: Option<Vec<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration: Option<RegistrationStatus>,
}

/// Academic period, v16.1.0 representation (adds reporting year).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicPeriod4 {
    pub id: Guid,
    pub code: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_on: DateTime<Utc>,
    pub end_on: DateTime<Utc>,
    pub category: AcademicPeriodCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub census_dates: Option<Vec<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration: Option<RegistrationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting_year: Option<i32>,
}

impl Identified for AcademicPeriod2 {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Identified for AcademicPeriod3 {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Identified for AcademicPeriod4 {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

/// `criteria` filter for the v8 list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AcademicPeriodRegistrationCriteria {
    pub registration: Option<RegistrationStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AcademicPeriodCategoryFilter {
    #[serde(rename = "type")]
    pub category_type: Option<AcademicPeriodCategoryType>,
}

/// `criteria` filter for the v16.1.0 list. Every field is optional and
/// an absent field does not constrain the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AcademicPeriodFilter {
    pub code: Option<String>,
    pub registration: Option<RegistrationStatus>,
    pub category: Option<AcademicPeriodCategoryFilter>,
    pub start_on: Option<DateTime<Utc>>,
    pub end_on: Option<DateTime<Utc>>,
}

impl AcademicPeriodFilter {
    pub fn category_type(&self) -> Option<AcademicPeriodCategoryType> {
        self.category.as_ref().and_then(|c| c.category_type)
    }
}
