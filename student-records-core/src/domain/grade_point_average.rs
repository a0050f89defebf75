use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    common::{GuidObject, Identified},
    ids::Guid,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcademicSource {
    All,
    Institution,
    Transfer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CumulativeGradePointAverage {
    pub academic_source: AcademicSource,
    #[serde(with = "rust_decimal::serde::float")]
    pub attempted_credits: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub earned_credits: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub quality_points: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodGradePointAverage {
    pub academic_period: GuidObject,
    pub academic_source: AcademicSource,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
}

/// Student grade point averages, v1.0.0 representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentGradePointAverage {
    pub id: Guid,
    pub student: GuidObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_based: Option<Vec<PeriodGradePointAverage>>,
    pub cumulatives: Vec<CumulativeGradePointAverage>,
}

impl Identified for StudentGradePointAverage {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

/// `criteria` filter for the grade point averages list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StudentGradePointAverageCriteria {
    pub student: Option<GuidObject>,
}

/// Named query `gradeDate`: only averages affected by grades posted on or after the date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GradeDateFilter {
    pub grade_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentGradePointAverageQuery {
    pub student_id: Option<Guid>,
    pub grade_date: Option<NaiveDate>,
}
