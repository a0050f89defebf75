//! Contracts of the coordination services the API delegates to.
//!
//! Every read takes a `bypass_cache` flag derived from the caller's
//! `Cache-Control` header. Implementations own all business rules and
//! persistence; the HTTP layer never inspects the data it passes through.

use async_trait::async_trait;

use crate::{
    domain::*,
    error::ServiceResult,
};

/// Privacy and extension metadata shared by every integration resource.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait EthosMetadataService {
    /// Property paths the current caller may not see on this resource.
    async fn data_privacy_list(
        &self,
        route: &ResourceRoute,
        bypass_cache: bool,
    ) -> ServiceResult<Vec<String>>;

    /// Tenant extensions for the given entity ids.
    async fn extended_data(
        &self,
        route: &ResourceRoute,
        ids: &[String],
    ) -> ServiceResult<Vec<ExtendedData>>;
}

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait AcademicDisciplineService {
    async fn get_academic_disciplines(
        &self,
        bypass_cache: bool,
    ) -> ServiceResult<Vec<AcademicDiscipline>>;

    async fn get_academic_disciplines2(
        &self,
        bypass_cache: bool,
    ) -> ServiceResult<Vec<AcademicDiscipline2>>;

    async fn get_academic_disciplines3(
        &self,
        major_status: MajorStatus,
        discipline_type: Option<AcademicDisciplineType>,
        bypass_cache: bool,
    ) -> ServiceResult<Vec<AcademicDiscipline3>>;

    async fn get_academic_discipline_by_guid(
        &self,
        guid: &str,
    ) -> ServiceResult<Option<AcademicDiscipline>>;

    async fn get_academic_discipline2_by_guid(
        &self,
        guid: &str,
    ) -> ServiceResult<Option<AcademicDiscipline2>>;
}

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait AcademicPeriodService {
    async fn get_academic_periods2(
        &self,
        bypass_cache: bool,
    ) -> ServiceResult<Vec<AcademicPeriod2>>;

    async fn get_academic_periods3(
        &self,
        registration: Option<RegistrationStatus>,
        bypass_cache: bool,
    ) -> ServiceResult<Vec<AcademicPeriod3>>;

    async fn get_academic_periods4(
        &self,
        filter: AcademicPeriodFilter,
        bypass_cache: bool,
    ) -> ServiceResult<Vec<AcademicPeriod4>>;

    async fn get_academic_period2_by_guid(
        &self,
        guid: &str,
        bypass_cache: bool,
    ) -> ServiceResult<Option<AcademicPeriod2>>;

    async fn get_academic_period3_by_guid(
        &self,
        guid: &str,
        bypass_cache: bool,
    ) -> ServiceResult<Option<AcademicPeriod3>>;

    async fn get_academic_period4_by_guid(
        &self,
        guid: &str,
        bypass_cache: bool,
    ) -> ServiceResult<Option<AcademicPeriod4>>;
}

/// Curriculum reference data: academic levels.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait CurriculumService {
    async fn get_academic_levels(&self) -> ServiceResult<Vec<AcademicLevel>>;

    async fn get_academic_levels2(&self, bypass_cache: bool) -> ServiceResult<Vec<AcademicLevel2>>;

    async fn get_academic_level2_by_guid(
        &self,
        guid: &str,
    ) -> ServiceResult<Option<AcademicLevel2>>;
}

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait AdmissionDecisionService {
    async fn get_admission_decisions(
        &self,
        offset: usize,
        limit: usize,
        query: AdmissionDecisionQuery,
        bypass_cache: bool,
    ) -> ServiceResult<Page<AdmissionDecision>>;

    async fn get_admission_decision_by_guid(
        &self,
        guid: &str,
        bypass_cache: bool,
    ) -> ServiceResult<Option<AdmissionDecision>>;

    async fn create_admission_decision(
        &self,
        decision: AdmissionDecision,
    ) -> ServiceResult<AdmissionDecision>;
}

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait StudentGradePointAverageService {
    async fn get_student_grade_point_averages(
        &self,
        offset: usize,
        limit: usize,
        query: StudentGradePointAverageQuery,
        bypass_cache: bool,
    ) -> ServiceResult<Page<StudentGradePointAverage>>;

    async fn get_student_grade_point_average_by_guid(
        &self,
        guid: &str,
        bypass_cache: bool,
    ) -> ServiceResult<Option<StudentGradePointAverage>>;
}

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait StudentAcademicCredentialService {
    async fn get_student_academic_credentials(
        &self,
        offset: usize,
        limit: usize,
        query: StudentAcademicCredentialQuery,
        bypass_cache: bool,
    ) -> ServiceResult<Page<StudentAcademicCredential>>;

    async fn get_student_academic_credential_by_guid(
        &self,
        guid: &str,
        bypass_cache: bool,
    ) -> ServiceResult<Option<StudentAcademicCredential>>;
}

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait MealPlanRequestService {
    async fn get_meal_plan_requests(
        &self,
        offset: usize,
        limit: usize,
        bypass_cache: bool,
    ) -> ServiceResult<Page<MealPlanRequest>>;

    async fn get_meal_plan_request_by_guid(
        &self,
        guid: &str,
        bypass_cache: bool,
    ) -> ServiceResult<Option<MealPlanRequest>>;

    async fn create_meal_plan_request(
        &self,
        request: MealPlanRequest,
    ) -> ServiceResult<MealPlanRequest>;

    async fn update_meal_plan_request(
        &self,
        guid: &str,
        request: MealPlanRequest,
    ) -> ServiceResult<MealPlanRequest>;
}

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait AddAuthorizationService {
    async fn get_add_authorization(&self, id: &str) -> ServiceResult<Option<AddAuthorization>>;

    async fn get_section_add_authorizations(
        &self,
        section_id: &str,
    ) -> ServiceResult<Vec<AddAuthorization>>;

    async fn get_student_add_authorizations(
        &self,
        student_id: &str,
    ) -> ServiceResult<Vec<AddAuthorization>>;

    async fn create_add_authorization(
        &self,
        input: AddAuthorizationInput,
    ) -> ServiceResult<AddAuthorization>;

    async fn update_add_authorization(
        &self,
        authorization: AddAuthorization,
    ) -> ServiceResult<AddAuthorization>;
}
