use std::fmt;

/// Permission codes the student-records endpoints may require.
///
/// The wire code is what appears in a caller's token claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionCode {
    ViewAdmissionDecisions,
    UpdateAdmissionDecisions,
    ViewStudentGradePointAverages,
    ViewStudentAcademicCredentials,
    ViewMealPlanRequest,
    CreateMealPlanRequest,
}

impl PermissionCode {
    pub const ALL: [PermissionCode; 6] = [
        PermissionCode::ViewAdmissionDecisions,
        PermissionCode::UpdateAdmissionDecisions,
        PermissionCode::ViewStudentGradePointAverages,
        PermissionCode::ViewStudentAcademicCredentials,
        PermissionCode::ViewMealPlanRequest,
        PermissionCode::CreateMealPlanRequest,
    ];

    pub const fn code(&self) -> &'static str {
        match self {
            PermissionCode::ViewAdmissionDecisions => "VIEW.ADMISSION.DECISIONS",
            PermissionCode::UpdateAdmissionDecisions => "UPDATE.ADMISSION.DECISIONS",
            PermissionCode::ViewStudentGradePointAverages => "VIEW.STUDENT.GRADE.POINT.AVERAGES",
            PermissionCode::ViewStudentAcademicCredentials => "VIEW.STUDENT.ACADEMIC.CREDENTIALS",
            PermissionCode::ViewMealPlanRequest => "VIEW.MEAL.PLAN.REQUEST",
            PermissionCode::CreateMealPlanRequest => "CREATE.MEAL.PLAN.REQUEST",
        }
    }

    /// Parse a wire code. Codes are matched case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl fmt::Display for PermissionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Comma-separated list of codes, for error messages.
pub fn describe_codes(codes: &[PermissionCode]) -> String {
    codes
        .iter()
        .map(PermissionCode::code)
        .collect::<Vec<_>>()
        .join(", ")
}
