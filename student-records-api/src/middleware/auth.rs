use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use student_records_core::PermissionCode;

use crate::{error::ApiError, AppState};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,       // Subject (login id)
    pub exp: usize,        // Expiration time
    pub iat: usize,        // Issued at
    pub person_id: String, // ERP person id of the caller
    /// Granted permission codes.
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// The authenticated caller, stored in request extensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Caller {
    pub person_id: String,
    pub permissions: HashSet<PermissionCode>,
}

impl Caller {
    pub fn new(
        person_id: impl Into<String>,
        permissions: impl IntoIterator<Item = PermissionCode>,
    ) -> Self {
        Self {
            person_id: person_id.into(),
            permissions: permissions.into_iter().collect(),
        }
    }

    /// True if the caller holds at least one of `required`.
    pub fn has_any(&self, required: &[PermissionCode]) -> bool {
        required.iter().any(|code| self.permissions.contains(code))
    }
}

impl From<Claims> for Caller {
    fn from(claims: Claims) -> Self {
        let permissions = claims
            .permissions
            .iter()
            .filter_map(|code| {
                let parsed = PermissionCode::from_code(code);
                if parsed.is_none() {
                    tracing::debug!(code = %code, "Ignoring unknown permission code");
                }
                parsed
            })
            .collect();

        Self {
            person_id: claims.person_id,
            permissions,
        }
    }
}

/// JWT authentication middleware
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing bearer token.".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized("Missing bearer token.".to_string()))?;

    let claims = validate_token(token, &state.settings.jwt_secret).map_err(|err| {
        tracing::info!(error = %err, "Rejected bearer token");
        err
    })?;

    request.extensions_mut().insert(Caller::from(claims));

    Ok(next.run(request).await)
}

/// Validate JWT token and extract claims
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, ApiError> {
    let _header = decode_header(token)?;

    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "unit-test-secret";

    fn claims(permissions: &[&str], exp_offset: i64) -> Claims {
        let now = chrono::Utc::now().timestamp();
        Claims {
            sub: "jdoe".to_string(),
            exp: (now + exp_offset) as usize,
            iat: now as usize,
            person_id: "0001234".to_string(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn token(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_valid_token_round_trips_claims() {
        let original = claims(&["VIEW.ADMISSION.DECISIONS"], 3600);
        let decoded = validate_token(&token(&original, SECRET), SECRET).unwrap();
        assert_eq!(decoded.person_id, "0001234");
        assert_eq!(decoded.permissions, vec!["VIEW.ADMISSION.DECISIONS"]);
    }

    #[test]
    fn test_wrong_secret_is_unauthorized() {
        let err = validate_token(&token(&claims(&[], 3600), "other"), SECRET).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[test]
    fn test_expired_token_is_unauthorized() {
        let err = validate_token(&token(&claims(&[], -3600), SECRET), SECRET).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[test]
    fn test_caller_keeps_known_permission_codes() {
        let caller = Caller::from(claims(
            &["view.meal.plan.request", "SOMETHING.ELSE"],
            3600,
        ));
        assert_eq!(caller.permissions.len(), 1);
        assert!(caller.has_any(&[
            PermissionCode::CreateMealPlanRequest,
            PermissionCode::ViewMealPlanRequest,
        ]));
        assert!(!caller.has_any(&[PermissionCode::ViewAdmissionDecisions]));
    }
}
