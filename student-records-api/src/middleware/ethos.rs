//! Response rewriting for Ethos privacy and extension metadata.
//!
//! The pipeline attaches an [`EthosContext`] to successful responses. This
//! middleware applies it to the JSON body: privacy-restricted properties are
//! removed (flagged with `X-Content-Restricted: partial`) and extended data
//! is merged into each entity by id.

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};
use serde_json::Value;
use student_records_core::EthosContext;

pub const CONTENT_RESTRICTED_HEADER: &str = "x-content-restricted";

pub async fn ethos_response_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let Some(context) = response.extensions_mut().remove::<EthosContext>() else {
        return response;
    };
    if context.is_empty() || !response.status().is_success() {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!(error = %err, "Failed to buffer response body for Ethos formatting");
            return Response::from_parts(parts, Body::empty());
        }
    };

    let mut value: Value = match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(_) => return Response::from_parts(parts, Body::from(bytes)),
    };

    let restricted = apply_ethos(&mut value, &context);
    if restricted {
        parts.headers.insert(
            CONTENT_RESTRICTED_HEADER,
            HeaderValue::from_static("partial"),
        );
    }

    match serde_json::to_vec(&value) {
        Ok(body) => {
            parts.headers.remove(header::CONTENT_LENGTH);
            Response::from_parts(parts, Body::from(body))
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to serialize Ethos-formatted body");
            Response::from_parts(parts, Body::from(bytes))
        }
    }
}

/// Apply privacy and extension metadata to a body that is either a single
/// entity or an array of entities. Returns true if anything was removed.
pub fn apply_ethos(body: &mut Value, context: &EthosContext) -> bool {
    match body {
        Value::Array(items) => items
            .iter_mut()
            .map(|item| apply_to_entity(item, context))
            .fold(false, |acc, removed| acc | removed),
        Value::Object(_) => apply_to_entity(body, context),
        _ => false,
    }
}

fn apply_to_entity(entity: &mut Value, context: &EthosContext) -> bool {
    let mut removed = false;
    for path in &context.privacy_paths {
        let segments: Vec<&str> = path.split('.').filter(|s| !s.is_empty()).collect();
        removed |= remove_path(entity, &segments);
    }

    let id = entity.get("id").and_then(Value::as_str).map(str::to_owned);
    if let (Some(id), Value::Object(map)) = (id, &mut *entity) {
        if let Some(extended) = context.extended_for(&id) {
            for (key, value) in &extended.properties {
                map.insert(key.clone(), value.clone());
            }
        }
    }
    removed
}

/// Remove a dotted path, descending through arrays along the way.
pub fn remove_path(value: &mut Value, segments: &[&str]) -> bool {
    match (value, segments) {
        (_, []) => false,
        (Value::Array(items), _) => items
            .iter_mut()
            .map(|item| remove_path(item, segments))
            .fold(false, |acc, removed| acc | removed),
        (Value::Object(map), [last]) => map.remove(*last).is_some(),
        (Value::Object(map), [head, rest @ ..]) => match map.get_mut(*head) {
            Some(child) => remove_path(child, rest),
            None => false,
        },
        _ => false,
    }
}
