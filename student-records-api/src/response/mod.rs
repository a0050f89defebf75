//! Response shaping shared by the endpoint pipeline.

pub mod pagination;

pub use pagination::{PagedResponse, PaginationLinks};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use student_records_core::EthosContext;

/// A JSON body with optional Ethos metadata for the formatting middleware.
pub fn json_with_ethos<T: Serialize>(
    status: StatusCode,
    body: T,
    ethos: Option<EthosContext>,
) -> Response {
    let mut response = (status, Json(body)).into_response();
    attach_ethos(&mut response, ethos);
    response
}

pub fn attach_ethos(response: &mut Response, ethos: Option<EthosContext>) {
    if let Some(context) = ethos.filter(|c| !c.is_empty()) {
        response.extensions_mut().insert(context);
    }
}
