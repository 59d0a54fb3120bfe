//! Route handlers

pub mod campaigns;
pub mod health;
pub mod leads;
pub mod members;
pub mod permissions;

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type RouteError = (StatusCode, Json<ErrorResponse>);

pub(crate) fn route_error(status: StatusCode, error: impl Into<String>) -> RouteError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
}

pub(crate) fn not_found(error: impl Into<String>) -> RouteError {
    route_error(StatusCode::NOT_FOUND, error)
}

pub(crate) fn bad_request(error: impl Into<String>) -> RouteError {
    route_error(StatusCode::BAD_REQUEST, error)
}

/// Map a core error onto the HTTP surface
pub(crate) fn core_error(err: lm_core::Error) -> RouteError {
    use lm_core::Error;

    let status = match &err {
        Error::MemberNotFound(_) | Error::CampaignNotFound(_) | Error::LeadNotFound(_) => {
            StatusCode::NOT_FOUND
        }
        Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
    };
    route_error(status, err.to_string())
}
