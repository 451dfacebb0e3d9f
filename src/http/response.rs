//! Wire response shapes.
//!
//! # Responsibilities
//! - Define the JSON bodies returned to clients
//! - Map upstream failure modes to status codes
//!
//! # Design Decisions
//! - Every body carries a top-level `success` flag
//! - Field order is fixed by declaration order, so identical outcomes
//!   serialize to identical bytes
//! - Failure messages are fixed strings; only transport failures expose
//!   the underlying error text

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::upstream::NormalizedQuote;

pub const MSG_PRICE_OK: &str = "Price obtained successfully";
pub const MSG_CONNECT_FAILED: &str =
    "An error occurred while connecting to the API. See 'error_message' for reason";
pub const MSG_NO_DATA: &str = "No data found. Please re-confirm instrument symbol";
pub const MSG_PRICE_FAILED: &str = "Retrieving price from API failed. Please retry";
pub const MSG_NOT_FOUND: &str =
    "URL does not exist. Please use /stock/v1/get-price?region=__region__&symbol=__symbol__";

/// Rejections and fixed-message failures.
#[derive(Debug, Serialize)]
pub struct Failure {
    pub success: bool,
    pub message: String,
}

/// Transport failures additionally expose the underlying error text.
#[derive(Debug, Serialize)]
pub struct TransportFailure {
    pub success: bool,
    pub message: &'static str,
    pub error_message: String,
}

/// Successful price lookup.
#[derive(Debug, Serialize)]
pub struct PriceBody {
    pub success: bool,
    pub message: &'static str,
    pub price: NormalizedQuote,
}

pub fn failure(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(Failure {
            success: false,
            message: message.into(),
        }),
    )
        .into_response()
}

pub fn transport_failure(error_message: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(TransportFailure {
            success: false,
            message: MSG_CONNECT_FAILED,
            error_message,
        }),
    )
        .into_response()
}

pub fn price_obtained(price: NormalizedQuote) -> Response {
    (
        StatusCode::OK,
        Json(PriceBody {
            success: true,
            message: MSG_PRICE_OK,
            price,
        }),
    )
        .into_response()
}
