//! The price lookup handler.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Response;

use crate::http::request::{validate, PriceParams};
use crate::http::response::{self, MSG_NOT_FOUND, MSG_NO_DATA, MSG_PRICE_FAILED};
use crate::http::server::AppState;
use crate::upstream::UpstreamOutcome;

/// `GET /stock/v1/get-price?region=<R>&symbol=<S>`
///
/// Validation runs before any network call: region first, then symbol.
/// The upstream outcome maps deterministically onto a status code.
pub async fn get_price(
    State(state): State<AppState>,
    Query(params): Query<PriceParams>,
) -> Response {
    let request = match validate(&params, &state.config.regions.supported) {
        Ok(r) => r,
        Err(rejection) => {
            tracing::warn!(?params, %rejection, "Rejected price request");
            return response::failure(StatusCode::BAD_REQUEST, rejection.to_string());
        }
    };

    tracing::debug!(region = %request.region, symbol = %request.symbol, "Fetching quote");

    match state
        .upstream
        .fetch_quote(&request.region, &request.symbol)
        .await
    {
        UpstreamOutcome::TransportError { message } => response::transport_failure(message),
        UpstreamOutcome::EmptyBody => {
            response::failure(StatusCode::PRECONDITION_FAILED, MSG_NO_DATA)
        }
        UpstreamOutcome::MissingPrice => {
            response::failure(StatusCode::SERVICE_UNAVAILABLE, MSG_PRICE_FAILED)
        }
        UpstreamOutcome::Success(quote) => response::price_obtained(quote),
    }
}

/// Catch-all for unmatched paths and methods.
pub async fn not_found() -> Response {
    response::failure(StatusCode::NOT_FOUND, MSG_NOT_FOUND)
}
