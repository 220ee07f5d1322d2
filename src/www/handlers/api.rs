//! # Dashboard Callback Handlers
//!
//! JSON endpoints the page calls when a control changes.
//!
//! - `POST /api/dispatch` takes the page's current state and one event, and
//!   returns the new state with the outputs of every binding the event fired.
//! - `GET /api/figure` and `GET /api/wins` expose the map and win-count
//!   bindings directly.
//!
//! The server keeps no per-client state: everything a binding needs arrives
//! with the request.

use crate::dashboard::{Dashboard, Mode, Output, UiEvent, UiState, bindings};
use crate::finals::Finals;
use crate::stats;
use actix_web::{HttpRequest, HttpResponse, Responder, error, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct DispatchRequest {
    pub state: UiState,
    pub event: UiEvent,
}

#[derive(Debug, Serialize)]
pub struct DispatchResponse {
    pub state: UiState,
    pub outputs: Vec<Output>,
}

pub async fn post_dispatch(
    finals: web::Data<Finals>,
    body: web::Json<DispatchRequest>,
) -> impl Responder {
    let DispatchRequest { state, event } = body.into_inner();
    let mut dashboard = Dashboard::with_state(&finals, state);
    let outputs = dashboard.dispatch(event);
    HttpResponse::Ok().json(DispatchResponse {
        state: dashboard.into_state(),
        outputs,
    })
}

#[derive(Debug, Deserialize)]
pub struct FigureQuery {
    #[serde(default)]
    mode: Mode,
    year: Option<u16>,
}

pub async fn get_figure(
    finals: web::Data<Finals>,
    query: web::Query<FigureQuery>,
) -> impl Responder {
    let year = query
        .year
        .or_else(|| finals.earliest_year())
        .unwrap_or_default();
    HttpResponse::Ok().json(bindings::map_figure(&finals, query.mode, year))
}

#[derive(Debug, Deserialize)]
pub struct WinsQuery {
    country: Option<String>,
}

#[derive(Debug, Serialize)]
struct WinsResponse<'a> {
    country: Option<&'a str>,
    wins: usize,
    text: String,
}

pub async fn get_wins(finals: web::Data<Finals>, query: web::Query<WinsQuery>) -> impl Responder {
    let country = query.country.as_deref().filter(|c| !c.is_empty());
    HttpResponse::Ok().json(WinsResponse {
        country,
        wins: country.map_or(0, |c| stats::win_count(&finals, c)),
        text: bindings::win_count_text(&finals, country),
    })
}

fn bad_request(message: String) -> error::Error {
    log::warn!("rejected callback: {message}");
    error::InternalError::from_response(
        message.clone(),
        HttpResponse::BadRequest().json(json!({ "error": message })),
    )
    .into()
}

/// Turns malformed JSON bodies into a `400` with a JSON error body.
pub fn json_error(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    bad_request(err.to_string())
}

/// Turns malformed query strings into a `400` with a JSON error body.
pub fn query_error(err: error::QueryPayloadError, _req: &HttpRequest) -> error::Error {
    bad_request(err.to_string())
}
