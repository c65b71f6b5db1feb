//! HTTP handlers and the helpers they share.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::Serialize;

pub mod users;

/// Builds a JSON response from an optional body and a status code. `None`
/// produces an empty body.
pub fn respond<T: Serialize>(body: Option<&T>, status: StatusCode) -> HttpResponse {
    let mut builder = HttpResponse::build(status);
    match body {
        Some(body) => builder.json(body),
        None => builder.finish(),
    }
}
