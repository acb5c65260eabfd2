use poem::http::Method;
use poem::web::RemoteAddr;
use poem::{handler, IntoResponse, Response};

use crate::prelude::*;
use crate::regression;
use crate::web::payload::{self, Payload, METHOD_NOT_IMPLEMENTED};

/// Fits the line for `POST`, any other method is not implemented.
#[handler]
#[instrument(skip_all, level = "info", fields(method = %method))]
pub async fn handle(method: Method, remote_addr: &RemoteAddr, body: Vec<u8>) -> Response {
    if method != Method::POST {
        return Payload::message(METHOD_NOT_IMPLEMENTED).into_response();
    }
    debug!(%remote_addr, n_bytes = body.len());

    let start_instant = Instant::now();
    let outcome = regression::process(&body);
    match &outcome {
        Ok(fit) => {
            info!(fit.slope, fit.intercept, elapsed = ?start_instant.elapsed(), "fitted");
        }
        Err(error) if error.is_input_error() => {
            info!(%error, "rejected");
        }
        Err(error) => {
            warn!(%error, elapsed = ?start_instant.elapsed(), "not fitable");
        }
    }
    payload::respond(&outcome)
}
