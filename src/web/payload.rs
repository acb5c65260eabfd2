use std::borrow::Cow;

use poem::http::StatusCode;
use poem::web::Json;
use poem::{IntoResponse, Response};
use serde::Serialize;

use crate::regression::{Error, Fit, Outcome};

pub const PONG: &str = "pong";
pub const GATEWAY_REQUIRED: &str = "HTTP-Requests allowed only via RapidAPI-Gateway.";
pub const METHOD_NOT_IMPLEMENTED: &str = "The used HTTP-Method is not implemented.";

/// Flat JSON object returned by every route.
#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum Payload {
    Message {
        #[serde(rename = "Message")]
        message: Cow<'static, str>,
    },

    Fit {
        #[serde(rename = "Coefficient")]
        coefficient: String,

        #[serde(rename = "Constant")]
        constant: String,

        #[serde(rename = "Function")]
        function: String,
    },
}

impl Payload {
    pub fn message(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }
}

impl From<Fit> for Payload {
    fn from(fit: Fit) -> Self {
        let coefficient = format!("{:.6}", fit.slope);
        let constant = format!("{:.6}", fit.intercept);
        let sign = if fit.intercept > 0.0 { "+" } else { "" };
        let function = format!("y = {coefficient}x {sign}{constant}");
        Self::Fit {
            coefficient,
            constant,
            function,
        }
    }
}

impl From<Error> for Payload {
    fn from(error: Error) -> Self {
        Self::message(error.to_string())
    }
}

impl IntoResponse for Payload {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Chooses the status code and the payload for the pipeline outcome.
///
/// Malformed input is still answered with `200 OK`, only a non-computable fit is a `500`.
pub fn build(outcome: &Outcome) -> (StatusCode, Payload) {
    match *outcome {
        Ok(fit) => (StatusCode::OK, fit.into()),
        Err(error @ Error::NotFitable) => (StatusCode::INTERNAL_SERVER_ERROR, error.into()),
        Err(error) => (StatusCode::OK, error.into()),
    }
}

pub fn respond(outcome: &Outcome) -> Response {
    let (status, payload) = build(outcome);
    payload.with_status(status).into_response()
}
