//! HTTP rendering of [`Reply`] values.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value as JsonValue;

use packrat_core::{Reply, StatusCodeError};

use crate::app::errors;

/// A [`Reply`] ready to be returned from an axum handler.
///
/// | Reply | Response |
/// |---|---|
/// | `Failure` | status from the code, `{"error", "message"}` body |
/// | `NotFound` | 404, empty |
/// | `NoContent` | 204, empty |
/// | `Done` | 200, empty |
/// | `Many` / `One` | 200, JSON payload |
#[derive(Debug)]
pub struct Rendered<T>(pub Reply<T>);

impl<T> From<Reply<T>> for Rendered<T> {
    fn from(reply: Reply<T>) -> Self {
        Self(reply)
    }
}

impl<T> Rendered<T> {
    /// A request that could not be extracted (bad path segment, malformed
    /// body) answered with the same JSON error shape as any other bad request.
    pub fn rejected(rejection: impl std::fmt::Display) -> Self {
        Self(Reply::from_error(StatusCodeError::bad_request(
            rejection.to_string(),
        )))
    }
}

impl<T: Serialize> IntoResponse for Rendered<T> {
    fn into_response(self) -> Response {
        match self.0 {
            Reply::Failure { code, message } => {
                errors::json_error(errors::status_for(code), code.as_str(), message)
            }
            Reply::NotFound => StatusCode::NOT_FOUND.into_response(),
            Reply::NoContent => StatusCode::NO_CONTENT.into_response(),
            Reply::Done => StatusCode::OK.into_response(),
            Reply::Many(items) => payload(&items),
            Reply::One(value) => payload(&value),
        }
    }
}

fn payload<T: Serialize>(value: &T) -> Response {
    match serde_json::to_value(value) {
        // An absent value must arrive as `Reply::NotFound` (see `Reply::from_option`);
        // a null payload means the caller picked the wrong entry point.
        Ok(JsonValue::Null) => {
            panic!("reply payload serialised to null; render absent values with Reply::from_option")
        }
        Ok(json) => (StatusCode::OK, Json(json)).into_response(),
        Err(e) => Rendered::<()>(Reply::from_error(StatusCodeError::internal(e))).into_response(),
    }
}
