use actix_http::body::BoxBody;
use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use std::fmt;
use tracing_batteries::prelude::*;

#[derive(Debug, Serialize, Deserialize)]
pub struct APIError {
    pub code: u16,
    pub error: String,
    pub message: String,
}

impl APIError {
    pub fn new(code: u16, error: &str, message: &str) -> Self {
        Self {
            code,
            error: error.to_string(),
            message: message.to_string(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new(404, "Not Found", message)
    }

    fn internal() -> Self {
        Self::new(
            500,
            "Internal Server Error",
            "We ran into a problem, this has been reported and will be looked at.",
        )
    }
}

impl error::ResponseError for APIError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponse::build(self.status_code())
            .content_type("application/json; charset=utf-8")
            .json(self)
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl fmt::Display for APIError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[HTTP {} {}] {}", self.code, self.error, self.message)
    }
}

impl From<sqlite::Error> for APIError {
    fn from(err: sqlite::Error) -> Self {
        error!({ exception.message = %err }, "We were unable to query the SQLite database");

        sentry::capture_error(&err);

        Self::internal()
    }
}

impl From<actix::MailboxError> for APIError {
    fn from(err: actix::MailboxError) -> Self {
        error!({ exception.message = %err }, "We were unable to reach the book store");

        sentry::capture_error(&err);

        Self::internal()
    }
}

/// Converts request bodies which could not be read as the expected JSON
/// document into a `400 Bad Request`.
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    debug!({ exception.message = %err }, "Rejected a malformed JSON request body");

    APIError::new(
        400,
        "Bad Request",
        &format!("The request body was not valid JSON for this endpoint: {err}"),
    )
    .into()
}
