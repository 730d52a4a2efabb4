//! Maps [`Error`] to HTTP responses.
//!
//! Clients get a fixed status and a generic body; the detailed message is only
//! logged.

use crate::errors::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, warn};

/// JSON body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Error class, e.g. `NotFoundError`
    pub name: &'static str,
    /// Fixed, client-safe message
    pub message: &'static str,
}

/// Status code and body for an error.
#[must_use]
pub const fn classify(err: &Error) -> (StatusCode, ErrorBody) {
    match err {
        Error::EnrollmentNotFound { .. }
        | Error::TicketNotFound { .. }
        | Error::TicketTypeNotFound { .. }
        | Error::NoHotelInventory => (
            StatusCode::NOT_FOUND,
            ErrorBody {
                name: "NotFoundError",
                message: "No result for this search!",
            },
        ),
        Error::PaymentRequired { .. } => (
            StatusCode::PAYMENT_REQUIRED,
            ErrorBody {
                name: "PaymentRequiredError",
                message: "Ticket must be paid, in person and include a hotel",
            },
        ),
        Error::Unauthorized { .. } => (
            StatusCode::UNAUTHORIZED,
            ErrorBody {
                name: "UnauthorizedError",
                message: "You must be signed in to continue",
            },
        ),
        Error::Config { .. } | Error::Database(_) | Error::Io(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBody {
                name: "InternalServerError",
                message: "Internal Server Error",
            },
        ),
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, body) = classify(&self);
        if status.is_server_error() {
            error!(error.message = %self, "Request failed");
        } else {
            warn!(status = status.as_u16(), error.message = %self, "Request rejected");
        }
        (status, Json(body)).into_response()
    }
}
