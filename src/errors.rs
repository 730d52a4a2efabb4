//! Unified error type for the hotel availability service.
//!
//! Every fallible operation in `core`, `config` and `api` returns [`Result`].
//! Variants are grouped by the HTTP class they end up in; the mapping to status
//! codes lives in the API layer so that `core` stays framework-agnostic.

use std::fmt;
use thiserror::Error;

/// Why a ticket does not grant access to hotel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentIssue {
    /// The ticket status is not `PAID`
    TicketNotPaid,
    /// The ticket type does not include a hotel stay
    HotelNotIncluded,
    /// The ticket type is for remote attendance
    RemoteTicket,
}

impl fmt::Display for PaymentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::TicketNotPaid => "ticket has not been paid",
            Self::HotelNotIncluded => "ticket type does not include hotel",
            Self::RemoteTicket => "ticket type is remote",
        };
        f.write_str(text)
    }
}

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// Any failure reported by the database layer
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O failure (binding the listener, reading files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The user has no enrollment
    #[error("No enrollment found for user {user_id}")]
    EnrollmentNotFound {
        /// User that was looked up
        user_id: i32,
    },

    /// The enrollment has no ticket
    #[error("No ticket found for enrollment {enrollment_id}")]
    TicketNotFound {
        /// Enrollment that was looked up
        enrollment_id: i32,
    },

    /// The ticket's type could not be loaded
    #[error("No ticket type found for ticket {ticket_id}")]
    TicketTypeNotFound {
        /// Ticket whose type was looked up
        ticket_id: i32,
    },

    /// There are no hotels at all in the store
    #[error("No hotels registered")]
    NoHotelInventory,

    /// The ticket does not entitle the user to hotel data
    #[error("Payment required: {reason}")]
    PaymentRequired {
        /// First failing condition
        reason: PaymentIssue,
    },

    /// The request carries no valid session token
    #[error("Unauthorized: {reason}")]
    Unauthorized {
        /// Why the credentials were rejected
        reason: String,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_issue_display() {
        let err = Error::PaymentRequired {
            reason: PaymentIssue::TicketNotPaid,
        };
        assert_eq!(err.to_string(), "Payment required: ticket has not been paid");
    }
}
