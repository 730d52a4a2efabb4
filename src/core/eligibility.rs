//! Hotel eligibility - decides whether a user may see hotel data.
//!
//! The checks run in a fixed order and stop at the first failure:
//!
//! 1. the user has an enrollment,
//! 2. the enrollment has a ticket,
//! 3. at least one hotel exists,
//! 4. the ticket is paid, includes a hotel and is not remote.
//!
//! Steps 1–3 fail with a not-found error, step 4 with
//! [`Error::PaymentRequired`]. The hotel inventory read in step 3 is handed
//! back on success so callers do not query it twice.

use crate::{
    core::{
        enrollment::find_enrollment_by_user,
        hotel::list_hotels,
        ticket::{TicketWithType, find_ticket_by_enrollment, find_ticket_with_type},
    },
    entities::{TicketStatus, enrollment, hotel, ticket_type},
    errors::{Error, PaymentIssue, Result},
};
use sea_orm::DatabaseConnection;
use tracing::{info, instrument};

/// Proof that a user passed every eligibility check.
#[derive(Debug, Clone)]
pub struct Allowed {
    /// The user's enrollment
    pub enrollment: enrollment::Model,
    /// The user's ticket and its type
    pub ticket: TicketWithType,
    /// Every hotel in the store, in id order; never empty
    pub hotels: Vec<hotel::Model>,
}

/// Returns the first reason a ticket does not grant hotel access, if any.
///
/// Unpaid wins over a type without hotel, which wins over a remote type.
#[must_use]
pub const fn hotel_access_issue(
    status: TicketStatus,
    ticket_type: &ticket_type::Model,
) -> Option<PaymentIssue> {
    if !matches!(status, TicketStatus::Paid) {
        Some(PaymentIssue::TicketNotPaid)
    } else if !ticket_type.includes_hotel {
        Some(PaymentIssue::HotelNotIncluded)
    } else if ticket_type.is_remote {
        Some(PaymentIssue::RemoteTicket)
    } else {
        None
    }
}

/// Runs the eligibility checks for `user_id`.
#[instrument(skip(db))]
pub async fn check_eligibility(db: &DatabaseConnection, user_id: i32) -> Result<Allowed> {
    let enrollment = find_enrollment_by_user(db, user_id)
        .await?
        .ok_or(Error::EnrollmentNotFound { user_id })?;

    let ticket = find_ticket_by_enrollment(db, enrollment.id)
        .await?
        .ok_or(Error::TicketNotFound {
            enrollment_id: enrollment.id,
        })?;

    let hotels = list_hotels(db).await?;
    if hotels.is_empty() {
        return Err(Error::NoHotelInventory);
    }

    let with_type = find_ticket_with_type(db, ticket.id)
        .await?
        .ok_or(Error::TicketTypeNotFound {
            ticket_id: ticket.id,
        })?;

    if let Some(reason) = hotel_access_issue(ticket.status, &with_type.ticket_type) {
        info!(user_id, ticket_id = ticket.id, %reason, "Hotel access denied");
        return Err(Error::PaymentRequired { reason });
    }

    info!(user_id, ticket_id = ticket.id, "Hotel access granted");
    Ok(Allowed {
        enrollment,
        ticket: with_type,
        hotels,
    })
}
