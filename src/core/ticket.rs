//! Ticket lookups, with and without the ticket type attached.

use crate::{
    entities::{Ticket, TicketType, ticket, ticket_type},
    errors::Result,
};
use sea_orm::prelude::*;
use tracing::{debug, instrument};

/// A ticket together with the type it was bought as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketWithType {
    /// The ticket row
    pub ticket: ticket::Model,
    /// The ticket type the ticket references
    pub ticket_type: ticket_type::Model,
}

/// Finds the ticket owned by an enrollment.
#[instrument(skip(db))]
pub async fn find_ticket_by_enrollment(
    db: &DatabaseConnection,
    enrollment_id: i32,
) -> Result<Option<ticket::Model>> {
    let found = Ticket::find()
        .filter(ticket::Column::EnrollmentId.eq(enrollment_id))
        .one(db)
        .await?;
    debug!(ticket_id = found.as_ref().map(|t| t.id), "Ticket lookup");
    Ok(found)
}

/// Loads a ticket and its ticket type in one query.
///
/// Returns `None` when the ticket is gone or its type row is missing.
#[instrument(skip(db))]
pub async fn find_ticket_with_type(
    db: &DatabaseConnection,
    ticket_id: i32,
) -> Result<Option<TicketWithType>> {
    let row = Ticket::find_by_id(ticket_id)
        .find_also_related(TicketType)
        .one(db)
        .await?;

    Ok(match row {
        Some((ticket, Some(ticket_type))) => Some(TicketWithType {
            ticket,
            ticket_type,
        }),
        _ => None,
    })
}
