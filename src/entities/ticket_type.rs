//! Ticket type entity - The kind of ticket an attendee bought.
//!
//! The two flags decide hotel access: a ticket type grants it only when it
//! includes a hotel and is not remote.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ticket type database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ticket_types")]
pub struct Model {
    /// Unique identifier for the ticket type
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Display name (e.g., "Presencial + Hotel")
    pub name: String,
    /// Price in cents
    pub price: i32,
    /// Whether the ticket is for online attendance only
    pub is_remote: bool,
    /// Whether the ticket includes a hotel stay
    pub includes_hotel: bool,
    /// When the ticket type was created
    pub created_at: DateTimeUtc,
    /// When the ticket type was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between TicketType and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One ticket type is referenced by many tickets
    #[sea_orm(has_many = "super::ticket::Entity")]
    Tickets,
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tickets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
