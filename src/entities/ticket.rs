//! Ticket entity - A purchase linking an enrollment to a ticket type.
//!
//! The status moves from `RESERVED` to `PAID` when the payment flow completes;
//! only paid tickets can unlock hotel data.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Payment status of a ticket
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    /// Booked but not paid yet
    #[sea_orm(string_value = "RESERVED")]
    Reserved,
    /// Payment confirmed
    #[sea_orm(string_value = "PAID")]
    Paid,
}

/// Ticket database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    /// Unique identifier for the ticket
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Ticket type this ticket was bought as
    pub ticket_type_id: i32,
    /// Enrollment that owns the ticket
    #[sea_orm(unique)]
    pub enrollment_id: i32,
    /// Payment status
    pub status: TicketStatus,
    /// When the ticket was created
    pub created_at: DateTimeUtc,
    /// When the ticket was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Ticket and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each ticket references exactly one ticket type
    #[sea_orm(
        belongs_to = "super::ticket_type::Entity",
        from = "Column::TicketTypeId",
        to = "super::ticket_type::Column::Id"
    )]
    TicketType,
    /// Each ticket belongs to one enrollment
    #[sea_orm(
        belongs_to = "super::enrollment::Entity",
        from = "Column::EnrollmentId",
        to = "super::enrollment::Column::Id"
    )]
    Enrollment,
}

impl Related<super::ticket_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TicketType.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
