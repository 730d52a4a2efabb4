//! Enrollment entity - A user's registration for the event.
//!
//! Each user has at most one enrollment. Having one is the first condition
//! checked before any hotel data is shown.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Enrollment database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    /// Unique identifier for the enrollment
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Full name of the attendee
    pub name: String,
    /// Brazilian taxpayer number, unique per enrollment
    #[sea_orm(unique)]
    pub cpf: String,
    /// Attendee's date of birth
    pub birthday: DateTimeUtc,
    /// Contact phone number
    pub phone: String,
    /// Owner of the enrollment
    #[sea_orm(unique)]
    pub user_id: i32,
    /// When the enrollment was created
    pub created_at: DateTimeUtc,
    /// When the enrollment was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Enrollment and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each enrollment belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    /// One enrollment has at most one ticket
    #[sea_orm(has_one = "super::ticket::Entity")]
    Ticket,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
