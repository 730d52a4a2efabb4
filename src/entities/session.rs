//! Session entity - A bearer token issued at sign-in.
//!
//! A request is authenticated when its `Authorization: Bearer <token>` header
//! matches a stored session; the session's `user_id` becomes the caller.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Session database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    /// Unique identifier for the session
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Owner of the session
    pub user_id: i32,
    /// Opaque token presented by the client
    #[sea_orm(unique)]
    pub token: String,
    /// When the session was created
    pub created_at: DateTimeUtc,
    /// When the session was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Session and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each session belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
