//! Shared test utilities.
//!
//! This module provides the in-memory database setup and factories that insert
//! rows with sensible defaults. The service itself never writes, so factories
//! go straight through the entity `ActiveModel`s.
#![allow(clippy::unwrap_used)]

use crate::{
    entities::{
        TicketStatus, enrollment, hotel, room, session, ticket, ticket_type, user,
    },
    errors::Result,
};
use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::atomic::{AtomicU32, Ordering};

static SEQUENCE: AtomicU32 = AtomicU32::new(1);

fn next_seq() -> u32 {
    SEQUENCE.fetch_add(1, Ordering::Relaxed)
}

/// Fixed timestamp used for every factory row so JSON output is predictable.
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a user with a unique e-mail.
pub async fn create_test_user(db: &DatabaseConnection) -> Result<user::Model> {
    let seq = next_seq();
    let model = user::ActiveModel {
        email: Set(format!("user{seq}@drivent.test")),
        password: Set("$2b$10$hashedpassword".to_string()),
        created_at: Set(fixed_time()),
        updated_at: Set(fixed_time()),
        ..Default::default()
    };
    Ok(model.insert(db).await?)
}

/// Creates a session with a unique token for `user_id`.
pub async fn create_test_session(db: &DatabaseConnection, user_id: i32) -> Result<session::Model> {
    let seq = next_seq();
    let model = session::ActiveModel {
        user_id: Set(user_id),
        token: Set(format!("token-{user_id}-{seq}")),
        created_at: Set(fixed_time()),
        updated_at: Set(fixed_time()),
        ..Default::default()
    };
    Ok(model.insert(db).await?)
}

/// Creates an enrollment for `user_id`.
pub async fn create_test_enrollment(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<enrollment::Model> {
    let seq = next_seq();
    let model = enrollment::ActiveModel {
        name: Set(format!("Attendee {seq}")),
        cpf: Set(format!("{seq:011}")),
        birthday: Set(Utc.with_ymd_and_hms(1990, 5, 17, 0, 0, 0).unwrap()),
        phone: Set("(21) 98999-9999".to_string()),
        user_id: Set(user_id),
        created_at: Set(fixed_time()),
        updated_at: Set(fixed_time()),
        ..Default::default()
    };
    Ok(model.insert(db).await?)
}

/// Creates a ticket type with explicit flags.
pub async fn create_custom_ticket_type(
    db: &DatabaseConnection,
    is_remote: bool,
    includes_hotel: bool,
) -> Result<ticket_type::Model> {
    let seq = next_seq();
    let model = ticket_type::ActiveModel {
        name: Set(format!("Ticket type {seq}")),
        price: Set(if includes_hotel { 60_000 } else { 25_000 }),
        is_remote: Set(is_remote),
        includes_hotel: Set(includes_hotel),
        created_at: Set(fixed_time()),
        updated_at: Set(fixed_time()),
        ..Default::default()
    };
    Ok(model.insert(db).await?)
}

/// In-person ticket type that includes a hotel stay.
pub async fn create_hotel_ticket_type(db: &DatabaseConnection) -> Result<ticket_type::Model> {
    create_custom_ticket_type(db, false, true).await
}

/// Remote ticket type. Remote tickets never include a hotel.
pub async fn create_remote_ticket_type(db: &DatabaseConnection) -> Result<ticket_type::Model> {
    create_custom_ticket_type(db, true, false).await
}

/// In-person ticket type without a hotel stay.
pub async fn create_no_hotel_ticket_type(db: &DatabaseConnection) -> Result<ticket_type::Model> {
    create_custom_ticket_type(db, false, false).await
}

/// Creates a ticket for an enrollment.
pub async fn create_test_ticket(
    db: &DatabaseConnection,
    enrollment_id: i32,
    ticket_type_id: i32,
    status: TicketStatus,
) -> Result<ticket::Model> {
    let model = ticket::ActiveModel {
        ticket_type_id: Set(ticket_type_id),
        enrollment_id: Set(enrollment_id),
        status: Set(status),
        created_at: Set(fixed_time()),
        updated_at: Set(fixed_time()),
        ..Default::default()
    };
    Ok(model.insert(db).await?)
}

/// Creates a hotel with the fixed timestamps.
pub async fn create_test_hotel(db: &DatabaseConnection, name: &str) -> Result<hotel::Model> {
    let model = hotel::ActiveModel {
        name: Set(name.to_string()),
        image: Set(format!(
            "https://images.drivent.test/{}.jpg",
            name.to_lowercase().replace(' ', "-")
        )),
        created_at: Set(fixed_time()),
        updated_at: Set(fixed_time()),
        ..Default::default()
    };
    Ok(model.insert(db).await?)
}

/// Creates a room in `hotel_id`.
pub async fn create_test_room(
    db: &DatabaseConnection,
    hotel_id: i32,
    name: &str,
    capacity: i32,
) -> Result<room::Model> {
    let model = room::ActiveModel {
        name: Set(name.to_string()),
        capacity: Set(capacity),
        hotel_id: Set(hotel_id),
        created_at: Set(fixed_time()),
        updated_at: Set(fixed_time()),
        ..Default::default()
    };
    Ok(model.insert(db).await?)
}

/// Sets up a user who passes every ticket check: enrolled, with a paid
/// in-person ticket that includes a hotel, and signed in.
/// Hotels are left to the caller.
pub async fn setup_eligible_user(
    db: &DatabaseConnection,
) -> Result<(user::Model, session::Model)> {
    let user = create_test_user(db).await?;
    let session = create_test_session(db, user.id).await?;
    let enrollment = create_test_enrollment(db, user.id).await?;
    let ticket_type = create_hotel_ticket_type(db).await?;
    create_test_ticket(db, enrollment.id, ticket_type.id, TicketStatus::Paid).await?;
    Ok((user, session))
}
