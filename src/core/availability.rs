//! Hotel availability for a signed-in user.
//!
//! Both operations run the eligibility gate first and only then return data.

use crate::{
    core::{
        eligibility::check_eligibility,
        hotel::{HotelWithRooms, get_hotel_with_rooms},
    },
    entities::hotel,
    errors::Result,
};
use sea_orm::DatabaseConnection;
use tracing::instrument;

/// Lists every hotel for an eligible user.
#[instrument(skip(db))]
pub async fn hotels_for_user(db: &DatabaseConnection, user_id: i32) -> Result<Vec<hotel::Model>> {
    let allowed = check_eligibility(db, user_id).await?;
    Ok(allowed.hotels)
}

/// Loads one hotel with its rooms for an eligible user.
///
/// An unknown `hotel_id` is not an error: the caller gets `Ok(None)`.
#[instrument(skip(db))]
pub async fn hotel_for_user(
    db: &DatabaseConnection,
    user_id: i32,
    hotel_id: i32,
) -> Result<Option<HotelWithRooms>> {
    check_eligibility(db, user_id).await?;
    get_hotel_with_rooms(db, hotel_id).await
}
