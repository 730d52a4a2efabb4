//! Hotel and room lookups.
//!
//! Listing returns bare hotels; a single hotel is always loaded together with
//! its rooms.

use crate::{
    entities::{Hotel, Room, hotel, room},
    errors::Result,
};
use sea_orm::{QueryOrder, prelude::*};
use tracing::{debug, instrument};

/// A hotel with its full room list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelWithRooms {
    /// The hotel row
    pub hotel: hotel::Model,
    /// Every room of the hotel, ordered by id
    pub rooms: Vec<room::Model>,
}

/// Retrieves every hotel in insertion (id) order. Rooms are not loaded.
#[instrument(skip(db))]
pub async fn list_hotels(db: &DatabaseConnection) -> Result<Vec<hotel::Model>> {
    let hotels = Hotel::find()
        .order_by_asc(hotel::Column::Id)
        .all(db)
        .await?;
    debug!("Fetched {} hotels", hotels.len());
    Ok(hotels)
}

/// Retrieves one hotel and eagerly loads its rooms.
#[instrument(skip(db))]
pub async fn get_hotel_with_rooms(
    db: &DatabaseConnection,
    hotel_id: i32,
) -> Result<Option<HotelWithRooms>> {
    let found = Hotel::find_by_id(hotel_id)
        .find_with_related(Room)
        .order_by_asc(room::Column::Id)
        .all(db)
        .await?
        .into_iter()
        .next()
        .map(|(hotel, rooms)| HotelWithRooms { hotel, rooms });

    debug!(
        rooms = found.as_ref().map(|h| h.rooms.len()),
        "Hotel lookup"
    );
    Ok(found)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_list_hotels_empty() -> Result<()> {
        let db = setup_test_db().await?;
        assert!(list_hotels(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_list_hotels_in_insertion_order() -> Result<()> {
        let db = setup_test_db().await?;
        let first = create_test_hotel(&db, "Copacabana Palace").await?;
        let second = create_test_hotel(&db, "Hotel Fasano").await?;
        create_test_room(&db, first.id, "101", 2).await?;

        let hotels = list_hotels(&db).await?;
        assert_eq!(hotels, vec![first, second]);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_hotel_with_rooms() -> Result<()> {
        let db = setup_test_db().await?;
        let hotel = create_test_hotel(&db, "Copacabana Palace").await?;
        let other = create_test_hotel(&db, "Hotel Fasano").await?;
        let room_a = create_test_room(&db, hotel.id, "101", 2).await?;
        let room_b = create_test_room(&db, hotel.id, "102", 3).await?;
        create_test_room(&db, other.id, "201", 1).await?;

        let found = get_hotel_with_rooms(&db, hotel.id).await?.unwrap();
        assert_eq!(found.hotel, hotel);
        assert_eq!(found.rooms, vec![room_a, room_b]);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_hotel_without_rooms() -> Result<()> {
        let db = setup_test_db().await?;
        let hotel = create_test_hotel(&db, "Empty Inn").await?;

        let found = get_hotel_with_rooms(&db, hotel.id).await?.unwrap();
        assert_eq!(found.hotel, hotel);
        assert!(found.rooms.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_get_unknown_hotel() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_hotel(&db, "Copacabana Palace").await?;

        assert!(get_hotel_with_rooms(&db, 9999).await?.is_none());
        Ok(())
    }
}
