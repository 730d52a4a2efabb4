//! JSON response shapes for the hotel endpoints.
//!
//! Field names are camelCase and timestamps are ISO-8601 UTC with millisecond
//! precision (`2024-01-01T12:00:00.000Z`). The room list is keyed `Rooms`.

use crate::{
    core::hotel::HotelWithRooms,
    entities::{hotel, room},
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

fn iso_millis<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// A hotel as listed by `GET /hotels`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
    /// Hotel id
    pub id: i32,
    /// Display name
    pub name: String,
    /// Image URL
    pub image: String,
    /// Creation time
    #[serde(serialize_with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    /// Last modification time
    #[serde(serialize_with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
}

impl From<hotel::Model> for HotelResponse {
    fn from(value: hotel::Model) -> Self {
        let hotel::Model {
            id,
            name,
            image,
            created_at,
            updated_at,
        } = value;
        Self {
            id,
            name,
            image,
            created_at,
            updated_at,
        }
    }
}

/// A room inside a hotel detail response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    /// Room id
    pub id: i32,
    /// Room name or number
    pub name: String,
    /// How many guests fit
    pub capacity: i32,
    /// Hotel the room belongs to
    pub hotel_id: i32,
    /// Creation time
    #[serde(serialize_with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    /// Last modification time
    #[serde(serialize_with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
}

impl From<room::Model> for RoomResponse {
    fn from(value: room::Model) -> Self {
        let room::Model {
            id,
            name,
            capacity,
            hotel_id,
            created_at,
            updated_at,
        } = value;
        Self {
            id,
            name,
            capacity,
            hotel_id,
            created_at,
            updated_at,
        }
    }
}

/// Body of `GET /hotels/:hotel_id`: the hotel fields plus its rooms.
#[derive(Debug, Serialize)]
pub struct HotelWithRoomsResponse {
    /// Hotel fields, inlined at the top level
    #[serde(flatten)]
    pub hotel: HotelResponse,
    /// Every room of the hotel
    #[serde(rename = "Rooms")]
    pub rooms: Vec<RoomResponse>,
}

impl From<HotelWithRooms> for HotelWithRoomsResponse {
    fn from(value: HotelWithRooms) -> Self {
        let HotelWithRooms { hotel, rooms } = value;
        Self {
            hotel: hotel.into(),
            rooms: rooms.into_iter().map(RoomResponse::from).collect(),
        }
    }
}
