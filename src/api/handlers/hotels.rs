use crate::{
    api::{
        AppState,
        extractor::AuthorizedUser,
        model::{HotelResponse, HotelWithRoomsResponse},
    },
    core::availability::{hotel_for_user, hotels_for_user},
    errors::Result,
};
use axum::{
    Json,
    extract::{Path, State},
};

/// `GET /hotels`
pub async fn show_hotel_list(
    user: AuthorizedUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<HotelResponse>>> {
    hotels_for_user(&state.database, user.id())
        .await
        .map(|hotels| hotels.into_iter().map(HotelResponse::from).collect())
        .map(Json)
}

/// `GET /hotels/:hotel_id`
///
/// An unknown hotel id for an eligible user answers 200 with `null`.
pub async fn show_hotel(
    user: AuthorizedUser,
    Path(hotel_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<Option<HotelWithRoomsResponse>>> {
    hotel_for_user(&state.database, user.id(), hotel_id)
        .await
        .map(|hotel| hotel.map(HotelWithRoomsResponse::from))
        .map(Json)
}
