use crate::model::booking::TransferRoomRequest;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{id::BookingId, room::event::TransferRoom};
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn transfer_booking_room(
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<TransferRoomRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    registry
        .booking_repository()
        .transfer_room(TransferRoom::new(booking_id, req.room_id))
        .await
        .map(|_| StatusCode::OK)
}
