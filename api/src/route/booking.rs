use axum::{routing::put, Router};
use registry::AppRegistry;

use crate::handler::booking::transfer_booking_room;

pub fn build_booking_routers() -> Router<AppRegistry> {
    let bookings_routers = Router::new().route("/:booking_id/room", put(transfer_booking_room));

    Router::new().nest("/bookings", bookings_routers)
}
