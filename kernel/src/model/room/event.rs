use crate::model::id::{BookingId, RoomId};
use derive_new::new;

#[derive(Debug, new)]
pub struct TransferRoom {
    pub booking_id: BookingId,
    pub to_room_id: RoomId,
}
