use garde::Validate;
use kernel::model::id::RoomId;
use serde::Deserialize;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TransferRoomRequest {
    #[garde(skip)]
    pub room_id: RoomId,
}
