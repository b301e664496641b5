use crate::model::{
    id::{RoomId, UserId},
    request::RequestType,
};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateRequest {
    pub request_type: RequestType,
    pub requested_by: UserId,
    pub room_id: Option<RoomId>,
    pub title: String,
    pub description: String,
}
