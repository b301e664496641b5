use crate::model::id::{RequestId, RoomId, UserId};
use chrono::{DateTime, Utc};
use strum::{AsRefStr, Display, EnumString};

pub mod event;

// 修繕依頼と外泊（休暇）届を区別する種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestType {
    Maintenance,
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Open,
    InProgress,
    Resolved,
    Rejected,
}

#[derive(Debug, Clone)]
pub struct Request {
    pub request_id: RequestId,
    pub request_type: RequestType,
    pub requested_by: UserId,
    pub room_id: Option<RoomId>,
    pub title: String,
    pub description: String,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct RequestListOptions {
    pub request_type: Option<RequestType>,
}
