use crate::database::parse_enum;
use kernel::model::{
    id::{RequestId, RoomId, UserId},
    request::Request,
};
use shared::error::AppError;
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct RequestRow {
    pub request_id: RequestId,
    pub request_type: String,
    pub user_id: UserId,
    pub room_id: Option<RoomId>,
    pub title: String,
    pub description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<RequestRow> for Request {
    type Error = AppError;

    fn try_from(value: RequestRow) -> Result<Self, Self::Error> {
        let RequestRow {
            request_id,
            request_type,
            user_id,
            room_id,
            title,
            description,
            status,
            created_at,
        } = value;
        Ok(Request {
            request_id,
            request_type: parse_enum("request type", &request_type)?,
            requested_by: user_id,
            room_id,
            title,
            description,
            status: parse_enum("request status", &status)?,
            created_at,
        })
    }
}
