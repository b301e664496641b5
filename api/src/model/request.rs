use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::{RequestId, RoomId, UserId},
    request::{event::CreateRequest, Request, RequestListOptions, RequestType},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestTypeName {
    Maintenance,
    Leave,
}

impl From<RequestType> for RequestTypeName {
    fn from(value: RequestType) -> Self {
        match value {
            RequestType::Maintenance => Self::Maintenance,
            RequestType::Leave => Self::Leave,
        }
    }
}

impl From<RequestTypeName> for RequestType {
    fn from(value: RequestTypeName) -> Self {
        match value {
            RequestTypeName::Maintenance => Self::Maintenance,
            RequestTypeName::Leave => Self::Leave,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestRequest {
    #[garde(skip)]
    pub request_type: RequestTypeName,
    #[garde(skip)]
    pub requested_by: UserId,
    #[garde(skip)]
    pub room_id: Option<RoomId>,
    #[garde(length(min = 1, max = 255))]
    pub title: String,
    #[garde(length(min = 1))]
    pub description: String,
}

impl From<CreateRequestRequest> for CreateRequest {
    fn from(value: CreateRequestRequest) -> Self {
        let CreateRequestRequest {
            request_type,
            requested_by,
            room_id,
            title,
            description,
        } = value;
        CreateRequest::new(request_type.into(), requested_by, room_id, title, description)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedRequestResponse {
    pub request_id: RequestId,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestListQuery {
    pub request_type: Option<RequestTypeName>,
}

impl From<RequestListQuery> for RequestListOptions {
    fn from(value: RequestListQuery) -> Self {
        Self {
            request_type: value.request_type.map(RequestType::from),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestsResponse {
    pub items: Vec<RequestResponse>,
}

impl From<Vec<Request>> for RequestsResponse {
    fn from(value: Vec<Request>) -> Self {
        Self {
            items: value.into_iter().map(RequestResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestResponse {
    pub request_id: RequestId,
    pub request_type: RequestTypeName,
    pub requested_by: UserId,
    pub room_id: Option<RoomId>,
    pub title: String,
    pub description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Request> for RequestResponse {
    fn from(value: Request) -> Self {
        let Request {
            request_id,
            request_type,
            requested_by,
            room_id,
            title,
            description,
            status,
            created_at,
        } = value;
        Self {
            request_id,
            request_type: request_type.into(),
            requested_by,
            room_id,
            title,
            description,
            status: status.to_string(),
            created_at,
        }
    }
}
