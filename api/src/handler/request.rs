use crate::model::request::{
    CreateRequestRequest, CreatedRequestResponse, RequestListQuery, RequestsResponse,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn register_request(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateRequestRequest>,
) -> AppResult<(StatusCode, Json<CreatedRequestResponse>)> {
    req.validate(&())?;

    registry
        .request_repository()
        .create(req.into())
        .await
        .map(|request_id| (StatusCode::CREATED, Json(CreatedRequestResponse { request_id })))
}

pub async fn show_request_list(
    Query(query): Query<RequestListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RequestsResponse>> {
    registry
        .request_repository()
        .find_all(query.into())
        .await
        .map(RequestsResponse::from)
        .map(Json)
}
