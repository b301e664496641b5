use crate::database::{model::request::RequestRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::RequestId,
        request::{event::CreateRequest, Request, RequestListOptions, RequestStatus},
    },
    repository::request::RequestRepository,
};
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct RequestRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl RequestRepository for RequestRepositoryImpl {
    async fn create(&self, event: CreateRequest) -> AppResult<RequestId> {
        let request_id = RequestId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO requests
                (request_id, request_type, user_id, room_id, title, description, status)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(request_id)
        .bind(event.request_type.as_ref())
        .bind(event.requested_by)
        .bind(event.room_id)
        .bind(event.title)
        .bind(event.description)
        .bind(RequestStatus::Open.as_ref())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No request record has been created".into(),
            ));
        }

        Ok(request_id)
    }

    async fn find_all(&self, options: RequestListOptions) -> AppResult<Vec<Request>> {
        let request_type = options.request_type.map(|t| t.as_ref().to_string());
        sqlx::query_as::<_, RequestRow>(
            r#"
                SELECT
                request_id,
                request_type,
                user_id,
                room_id,
                title,
                description,
                status,
                created_at
                FROM requests
                WHERE ($1::TEXT IS NULL OR request_type = $1)
                ORDER BY created_at DESC
            "#,
        )
        .bind(request_type)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .into_iter()
        .map(Request::try_from)
        .collect()
    }
}
