use crate::database::{model::hostel::HostelRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::{model::hostel::Hostel, repository::hostel::HostelRepository};
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct HostelRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl HostelRepository for HostelRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Hostel>> {
        sqlx::query_as::<_, HostelRow>(
            r#"
                SELECT
                hostel_id,
                name,
                cleaning_interval_hours,
                laundry_interval_hours
                FROM hostels
                ORDER BY created_at ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Hostel::from).collect())
        .map_err(AppError::SpecificOperationError)
    }
}
