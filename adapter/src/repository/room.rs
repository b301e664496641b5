use crate::database::{model::room::RoomRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::{HostelId, RoomId},
        room::Room,
    },
    repository::room::RoomRepository,
};
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct RoomRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl RoomRepository for RoomRepositoryImpl {
    async fn find_by_hostel_id(&self, hostel_id: HostelId) -> AppResult<Vec<Room>> {
        sqlx::query_as::<_, RoomRow>(
            r#"
                SELECT
                room_id,
                hostel_id,
                room_number,
                monthly_rent,
                status,
                cleaning_interval_hours,
                laundry_interval_hours,
                last_cleaning_at,
                last_laundry_at,
                created_at
                FROM rooms
                WHERE hostel_id = $1
                ORDER BY room_number ASC
            "#,
        )
        .bind(hostel_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .into_iter()
        .map(Room::try_from)
        .collect()
    }

    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, RoomRow>(
            r#"
                SELECT
                room_id,
                hostel_id,
                room_number,
                monthly_rent,
                status,
                cleaning_interval_hours,
                laundry_interval_hours,
                last_cleaning_at,
                last_laundry_at,
                created_at
                FROM rooms
                WHERE room_id = $1
            "#,
        )
        .bind(room_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(Room::try_from)
        .transpose()
    }
}
