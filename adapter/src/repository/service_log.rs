use crate::database::ConnectionPool;
use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::ServiceLogId,
        service_log::{RecordService, ServiceKind, ServiceLog, ServiceLogStatus},
    },
    repository::service_log::ServiceLogRepository,
};
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct ServiceLogRepositoryImpl {
    db: ConnectionPool,
}

// 種別ごとの (ログ INSERT 文, 部屋の最終実施日時 UPDATE 文)
fn statements(kind: ServiceKind) -> (&'static str, &'static str) {
    match kind {
        ServiceKind::Cleaning => (
            r#"
                INSERT INTO cleaning_logs
                (cleaning_log_id, room_id, hostel_id, status, performed_at, notes)
                VALUES ($1, $2, $3, $4, $5, $6)
            "#,
            r#"
                UPDATE rooms SET last_cleaning_at = $2
                WHERE room_id = $1
            "#,
        ),
        ServiceKind::Laundry => (
            r#"
                INSERT INTO laundry_logs
                (laundry_log_id, room_id, hostel_id, status, received_at, notes)
                VALUES ($1, $2, $3, $4, $5, $6)
            "#,
            r#"
                UPDATE rooms SET last_laundry_at = $2
                WHERE room_id = $1
            "#,
        ),
    }
}

#[async_trait]
impl ServiceLogRepository for ServiceLogRepositoryImpl {
    async fn record(&self, event: RecordService) -> AppResult<ServiceLog> {
        let (insert_log, touch_room) = statements(event.kind);
        let service_log_id = ServiceLogId::new();

        let mut tx = self.db.begin().await?;

        sqlx::query(insert_log)
            .bind(service_log_id)
            .bind(event.room_id)
            .bind(event.hostel_id)
            .bind(ServiceLogStatus::Pending.as_ref())
            .bind(event.performed_at)
            .bind(&event.notes)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        let res = sqlx::query(touch_room)
            .bind(event.room_id)
            .bind(event.performed_at)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(format!(
                "room {} has not been updated",
                event.room_id
            )));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        let RecordService {
            kind,
            room_id,
            hostel_id,
            performed_at,
            notes,
        } = event;
        Ok(ServiceLog {
            service_log_id,
            kind,
            room_id,
            hostel_id,
            status: ServiceLogStatus::Pending,
            performed_at,
            notes,
        })
    }
}
