use crate::database::{
    model::booking::{BillableBookingRow, BookingRow},
    parse_enum, ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        booking::{BillableBooking, Booking, BookingStatus},
        id::{BookingId, RoomId},
        room::{event::TransferRoom, RoomStatus},
    },
    repository::booking::BookingRepository,
};
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

fn active_statuses() -> Vec<String> {
    BookingStatus::active()
        .iter()
        .map(|s| s.as_ref().to_string())
        .collect()
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, BookingRow>(
            r#"
                SELECT booking_id, room_id, user_id, status
                FROM bookings
                WHERE booking_id = $1
            "#,
        )
        .bind(booking_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(Booking::try_from)
        .transpose()
    }

    async fn find_active_billable(&self) -> AppResult<Vec<BillableBooking>> {
        // 部屋が削除された予約も取りこぼさないよう rooms / hostels は LEFT JOIN にする
        sqlx::query_as::<_, BillableBookingRow>(
            r#"
                SELECT
                b.booking_id,
                b.status,
                u.user_id,
                u.user_name,
                u.email,
                r.room_id,
                r.room_number,
                r.monthly_rent,
                h.name AS hostel_name
                FROM bookings AS b
                INNER JOIN users AS u ON b.user_id = u.user_id
                LEFT JOIN rooms AS r ON b.room_id = r.room_id
                LEFT JOIN hostels AS h ON r.hostel_id = h.hostel_id
                WHERE b.status = ANY($1)
                ORDER BY b.created_at ASC
            "#,
        )
        .bind(active_statuses())
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .into_iter()
        .map(BillableBooking::try_from)
        .collect()
    }

    async fn has_active_in_room(&self, room_id: RoomId) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
                SELECT EXISTS (
                    SELECT 1 FROM bookings
                    WHERE room_id = $1 AND status = ANY($2)
                )
            "#,
        )
        .bind(room_id)
        .bind(active_statuses())
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }

    async fn transfer_room(&self, event: TransferRoom) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        self.set_transaction_serializable(&mut tx).await?;

        // 事前のチェックとして、以下を調べる。
        // - 指定の予約が存在し、有効 (CONFIRMED / CHECKED_IN) か
        // - 移動先の部屋が存在し、空室 (AVAILABLE) か
        let from_room_id = {
            let booking = sqlx::query_as::<_, BookingRow>(
                r#"
                    SELECT booking_id, room_id, user_id, status
                    FROM bookings
                    WHERE booking_id = $1
                    FOR UPDATE
                "#,
            )
            .bind(event.booking_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?
            .map(Booking::try_from)
            .transpose()?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!(
                    "予約（{}）が見つかりませんでした。",
                    event.booking_id
                ))
            })?;

            booking.ensure_transferable(event.to_room_id)?;

            let status: Option<String> = sqlx::query_scalar(
                r#"
                    SELECT status FROM rooms
                    WHERE room_id = $1
                    FOR UPDATE
                "#,
            )
            .bind(event.to_room_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            let status: RoomStatus = match status {
                None => {
                    return Err(AppError::EntityNotFound(format!(
                        "部屋（{}）が見つかりませんでした。",
                        event.to_room_id
                    )))
                }
                Some(s) => parse_enum("room status", &s)?,
            };
            if status != RoomStatus::Available {
                return Err(AppError::UnprocessableEntity(format!(
                    "部屋（{}）は空室ではありません（{}）",
                    event.to_room_id, status
                )));
            }

            booking.room_id
        };

        let res = sqlx::query(
            r#"
                UPDATE bookings SET room_id = $2
                WHERE booking_id = $1
            "#,
        )
        .bind(event.booking_id)
        .bind(event.to_room_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking record has been updated".into(),
            ));
        }

        // 旧部屋を参照する有効な予約が他になければ空室に戻す
        if let Some(from_room_id) = from_room_id {
            sqlx::query(
                r#"
                    UPDATE rooms SET status = $2
                    WHERE room_id = $1
                      AND status = $3
                      AND NOT EXISTS (
                          SELECT 1 FROM bookings
                          WHERE room_id = $1 AND status = ANY($4)
                      )
                "#,
            )
            .bind(from_room_id)
            .bind(RoomStatus::Available.as_ref())
            .bind(RoomStatus::Occupied.as_ref())
            .bind(active_statuses())
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        }

        let res = sqlx::query(
            r#"
                UPDATE rooms SET status = $2
                WHERE room_id = $1
            "#,
        )
        .bind(event.to_room_id)
        .bind(RoomStatus::Occupied.as_ref())
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No room record has been updated".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        tracing::info!(
            booking_id = %event.booking_id,
            to_room_id = %event.to_room_id,
            "booking transferred"
        );
        Ok(())
    }
}

impl BookingRepositoryImpl {
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }
}
