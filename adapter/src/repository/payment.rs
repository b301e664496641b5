use crate::database::{model::payment::PaymentRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::{BookingId, PaymentId, UserId},
        payment::{event::CreatePayment, Payment, PaymentStatus, PaymentType},
        schedule::BillingPeriod,
    },
    repository::payment::PaymentRepository,
};
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct PaymentRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl PaymentRepository for PaymentRepositoryImpl {
    async fn create(&self, event: CreatePayment) -> AppResult<Payment> {
        sqlx::query_as::<_, PaymentRow>(
            r#"
                INSERT INTO payments
                (payment_id, user_id, booking_id, amount, payment_type,
                status, due_date, notes, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                RETURNING
                payment_id, user_id, booking_id, amount, payment_type,
                status, due_date, notes, created_at
            "#,
        )
        .bind(PaymentId::new())
        .bind(event.user_id)
        .bind(event.booking_id)
        .bind(event.amount)
        .bind(event.payment_type.as_ref())
        .bind(event.status.as_ref())
        .bind(event.due_date)
        .bind(event.notes)
        .bind(event.created_at)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .try_into()
    }

    async fn rent_exists_in_period(
        &self,
        booking_id: BookingId,
        period: &BillingPeriod,
    ) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
                SELECT EXISTS (
                    SELECT 1 FROM payments
                    WHERE booking_id = $1
                      AND payment_type = $2
                      AND created_at >= $3
                      AND created_at < $4
                )
            "#,
        )
        .bind(booking_id)
        .bind(PaymentType::Rent.as_ref())
        .bind(period.start)
        .bind(period.end)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }

    async fn outstanding_total(&self, user_id: UserId) -> AppResult<Decimal> {
        let statuses: Vec<String> = [PaymentStatus::Pending, PaymentStatus::Partial]
            .iter()
            .map(|s| s.as_ref().to_string())
            .collect();
        sqlx::query_scalar::<_, Decimal>(
            r#"
                SELECT COALESCE(SUM(amount), 0)
                FROM payments
                WHERE user_id = $1 AND status = ANY($2)
            "#,
        )
        .bind(user_id)
        .bind(statuses)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }
}
