use crate::database::parse_enum;
use kernel::model::{
    id::{BookingId, PaymentId, UserId},
    payment::Payment,
};
use rust_decimal::Decimal;
use shared::error::AppError;
use sqlx::types::chrono::{DateTime, NaiveDate, Utc};

#[derive(sqlx::FromRow)]
pub struct PaymentRow {
    pub payment_id: PaymentId,
    pub user_id: UserId,
    pub booking_id: Option<BookingId>,
    pub amount: Decimal,
    pub payment_type: String,
    pub status: String,
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<PaymentRow> for Payment {
    type Error = AppError;

    fn try_from(value: PaymentRow) -> Result<Self, Self::Error> {
        let PaymentRow {
            payment_id,
            user_id,
            booking_id,
            amount,
            payment_type,
            status,
            due_date,
            notes,
            created_at,
        } = value;
        Ok(Payment {
            payment_id,
            user_id,
            booking_id,
            amount,
            payment_type: parse_enum("payment type", &payment_type)?,
            status: parse_enum("payment status", &status)?,
            due_date,
            notes,
            created_at,
        })
    }
}
