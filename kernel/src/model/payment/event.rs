use crate::model::{
    id::{BookingId, UserId},
    payment::{PaymentStatus, PaymentType},
};
use chrono::{DateTime, NaiveDate, Utc};
use derive_new::new;
use rust_decimal::Decimal;

#[derive(Debug, new)]
pub struct CreatePayment {
    pub user_id: UserId,
    pub booking_id: Option<BookingId>,
    pub amount: Decimal,
    pub payment_type: PaymentType,
    pub status: PaymentStatus,
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
