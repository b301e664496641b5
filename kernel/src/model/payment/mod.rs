use crate::model::id::{BookingId, PaymentId, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use strum::{AsRefStr, Display, EnumString};

pub mod event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    Rent,
    Deposit,
    Fee,
    Fine,
    Refund,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Partial,
    // 旧データの PAID も完了扱いで読み込む
    #[strum(to_string = "COMPLETED", serialize = "PAID")]
    Completed,
    Rejected,
    Refunded,
}

impl PaymentStatus {
    /// 未払い残高に含めるステータス
    pub fn is_outstanding(self) -> bool {
        matches!(self, PaymentStatus::Pending | PaymentStatus::Partial)
    }
}

#[derive(Debug, Clone)]
pub struct Payment {
    pub payment_id: PaymentId,
    pub user_id: UserId,
    pub booking_id: Option<BookingId>,
    pub amount: Decimal,
    pub payment_type: PaymentType,
    pub status: PaymentStatus,
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
