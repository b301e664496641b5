use crate::model::{
    id::{BookingId, UserId},
    payment::{event::CreatePayment, Payment},
    schedule::BillingPeriod,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::error::AppResult;

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn create(&self, event: CreatePayment) -> AppResult<Payment>;
    // 指定期間内に作成された家賃 (RENT) の請求があるか
    async fn rent_exists_in_period(
        &self,
        booking_id: BookingId,
        period: &BillingPeriod,
    ) -> AppResult<bool>;
    // PENDING / PARTIAL の支払い金額の合計
    async fn outstanding_total(&self, user_id: UserId) -> AppResult<Decimal>;
}
