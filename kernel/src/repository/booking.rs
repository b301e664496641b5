use crate::model::{
    booking::{BillableBooking, Booking},
    id::{BookingId, RoomId},
    room::event::TransferRoom,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>>;
    // 有効な予約（CONFIRMED / CHECKED_IN）を請求情報付きで取得する
    async fn find_active_billable(&self) -> AppResult<Vec<BillableBooking>>;
    async fn has_active_in_room(&self, room_id: RoomId) -> AppResult<bool>;
    // 予約の部屋を移し替える。旧部屋・新部屋のステータス更新も同一トランザクションで行う
    async fn transfer_room(&self, event: TransferRoom) -> AppResult<()>;
}
