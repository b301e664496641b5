use crate::model::{
    id::{BookingId, RoomId, UserId},
    user::Resident,
};
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use strum::{AsRefStr, Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
    Completed,
}

impl BookingStatus {
    /// 請求・ランドリーの対象となる「有効な」予約かどうか
    pub fn is_active(self) -> bool {
        matches!(self, BookingStatus::Confirmed | BookingStatus::CheckedIn)
    }

    pub fn active() -> [BookingStatus; 2] {
        [BookingStatus::Confirmed, BookingStatus::CheckedIn]
    }
}

#[derive(Debug, Clone)]
pub struct Booking {
    pub booking_id: BookingId,
    pub room_id: Option<RoomId>,
    pub user_id: UserId,
    pub status: BookingStatus,
}

impl Booking {
    /// 部屋を移動できるのは有効な予約のみ。PENDING も不可
    pub fn ensure_transferable(&self, to_room_id: RoomId) -> AppResult<()> {
        if !self.status.is_active() {
            return Err(AppError::UnprocessableEntity(format!(
                "予約（{}）は部屋を移動できません（{}）",
                self.booking_id, self.status
            )));
        }
        if self.room_id == Some(to_room_id) {
            return Err(AppError::UnprocessableEntity(format!(
                "予約（{}）はすでに部屋（{}）に割り当てられています。",
                self.booking_id, to_room_id
            )));
        }
        Ok(())
    }
}

// 月次請求に必要な情報をまとめた予約
// 部屋が削除されている場合 room は None になる
#[derive(Debug, Clone)]
pub struct BillableBooking {
    pub booking_id: BookingId,
    pub status: BookingStatus,
    pub resident: Resident,
    pub room: Option<BillingRoom>,
}

#[derive(Debug, Clone)]
pub struct BillingRoom {
    pub room_id: RoomId,
    pub room_number: String,
    pub hostel_name: String,
    pub monthly_rent: Decimal,
}

impl BillingRoom {
    pub fn unit_label(&self) -> String {
        format!("Room {}, {}", self.room_number, self.hostel_name)
    }
}
