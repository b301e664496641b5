use crate::model::{
    id::{HostelId, RoomId},
    service_log::ServiceKind,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use strum::{AsRefStr, Display, EnumString};

pub mod event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
}

#[derive(Debug, Clone)]
pub struct Room {
    pub room_id: RoomId,
    pub hostel_id: HostelId,
    pub room_number: String,
    pub monthly_rent: Decimal,
    pub status: RoomStatus,
    pub cleaning_interval_hours: Option<i32>,
    pub laundry_interval_hours: Option<i32>,
    pub last_cleaning_at: Option<DateTime<Utc>>,
    pub last_laundry_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Room {
    pub fn interval_override(&self, kind: ServiceKind) -> Option<i32> {
        match kind {
            ServiceKind::Cleaning => self.cleaning_interval_hours,
            ServiceKind::Laundry => self.laundry_interval_hours,
        }
    }

    pub fn last_serviced_at(&self, kind: ServiceKind) -> Option<DateTime<Utc>> {
        match kind {
            ServiceKind::Cleaning => self.last_cleaning_at,
            ServiceKind::Laundry => self.last_laundry_at,
        }
    }

    // 一度もサービスされていない部屋は作成日時を起点にする
    pub fn service_baseline(&self, kind: ServiceKind) -> DateTime<Utc> {
        self.last_serviced_at(kind).unwrap_or(self.created_at)
    }

    pub fn mark_serviced(&mut self, kind: ServiceKind, at: DateTime<Utc>) {
        match kind {
            ServiceKind::Cleaning => self.last_cleaning_at = Some(at),
            ServiceKind::Laundry => self.last_laundry_at = Some(at),
        }
    }
}
