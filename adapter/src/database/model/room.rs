use crate::database::parse_enum;
use kernel::model::{
    id::{HostelId, RoomId},
    room::Room,
};
use rust_decimal::Decimal;
use shared::error::AppError;
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct RoomRow {
    pub room_id: RoomId,
    pub hostel_id: HostelId,
    pub room_number: String,
    pub monthly_rent: Decimal,
    pub status: String,
    pub cleaning_interval_hours: Option<i32>,
    pub laundry_interval_hours: Option<i32>,
    pub last_cleaning_at: Option<DateTime<Utc>>,
    pub last_laundry_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<RoomRow> for Room {
    type Error = AppError;

    fn try_from(value: RoomRow) -> Result<Self, Self::Error> {
        let RoomRow {
            room_id,
            hostel_id,
            room_number,
            monthly_rent,
            status,
            cleaning_interval_hours,
            laundry_interval_hours,
            last_cleaning_at,
            last_laundry_at,
            created_at,
        } = value;
        Ok(Room {
            room_id,
            hostel_id,
            room_number,
            monthly_rent,
            status: parse_enum("room status", &status)?,
            cleaning_interval_hours,
            laundry_interval_hours,
            last_cleaning_at,
            last_laundry_at,
            created_at,
        })
    }
}
