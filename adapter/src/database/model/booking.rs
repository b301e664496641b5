use crate::database::parse_enum;
use kernel::model::{
    booking::{BillableBooking, BillingRoom, Booking},
    id::{BookingId, RoomId, UserId},
    user::Resident,
};
use rust_decimal::Decimal;
use shared::error::AppError;

#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub room_id: Option<RoomId>,
    pub user_id: UserId,
    pub status: String,
}

impl TryFrom<BookingRow> for Booking {
    type Error = AppError;

    fn try_from(value: BookingRow) -> Result<Self, Self::Error> {
        let BookingRow {
            booking_id,
            room_id,
            user_id,
            status,
        } = value;
        Ok(Booking {
            booking_id,
            room_id,
            user_id,
            status: parse_enum("booking status", &status)?,
        })
    }
}

// 部屋・寮は LEFT JOIN で取得するため、部屋が削除済みなら各列が NULL になる
#[derive(sqlx::FromRow)]
pub struct BillableBookingRow {
    pub booking_id: BookingId,
    pub status: String,
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub room_id: Option<RoomId>,
    pub room_number: Option<String>,
    pub monthly_rent: Option<Decimal>,
    pub hostel_name: Option<String>,
}

impl TryFrom<BillableBookingRow> for BillableBooking {
    type Error = AppError;

    fn try_from(value: BillableBookingRow) -> Result<Self, Self::Error> {
        let BillableBookingRow {
            booking_id,
            status,
            user_id,
            user_name,
            email,
            room_id,
            room_number,
            monthly_rent,
            hostel_name,
        } = value;
        let room = match (room_id, room_number, monthly_rent, hostel_name) {
            (Some(room_id), Some(room_number), Some(monthly_rent), Some(hostel_name)) => {
                Some(BillingRoom {
                    room_id,
                    room_number,
                    hostel_name,
                    monthly_rent,
                })
            }
            _ => None,
        };
        Ok(BillableBooking {
            booking_id,
            status: parse_enum("booking status", &status)?,
            resident: Resident {
                user_id,
                user_name,
                email,
            },
            room,
        })
    }
}
