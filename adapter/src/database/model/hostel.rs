use kernel::model::{hostel::Hostel, id::HostelId};

#[derive(sqlx::FromRow)]
pub struct HostelRow {
    pub hostel_id: HostelId,
    pub name: String,
    pub cleaning_interval_hours: Option<i32>,
    pub laundry_interval_hours: Option<i32>,
}

impl From<HostelRow> for Hostel {
    fn from(value: HostelRow) -> Self {
        let HostelRow {
            hostel_id,
            name,
            cleaning_interval_hours,
            laundry_interval_hours,
        } = value;
        Hostel {
            hostel_id,
            name,
            cleaning_interval_hours,
            laundry_interval_hours,
        }
    }
}
