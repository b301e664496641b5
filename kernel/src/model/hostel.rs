use crate::model::{id::HostelId, service_log::ServiceKind};

#[derive(Debug, Clone)]
pub struct Hostel {
    pub hostel_id: HostelId,
    pub name: String,
    pub cleaning_interval_hours: Option<i32>,
    pub laundry_interval_hours: Option<i32>,
}

impl Hostel {
    pub fn default_interval(&self, kind: ServiceKind) -> Option<i32> {
        match kind {
            ServiceKind::Cleaning => self.cleaning_interval_hours,
            ServiceKind::Laundry => self.laundry_interval_hours,
        }
    }
}
