use crate::model::id::{HostelId, RoomId, ServiceLogId};
use chrono::{DateTime, Utc};
use derive_new::new;
use strum::{AsRefStr, Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceKind {
    Cleaning,
    Laundry,
}

impl ServiceKind {
    pub const fn default_interval_hours(self) -> i32 {
        match self {
            ServiceKind::Cleaning => 24,
            ServiceKind::Laundry => 48,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceKind::Cleaning => "cleaning",
            ServiceKind::Laundry => "laundry",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceLogStatus {
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone)]
pub struct ServiceLog {
    pub service_log_id: ServiceLogId,
    pub kind: ServiceKind,
    pub room_id: RoomId,
    pub hostel_id: HostelId,
    pub status: ServiceLogStatus,
    pub performed_at: DateTime<Utc>,
    pub notes: String,
}

// ログの作成と部屋の最終実施日時の更新をまとめたイベント
#[derive(Debug, new)]
pub struct RecordService {
    pub kind: ServiceKind,
    pub room_id: RoomId,
    pub hostel_id: HostelId,
    pub performed_at: DateTime<Utc>,
    pub notes: String,
}
