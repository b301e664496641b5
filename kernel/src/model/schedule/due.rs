use crate::model::{room::Room, service_log::ServiceKind};
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceDue {
    /// 間隔を満たした。時間はいずれも切り捨て
    Due {
        elapsed_hours: i64,
        overdue_hours: i64,
    },
    NotDue,
    /// 入居者のいない部屋のランドリー
    Ineligible,
}

impl ServiceDue {
    pub fn is_due(&self) -> bool {
        matches!(self, ServiceDue::Due { .. })
    }
}

/// `now` 時点で部屋にサービスが必要かを判定する。
///
/// 最終実施日時（なければ部屋の作成日時）からの経過時間が
/// `interval_hours` 以上なら対象になる。ランドリーは有効な予約が
/// ある部屋 (`occupied`) のみが対象で、清掃は空室でも対象になる。
pub fn check_due(
    room: &Room,
    kind: ServiceKind,
    interval_hours: i32,
    now: DateTime<Utc>,
    occupied: bool,
) -> ServiceDue {
    if kind == ServiceKind::Laundry && !occupied {
        return ServiceDue::Ineligible;
    }

    let elapsed = now.signed_duration_since(room.service_baseline(kind));
    let interval = Duration::hours(i64::from(interval_hours));
    if elapsed < interval {
        return ServiceDue::NotDue;
    }

    ServiceDue::Due {
        elapsed_hours: elapsed.num_hours(),
        overdue_hours: (elapsed - interval).num_hours(),
    }
}
