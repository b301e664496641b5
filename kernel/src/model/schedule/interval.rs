use crate::model::{hostel::Hostel, room::Room, service_log::ServiceKind};

/// 部屋ごとに実際に適用される清掃・ランドリーの間隔（時間）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalPolicy {
    pub cleaning_hours: i32,
    pub laundry_hours: i32,
}

impl IntervalPolicy {
    /// 部屋の上書き設定 → 寮のデフォルト → 全体デフォルトの順で解決する。
    /// 0 以下の値は未設定として扱うため、結果は常に正の値になる。
    pub fn resolve(room: &Room, hostel: &Hostel) -> Self {
        Self {
            cleaning_hours: resolve_one(room, hostel, ServiceKind::Cleaning),
            laundry_hours: resolve_one(room, hostel, ServiceKind::Laundry),
        }
    }

    pub fn hours(&self, kind: ServiceKind) -> i32 {
        match kind {
            ServiceKind::Cleaning => self.cleaning_hours,
            ServiceKind::Laundry => self.laundry_hours,
        }
    }
}

fn resolve_one(room: &Room, hostel: &Hostel, kind: ServiceKind) -> i32 {
    room.interval_override(kind)
        .filter(|h| *h > 0)
        .or_else(|| hostel.default_interval(kind).filter(|h| *h > 0))
        .unwrap_or_else(|| kind.default_interval_hours())
}
