use chrono::{DateTime, Datelike, NaiveDate, Utc};

pub const RENT_DUE_DAY: u32 = 10;

/// 実行日が属する暦月（UTC）。`[start, end)` の半開区間
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillingPeriod {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub due_date: NaiveDate,
}

impl BillingPeriod {
    pub fn containing(at: DateTime<Utc>) -> Option<Self> {
        let (year, month) = (at.year(), at.month());
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
        Some(Self {
            start: first.and_hms_opt(0, 0, 0)?.and_utc(),
            end: next_first.and_hms_opt(0, 0, 0)?.and_utc(),
            due_date: first.with_day(RENT_DUE_DAY)?,
        })
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }

    /// 例: "March 2024"
    pub fn label(&self) -> String {
        self.start.format("%B %Y").to_string()
    }
}
