//! 外部の cron から呼び出される一括処理（スイープ）。
//!
//! どちらのスイープも部屋・予約ごとにエラーを捕捉してレポートに積み、
//! 残りの処理を継続する。永続化済みの状態から毎回判定し直すため、
//! 途中で中断しても次回の実行でそのまま再開できる。

pub mod invoice;
pub mod service_cycle;

#[cfg(test)]
mod tests;

pub use invoice::{GeneratedInvoice, InvoiceReport, InvoiceScheduler};
pub use service_cycle::{ServiceCycleReport, ServiceCycleScheduler};

use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct SweepError {
    pub id: String,
    pub error: String,
}
