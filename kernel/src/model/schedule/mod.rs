//! 清掃・ランドリーの周期判定と月次請求期間の計算。
//!
//! ここにある関数はすべて純粋関数で、永続化層には依存しない。

pub mod due;
pub mod interval;
pub mod period;

pub use due::{check_due, ServiceDue};
pub use interval::IntervalPolicy;
pub use period::BillingPeriod;
