//! Check-in flows for autosign
//!
//! Two independent flows: the multi-account winmoes runner and the
//! single-account 3ylt runner. Both are strictly sequential; failures are
//! absorbed per account and surfaced as report text, never as process
//! faults.

pub mod report;
pub mod winmoes;
pub mod y3lt;

pub use report::Report;
pub use winmoes::{WinmoesRunner, MSG_LOGIN_FAILED, REPORT_TITLE};
pub use y3lt::Y3ltRunner;
