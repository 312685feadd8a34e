//! Notification sinks for autosign
//!
//! A sink delivers the run's text report to the operator. Sinks are passed
//! into the flows explicitly; a run without a configured sink gets the null
//! sink rather than a missing one.

pub mod base;
pub mod pushservice;

pub use base::{NoopNotifier, Notifier, NotifyError, Result};
pub use pushservice::{PushServiceClient, DEFAULT_PUSH_URL};
