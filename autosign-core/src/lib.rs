//! Core types for autosign
//!
//! This crate provides the error taxonomy, the env-backed configuration
//! schema and the logging setup shared by the autosign flows.

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
