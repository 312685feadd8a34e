//! Site HTTP clients for autosign
//!
//! One module per remote service. Clients own their session state and know
//! nothing about reporting or notification; interpretation of loosely
//! structured replies is kept in pure functions so it stays testable
//! without a network.

pub mod winmoes;
pub mod y3lt;

pub use winmoes::{render_reply, CheckinReply, WinmoesClient, MSG_ALREADY_SIGNED, WINMOES_BASE_URL};
pub use y3lt::{Y3ltClient, Y3LT_BASE_URL};
