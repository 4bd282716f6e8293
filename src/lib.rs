//! RoundDown - a circular countdown timer
//! 
//! This library provides the countdown core (time bookkeeping, the
//! time-to-angle model and playback controls) behind renderer, accessibility
//! and scheduler ports, plus a tokio host that drives it and exposes the
//! controls over HTTP.

pub mod config;
pub mod countdown;
pub mod error;
pub mod ports;
pub mod host;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::{Config, CountdownConfig};
pub use countdown::{Countdown, Status, TimerDuration};
pub use state::AppState;
pub use api::create_router;
pub use utils::signals::shutdown_signal;
