//! State management module
//! 
//! This module contains the shared application state, the control commands
//! and the snapshots published by the countdown driver.

pub mod app_state;
pub mod command;
pub mod snapshot;

// Re-export main types
pub use app_state::AppState;
pub use command::{Command, CommandOutcome, Control};
pub use snapshot::TimerSnapshot;
