//! Concrete collaborators used by the binary
//!
//! This module contains the tokio-backed scheduler, a terminal renderer and
//! a watch-channel accessibility sink.

pub mod announce;
pub mod scheduler;
pub mod terminal;

// Re-export main types
pub use announce::AnnounceChannel;
pub use scheduler::TokioScheduler;
pub use terminal::TerminalRenderer;
