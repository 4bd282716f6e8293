//! Collaborator contracts
//!
//! The countdown core reaches the outside world only through these traits:
//! a drawing surface, an accessibility sink and a scheduler that also owns
//! the notion of "now".

pub mod renderer;
pub mod scheduler;
#[cfg(test)]
pub mod fake;

pub use renderer::{AccessibilitySink, ArcShape, FontSpec, Renderer};
pub use scheduler::{Scheduler, TickToken};
