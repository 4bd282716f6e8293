//! Countdown core
//!
//! Time bookkeeping (`TimerClock`), the time-to-angle and time-to-label
//! model (`RenderFrame`) and the `Countdown` handle that ties them to the
//! collaborator ports.

pub mod clock;
pub mod countdown;
pub mod duration;
pub mod frame;
pub mod geometry;
pub mod status;

// Re-export main types
pub use clock::{AddPolicy, TimerClock};
pub use countdown::{Callback, Countdown};
pub use duration::{coerce_units, Count, TimerDuration, INFINITY_GLYPH, UNIT_MS};
pub use frame::{sweep_angle, RenderFrame, FULL_CIRCLE_END, FULL_SWEEP, START_ANGLE};
pub use geometry::Geometry;
pub use status::Status;
