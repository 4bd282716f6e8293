//! Control commands sent to the countdown driver

use tokio::sync::oneshot;

use super::TimerSnapshot;

/// A control operation on the countdown
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Start,
    Stop,
    Pause,
    Resume,
    AddSeconds(i64),
    ExtendTimer(i64),
    SetRadius(f64),
}

impl Command {
    /// Short name used for logging and last-action tracking
    pub fn action(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Stop => "stop",
            Command::Pause => "pause",
            Command::Resume => "resume",
            Command::AddSeconds(_) => "add",
            Command::ExtendTimer(_) => "extend",
            Command::SetRadius(_) => "radius",
        }
    }
}

/// Result of applying a command
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    /// False when the command did not apply to the current status
    pub applied: bool,
    pub snapshot: TimerSnapshot,
}

/// A command paired with the channel its outcome is sent back on
#[derive(Debug)]
pub struct Control {
    pub command: Command,
    pub reply: oneshot::Sender<CommandOutcome>,
}
