//! Countdown status

use std::fmt;

use serde::{Deserialize, Serialize};

/// Derived status of a countdown. Exactly one holds at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Stopped,
    Started,
    Paused,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Stopped => "stopped",
            Status::Started => "started",
            Status::Paused => "paused",
        }
    }

    /// Derives the status from the paused snapshot and the tick handle.
    ///
    /// A paused snapshot wins over an armed tick; the two are never both set.
    pub fn derive(paused: bool, armed: bool) -> Self {
        if paused {
            Status::Paused
        } else if armed {
            Status::Started
        } else {
            Status::Stopped
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
