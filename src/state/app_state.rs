//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, warn};

use super::{Command, CommandOutcome, Control, TimerSnapshot};
use crate::error::DriverError;

/// Application state shared by the HTTP handlers
#[derive(Debug)]
pub struct AppState {
    /// Channel to the countdown driver task
    pub controls: mpsc::Sender<Control>,
    /// Latest snapshot published by the driver
    pub snapshots: watch::Receiver<TimerSnapshot>,
    /// Latest text announced for assistive technology
    pub announcements: watch::Receiver<String>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl AppState {
    /// Create a new AppState around a running driver
    pub fn new(
        port: u16,
        host: String,
        controls: mpsc::Sender<Control>,
        snapshots: watch::Receiver<TimerSnapshot>,
        announcements: watch::Receiver<String>,
    ) -> Self {
        Self {
            controls,
            snapshots,
            announcements,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
        }
    }

    /// Send a command to the driver and wait for its outcome
    pub async fn send(&self, command: Command) -> Result<CommandOutcome, DriverError> {
        let action = command.action();
        let (reply, outcome) = oneshot::channel();

        debug!("Sending {:?} to countdown driver", command);
        self.controls
            .send(Control { command, reply })
            .await
            .map_err(|_| DriverError::Closed)?;
        let outcome = outcome.await.map_err(|_| DriverError::NoReply)?;

        if outcome.applied {
            self.record_action(action);
        }
        Ok(outcome)
    }

    /// Get the latest published snapshot
    pub fn get_snapshot(&self) -> TimerSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Get the latest announcement
    pub fn get_announcement(&self) -> String {
        self.announcements.borrow().clone()
    }

    fn record_action(&self, action: &str) {
        match self.last_action.lock() {
            Ok(mut last_action) => *last_action = Some(action.to_string()),
            Err(e) => warn!("Failed to lock last action: {}", e),
        }
        match self.last_action_time.lock() {
            Ok(mut last_time) => *last_time = Some(Utc::now()),
            Err(e) => warn!("Failed to lock last action time: {}", e),
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
