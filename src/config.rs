//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::{
    countdown::{AddPolicy, TimerDuration},
    error::ConfigError,
};

/// Cadence of a stepped countdown.
pub const STEPPED_INTERVAL: Duration = Duration::from_millis(1000);
/// Cadence of a smooth countdown, one frame.
pub const SMOOTH_INTERVAL: Duration = Duration::from_millis(16);

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "rounddown")]
#[command(about = "A circular countdown timer controlled over HTTP")]
#[command(version = "0.2.0")]
pub struct Config {
    /// Port to bind the control server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Countdown length in seconds
    #[arg(short, long, conflicts_with_all = ["duration_ms", "unbounded"])]
    pub seconds: Option<i64>,

    /// Countdown length in milliseconds
    #[arg(long, conflicts_with = "unbounded")]
    pub duration_ms: Option<i64>,

    /// Count down forever; completion never fires
    #[arg(long)]
    pub unbounded: bool,

    /// Do not start counting until told to over HTTP
    #[arg(long)]
    pub no_autostart: bool,

    /// Redraw every frame instead of once per second
    #[arg(long)]
    pub smooth: bool,

    /// Keep progress when adding time instead of starting over
    #[arg(long)]
    pub accumulate: bool,

    /// Unit words as "singular,plural"
    #[arg(long, default_value = "second,seconds", conflicts_with = "no_label")]
    pub label: String,

    /// Hide the unit word under the number
    #[arg(long)]
    pub no_label: bool,

    /// Radius of the arc
    #[arg(long, default_value = "15.5")]
    pub radius: f64,

    /// Exit once the countdown completes
    #[arg(long)]
    pub exit_on_complete: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Build the immutable countdown configuration
    pub fn countdown_config(&self) -> Result<CountdownConfig, ConfigError> {
        let duration = if self.unbounded {
            TimerDuration::Unbounded
        } else if let Some(seconds) = self.seconds {
            TimerDuration::from_units(seconds)
        } else if let Some(ms) = self.duration_ms {
            TimerDuration::from_millis(ms)
        } else {
            TimerDuration::default()
        };

        let label = if self.no_label {
            None
        } else {
            Some(UnitLabel::parse(&self.label)?)
        };

        let style = Style {
            radius: self.radius,
            ..Style::default()
        };
        style.validate()?;

        Ok(CountdownConfig {
            duration,
            autostart: !self.no_autostart,
            smooth: self.smooth,
            add_policy: if self.accumulate { AddPolicy::Accumulate } else { AddPolicy::Restart },
            label,
            style,
        })
    }
}

/// Singular and plural unit words shown under the number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitLabel {
    pub singular: String,
    pub plural: String,
}

impl UnitLabel {
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    /// Parse `"singular,plural"`.
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        match input.split_once(',') {
            Some((singular, plural)) if !singular.trim().is_empty() && !plural.trim().is_empty() => {
                Ok(Self::new(singular.trim(), plural.trim()))
            }
            _ => Err(ConfigError::InvalidLabel(input.to_string())),
        }
    }
}

impl Default for UnitLabel {
    fn default() -> Self {
        Self::new("second", "seconds")
    }
}

/// Styling passed through to the renderer.
///
/// `font_size` and `stroke_width` are derived from the radius when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub fill_style: String,
    pub font_color: String,
    pub font_family: String,
    pub font_size: Option<f64>,
    pub font_weight: String,
    pub stroke_style: String,
    pub stroke_width: Option<f64>,
    pub radius: f64,
}

impl Style {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        if let Some(width) = self.stroke_width {
            if !(width.is_finite() && width >= 0.0) {
                return Err(ConfigError::InvalidStrokeWidth(width));
            }
        }
        Ok(())
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill_style: "#8ac575".to_string(),
            font_color: "#477050".to_string(),
            font_family: "sans-serif".to_string(),
            font_size: None,
            font_weight: "700".to_string(),
            stroke_style: "#477050".to_string(),
            stroke_width: None,
            radius: 15.5,
        }
    }
}

/// Immutable configuration of one countdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountdownConfig {
    pub duration: TimerDuration,
    pub autostart: bool,
    pub smooth: bool,
    pub add_policy: AddPolicy,
    pub label: Option<UnitLabel>,
    pub style: Style,
}

impl CountdownConfig {
    pub fn with_duration(mut self, duration: TimerDuration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_seconds(self, seconds: i64) -> Self {
        self.with_duration(TimerDuration::from_units(seconds))
    }

    /// Redraw cadence for this configuration
    pub fn interval(&self) -> Duration {
        if self.smooth { SMOOTH_INTERVAL } else { STEPPED_INTERVAL }
    }
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            duration: TimerDuration::default(),
            autostart: true,
            smooth: false,
            add_policy: AddPolicy::Restart,
            label: Some(UnitLabel::default()),
            style: Style::default(),
        }
    }
}
