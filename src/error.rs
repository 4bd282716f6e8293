//! Error types

use thiserror::Error;

/// Rejected configuration values.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid label {0:?}: expected \"singular,plural\"")]
    InvalidLabel(String),
    #[error("invalid radius {0}: must be a positive number")]
    InvalidRadius(f64),
    #[error("invalid stroke width {0}: must not be negative")]
    InvalidStrokeWidth(f64),
}

/// Failures talking to the countdown driver task.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("countdown driver is not running")]
    Closed,
    #[error("countdown driver dropped the reply")]
    NoReply,
}
