//! Durations, display units and the infinite count

use std::fmt;

use serde::{Deserialize, Serialize};

/// Milliseconds per display unit (one second).
pub const UNIT_MS: i64 = 1000;

/// Glyph shown in place of a number when the countdown never ends.
pub const INFINITY_GLYPH: &str = "∞";

/// Total countdown length.
///
/// Zero and negative lengths are legal and behave as already elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerDuration {
    Bounded(i64),
    Unbounded,
}

impl TimerDuration {
    pub fn from_millis(ms: i64) -> Self {
        Self::Bounded(ms)
    }

    pub fn from_units(units: i64) -> Self {
        Self::Bounded(units.saturating_mul(UNIT_MS))
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// Length in milliseconds, `None` when unbounded.
    pub fn millis(&self) -> Option<i64> {
        match self {
            Self::Bounded(ms) => Some(*ms),
            Self::Unbounded => None,
        }
    }

    /// Length in whole display units, floored.
    pub fn units(&self) -> Count {
        match self {
            Self::Bounded(ms) => Count::Finite(ms.div_euclid(UNIT_MS)),
            Self::Unbounded => Count::Infinite,
        }
    }

    /// Whether `elapsed_ms` has not yet reached the end.
    pub fn is_running_at(&self, elapsed_ms: i64) -> bool {
        match self {
            Self::Bounded(ms) => elapsed_ms < *ms,
            Self::Unbounded => true,
        }
    }
}

impl Default for TimerDuration {
    fn default() -> Self {
        Self::Bounded(10_000)
    }
}

/// A count of display units that may be infinite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Count {
    Finite(i64),
    Infinite,
}

impl Count {
    pub fn finite(&self) -> Option<i64> {
        match self {
            Self::Finite(n) => Some(*n),
            Self::Infinite => None,
        }
    }

    pub fn is_one(&self) -> bool {
        matches!(self, Self::Finite(1))
    }

    /// The count one higher, used for the label's drop shadow.
    pub fn succ(&self) -> Self {
        match self {
            Self::Finite(n) => Self::Finite(n.saturating_add(1)),
            Self::Infinite => Self::Infinite,
        }
    }

    /// Subtracts a finite count; infinity absorbs it.
    pub fn minus(&self, other: i64) -> Self {
        match self {
            Self::Finite(n) => Self::Finite(n.saturating_sub(other)),
            Self::Infinite => Self::Infinite,
        }
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(n) => write!(f, "{}", n),
            Self::Infinite => f.write_str(INFINITY_GLYPH),
        }
    }
}

impl Serialize for Count {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Finite(n) => serializer.serialize_i64(*n),
            Self::Infinite => serializer.serialize_str(INFINITY_GLYPH),
        }
    }
}

/// Coerces loosely typed input into a whole number of units.
///
/// Leading whitespace and an optional sign are accepted, digits are read up
/// to the first non-digit, and anything unparseable yields zero. Digit runs
/// too long for an `i64` saturate.
pub fn coerce_units(input: &str) -> i64 {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if digits.is_empty() {
        return 0;
    }

    let signed = if negative {
        format!("-{}", digits)
    } else {
        digits.to_string()
    };
    match signed.parse::<i64>() {
        Ok(n) => n,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_floor_partial_seconds() {
        assert_eq!(TimerDuration::from_millis(10_999).units(), Count::Finite(10));
        assert_eq!(TimerDuration::from_millis(-500).units(), Count::Finite(-1));
        assert_eq!(TimerDuration::Unbounded.units(), Count::Infinite);
    }

    #[test]
    fn unbounded_never_ends() {
        assert!(TimerDuration::Unbounded.is_running_at(i64::MAX));
        assert!(!TimerDuration::from_units(0).is_running_at(0));
    }

    #[test]
    fn infinite_count_displays_glyph() {
        assert_eq!(Count::Infinite.to_string(), "∞");
        assert_eq!(Count::Infinite.succ().to_string(), "∞");
        assert_eq!(Count::Finite(7).succ().to_string(), "8");
    }

    #[test]
    fn count_serializes_as_number_or_glyph() {
        assert_eq!(serde_json::to_string(&Count::Finite(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&Count::Infinite).unwrap(), "\"∞\"");
    }

    #[test]
    fn coercion_is_lenient() {
        assert_eq!(coerce_units("5"), 5);
        assert_eq!(coerce_units("  12abc"), 12);
        assert_eq!(coerce_units("-3"), -3);
        assert_eq!(coerce_units("abc"), 0);
        assert_eq!(coerce_units(""), 0);
        assert_eq!(coerce_units("NaN"), 0);
    }

    #[test]
    fn coercion_saturates_oversized_numbers() {
        assert_eq!(coerce_units("99999999999999999999"), i64::MAX);
        assert_eq!(coerce_units("-99999999999999999999x"), i64::MIN);
        assert_eq!(coerce_units("-9223372036854775808"), i64::MIN);
    }
}
