//! Duration strings (`30s`, `5m`, `1h`, `2d`, `1w`, `1M`, `1y`).

use std::sync::LazyLock;

use chrono::Duration;
use regex::Regex;
use thiserror::Error;

const DAY_SECONDS: i64 = 24 * 60 * 60;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("could not convert the input string of {0} into a duration")]
    Unrecognized(String),

    #[error("could not convert the input string of {input} into a duration: value is out of range")]
    OutOfRange { input: String },
}

static DURATION_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^([1-9]\d*)([smhdwMy])?$"));

fn unit_seconds(unit: &str) -> i64 {
    match unit {
        "y" => 365 * DAY_SECONDS,
        "M" => 30 * DAY_SECONDS,
        "w" => 7 * DAY_SECONDS,
        "d" => DAY_SECONDS,
        "h" => 60 * 60,
        "m" => 60,
        _ => 1,
    }
}

/// Parse a duration string.
///
/// - `<n><unit>`: `n` is a positive integer without a leading zero, `unit` one
///   of `s m h d w M y` (a month is 30 days, a year 365 days)
/// - a bare positive integer, or `"0"`, is a number of seconds
/// - the empty string is a zero duration
pub fn parse_duration_string(input: &str) -> Result<Duration, DurationParseError> {
    if input.is_empty() || input == "0" {
        return Ok(Duration::zero());
    }

    let captures = DURATION_RE
        .as_ref()
        .ok()
        .and_then(|re| re.captures(input))
        .ok_or_else(|| DurationParseError::Unrecognized(input.to_string()))?;

    let out_of_range = || DurationParseError::OutOfRange {
        input: input.to_string(),
    };

    let amount: i64 = captures[1].parse().map_err(|_| out_of_range())?;
    let unit = captures.get(2).map_or("s", |m| m.as_str());

    let seconds = amount.checked_mul(unit_seconds(unit)).ok_or_else(out_of_range)?;
    Duration::try_seconds(seconds).ok_or_else(out_of_range)
}
