//! Duration text parsing and arithmetic.
//!
//! The grammar is one or more `<number><unit>` segments, where the unit is
//! `s`, `m` or `h` and the number may be fractional: `90s`, `3m`, `1m30s`,
//! `1.5h`. The total steep time combines an optional override in this
//! grammar (absolute, or `+`/`-` relative to the tea's base time) with the
//! selected tea's default.

use std::time::Duration;
use thiserror::Error;

// -----------------------------------------------------------------------------
// Types
// -----------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationError {
    #[error("Invalid duration '{0}': expected a number followed by s, m or h")]
    Invalid(String),
    #[error("No duration given and no tea selected")]
    Missing,
    #[error("Total duration must be positive")]
    NonPositive,
}

// -----------------------------------------------------------------------------
// Parsing
// -----------------------------------------------------------------------------

/// Parse duration text such as `90s`, `3m`, `2h30m` or `1.5m`.
pub fn parse(text: &str) -> Result<Duration, DurationError> {
    let invalid = || DurationError::Invalid(text.trim().to_string());
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }

    let mut secs = 0.0_f64;
    let mut rest = trimmed;
    while !rest.is_empty() {
        // A trailing number without a unit is malformed.
        let number_end = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .ok_or_else(invalid)?;
        let (number, tail) = rest.split_at(number_end);
        let value: f64 = number.parse().map_err(|_| invalid())?;

        let unit_end = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_end);
        let unit_secs = match unit {
            "s" => 1.0,
            "m" => 60.0,
            "h" => 3600.0,
            _ => return Err(invalid()),
        };

        secs += value * unit_secs;
        rest = next;
    }

    Duration::try_from_secs_f64(secs).map_err(|_| invalid())
}

/// Resolve the total steep time from an optional override and the selected
/// tea's base time.
///
/// - No override: the base time (an error when no tea was selected either).
/// - `+`/`-` prefix: the base time adjusted by the given amount.
/// - Anything else: an absolute duration, the base time is ignored.
///
/// The result must be strictly positive.
pub fn resolve_total(
    custom: Option<&str>,
    base: Option<Duration>,
) -> Result<Duration, DurationError> {
    let total = match custom.map(str::trim).filter(|text| !text.is_empty()) {
        None => base.ok_or(DurationError::Missing)?,
        Some(text) => {
            if let Some(delta) = text.strip_prefix('+') {
                base.unwrap_or(Duration::ZERO) + parse(delta)?
            } else if let Some(delta) = text.strip_prefix('-') {
                let base = base.unwrap_or(Duration::ZERO);
                let delta = parse(delta)?;
                if delta >= base {
                    return Err(DurationError::NonPositive);
                }
                base - delta
            } else {
                parse(text)?
            }
        }
    };

    if total.is_zero() {
        return Err(DurationError::NonPositive);
    }
    Ok(total)
}

// -----------------------------------------------------------------------------
// Formatting
// -----------------------------------------------------------------------------

/// Render a duration for humans, e.g. "2 minutes, 30 seconds".
pub fn format_human(d: Duration) -> String {
    let total = d.as_secs();
    format!("{} minutes, {} seconds", total / 60, total % 60)
}

/// Render a duration in the parseable grammar, e.g. "2m", "90s", "2m30s".
pub fn format_compact(d: Duration) -> String {
    let total = d.as_secs();
    match (total / 60, total % 60) {
        (0, s) => format!("{s}s"),
        (m, 0) => format!("{m}m"),
        (m, s) => format!("{m}m{s}s"),
    }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_unit_durations() {
        assert_eq!(parse("90s").unwrap(), Duration::from_secs(90));
        assert_eq!(parse("5m").unwrap(), Duration::from_secs(300));
        assert_eq!(parse("1h").unwrap(), Duration::from_secs(3600));
        assert_eq!(parse(" 2m ").unwrap(), Duration::from_secs(120));
    }

    #[test]
    fn parses_compound_and_fractional_durations() {
        assert_eq!(parse("1m30s").unwrap(), Duration::from_secs(90));
        assert_eq!(parse("1.5m").unwrap(), Duration::from_secs(90));
        assert_eq!(parse("2h30m").unwrap(), Duration::from_secs(9000));
    }

    #[test]
    fn rejects_malformed_durations() {
        for text in ["", "  ", "5", "m", "5x", "one minute", "5s3", "1..2m"] {
            assert!(
                matches!(parse(text), Err(DurationError::Invalid(_))),
                "{text:?} should not parse"
            );
        }
    }

    #[test]
    fn empty_override_uses_the_teas_steep_time() {
        let base = Duration::from_secs(120);
        assert_eq!(resolve_total(None, Some(base)).unwrap(), base);
        assert_eq!(resolve_total(Some("  "), Some(base)).unwrap(), base);
    }

    #[test]
    fn absolute_override_ignores_the_base() {
        let base = Duration::from_secs(120);
        let five_minutes = Duration::from_secs(300);
        assert_eq!(resolve_total(Some("5m"), Some(base)).unwrap(), five_minutes);
        assert_eq!(resolve_total(Some("5m"), None).unwrap(), five_minutes);
    }

    #[test]
    fn signed_overrides_adjust_the_base() {
        let base = Duration::from_secs(120);
        assert_eq!(
            resolve_total(Some("+30s"), Some(base)).unwrap(),
            Duration::from_secs(150)
        );
        assert_eq!(
            resolve_total(Some("-30s"), Some(base)).unwrap(),
            Duration::from_secs(90)
        );
    }

    #[test]
    fn subtracting_past_zero_is_an_error() {
        let base = Duration::from_secs(120);
        assert_eq!(
            resolve_total(Some("-200s"), Some(base)),
            Err(DurationError::NonPositive)
        );
        // Landing exactly on zero is no better.
        assert_eq!(
            resolve_total(Some("-120s"), Some(base)),
            Err(DurationError::NonPositive)
        );
    }

    #[test]
    fn zero_total_is_an_error() {
        assert_eq!(resolve_total(Some("0s"), None), Err(DurationError::NonPositive));
    }

    #[test]
    fn missing_override_and_tea_is_an_error() {
        assert_eq!(resolve_total(None, None), Err(DurationError::Missing));
    }

    #[test]
    fn formats_durations_for_humans() {
        assert_eq!(format_human(Duration::from_secs(150)), "2 minutes, 30 seconds");
        assert_eq!(format_human(Duration::from_secs(420)), "7 minutes, 0 seconds");
        assert_eq!(format_human(Duration::from_secs(45)), "0 minutes, 45 seconds");
    }

    #[test]
    fn compact_format_round_trips_through_parse() {
        for secs in [5, 60, 90, 120, 420, 3600] {
            let d = Duration::from_secs(secs);
            assert_eq!(parse(&format_compact(d)).unwrap(), d, "{secs}s");
        }
    }
}
