//! Timecode parser.

use crate::{Error, Result};

/// Parse a timecode token into seconds.
///
/// Accepts `H:M:S`, `M:S`, or a bare number of **minutes**. Seconds may be
/// fractional; hours and minutes in the colon forms are integers.
///
/// ```
/// use trackforged_parser::parse_timecode;
///
/// assert_eq!(parse_timecode("1:02:03")?, 3723.0);
/// assert_eq!(parse_timecode("2:30")?, 150.0);
/// assert_eq!(parse_timecode("5")?, 300.0);
/// # Ok::<(), trackforged_parser::Error>(())
/// ```
pub fn parse_timecode(token: &str) -> Result<f64> {
    let s = token.trim();
    if s.is_empty() {
        return Err(Error::invalid_timecode(token, "empty timecode"));
    }

    let parts: Vec<&str> = s.split(':').collect();
    match parts.as_slice() {
        [h, m, sec] => {
            Ok(whole(s, h)? * 3600.0 + whole(s, m)? * 60.0 + fractional(s, sec)?)
        }
        [m, sec] => Ok(whole(s, m)? * 60.0 + fractional(s, sec)?),
        [minutes] => Ok(fractional(s, minutes)? * 60.0),
        _ => Err(Error::invalid_timecode(s, "too many ':' separated parts")),
    }
}

fn whole(token: &str, part: &str) -> Result<f64> {
    part.trim()
        .parse::<i64>()
        .map(|v| v as f64)
        .map_err(|_| Error::invalid_timecode(token, format!("{:?} is not an integer", part)))
}

fn fractional(token: &str, part: &str) -> Result<f64> {
    let value = part
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::invalid_timecode(token, format!("{:?} is not a number", part)))?;
    if !value.is_finite() {
        return Err(Error::invalid_timecode(token, "value is not finite"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_minutes_seconds() {
        assert_eq!(parse_timecode("1:02:03").unwrap(), 3723.0);
        assert_eq!(parse_timecode("0:00:07.25").unwrap(), 7.25);
    }

    #[test]
    fn test_minutes_seconds() {
        assert_eq!(parse_timecode("2:30").unwrap(), 150.0);
        assert_eq!(parse_timecode(" 0:05.5 ").unwrap(), 5.5);
    }

    #[test]
    fn test_bare_value_is_minutes() {
        assert_eq!(parse_timecode("5").unwrap(), 300.0);
        assert_eq!(parse_timecode("1.5").unwrap(), 90.0);
    }

    #[test]
    fn test_negative_is_parsed() {
        assert_eq!(parse_timecode("-1").unwrap(), -60.0);
    }

    #[test]
    fn test_empty_fails() {
        assert!(matches!(
            parse_timecode(""),
            Err(Error::InvalidTimecode { .. })
        ));
        assert!(matches!(
            parse_timecode("   "),
            Err(Error::InvalidTimecode { .. })
        ));
    }

    #[test]
    fn test_non_numeric_fails() {
        for bad in ["abc", "1:xx", "1.5:30", "1:2:3:4", "nan", "inf", "1::2", ":30"] {
            let err = parse_timecode(bad).unwrap_err();
            assert!(!err.is_spec_error(), "{bad} should be a timecode error");
        }
    }
}
