use std::fmt;
use std::str::FromStr;

use chrono::Duration;

use super::errors::TtlError;

/// Token lifetime value type.
///
/// Parsed from duration strings such as `"1h"`, `"30 minutes"`, `"1.5d"` or
/// `"500ms"`. A number without a unit is read as milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenTtl(Duration);

const MILLIS_PER_SECOND: f64 = 1_000.0;
const MILLIS_PER_MINUTE: f64 = 60.0 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: f64 = 60.0 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: f64 = 24.0 * MILLIS_PER_HOUR;
const MILLIS_PER_WEEK: f64 = 7.0 * MILLIS_PER_DAY;
const MILLIS_PER_YEAR: f64 = 365.25 * MILLIS_PER_DAY;

impl TokenTtl {
    const MAX_MILLIS: f64 = 100.0 * MILLIS_PER_YEAR;

    /// Parse a lifetime string.
    ///
    /// # Arguments
    /// * `text` - Number followed by an optional, case-insensitive unit
    ///
    /// # Errors
    /// * `Empty` - Nothing but whitespace
    /// * `InvalidFormat` - Number part missing, unparsable or absurdly large
    /// * `UnknownUnit` - Unit is not recognised
    /// * `NotPositive` - Lifetime is zero or negative
    pub fn parse(text: &str) -> Result<Self, TtlError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TtlError::Empty);
        }

        let split = text
            .char_indices()
            .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && c == '-')))
            .map(|(i, _)| i)
            .unwrap_or(text.len());
        let (number, unit) = text.split_at(split);

        let value: f64 = number
            .parse()
            .map_err(|_| TtlError::InvalidFormat(text.to_string()))?;
        let millis = value * Self::unit_millis(unit.trim())?;

        if !millis.is_finite() || millis > Self::MAX_MILLIS {
            return Err(TtlError::InvalidFormat(text.to_string()));
        }
        if millis <= 0.0 {
            return Err(TtlError::NotPositive(text.to_string()));
        }

        Ok(Self(Duration::milliseconds(millis.round() as i64)))
    }

    fn unit_millis(unit: &str) -> Result<f64, TtlError> {
        match unit.to_ascii_lowercase().as_str() {
            "" | "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => Ok(1.0),
            "s" | "sec" | "secs" | "second" | "seconds" => Ok(MILLIS_PER_SECOND),
            "m" | "min" | "mins" | "minute" | "minutes" => Ok(MILLIS_PER_MINUTE),
            "h" | "hr" | "hrs" | "hour" | "hours" => Ok(MILLIS_PER_HOUR),
            "d" | "day" | "days" => Ok(MILLIS_PER_DAY),
            "w" | "week" | "weeks" => Ok(MILLIS_PER_WEEK),
            "y" | "yr" | "yrs" | "year" | "years" => Ok(MILLIS_PER_YEAR),
            other => Err(TtlError::UnknownUnit(other.to_string())),
        }
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

impl FromStr for TokenTtl {
    type Err = TtlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TokenTtl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0.num_milliseconds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn millis(text: &str) -> i64 {
        TokenTtl::parse(text)
            .expect("Failed to parse lifetime")
            .as_duration()
            .num_milliseconds()
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(millis("1h"), 3_600_000);
        assert_eq!(millis("30m"), 1_800_000);
        assert_eq!(millis("45s"), 45_000);
        assert_eq!(millis("250ms"), 250);
        assert_eq!(millis("2d"), 172_800_000);
        assert_eq!(millis("1w"), 604_800_000);
        assert_eq!(millis("1y"), 31_557_600_000);
    }

    #[test]
    fn test_parse_long_unit_names_and_spacing() {
        assert_eq!(millis("2 hours"), 7_200_000);
        assert_eq!(millis("1 Day"), 86_400_000);
        assert_eq!(millis("10 MINUTES"), 600_000);
        assert_eq!(millis("  5 secs "), 5_000);
    }

    #[test]
    fn test_parse_fractional() {
        assert_eq!(millis("1.5h"), 5_400_000);
        assert_eq!(millis(".5s"), 500);
    }

    #[test]
    fn test_bare_number_is_milliseconds() {
        assert_eq!(millis("3600"), 3_600);
        assert_eq!(millis("3600000"), 3_600_000);
        assert_eq!(
            TokenTtl::parse("90000").unwrap(),
            TokenTtl::parse("90s").unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(TokenTtl::parse(""), Err(TtlError::Empty));
        assert_eq!(TokenTtl::parse("   "), Err(TtlError::Empty));
        assert!(matches!(
            TokenTtl::parse("h"),
            Err(TtlError::InvalidFormat(_))
        ));
        assert!(matches!(
            TokenTtl::parse("1.2.3h"),
            Err(TtlError::InvalidFormat(_))
        ));
        assert!(matches!(
            TokenTtl::parse("3 fortnights"),
            Err(TtlError::UnknownUnit(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_positive() {
        assert!(matches!(
            TokenTtl::parse("0s"),
            Err(TtlError::NotPositive(_))
        ));
        assert!(matches!(
            TokenTtl::parse("-1h"),
            Err(TtlError::NotPositive(_))
        ));
        assert!(matches!(
            TokenTtl::parse("0"),
            Err(TtlError::NotPositive(_))
        ));
    }

    #[test]
    fn test_parse_rejects_overflowing_lifetime() {
        assert!(matches!(
            TokenTtl::parse("1000000y"),
            Err(TtlError::InvalidFormat(_))
        ));
    }
}
