use std::{fmt, str::FromStr};

/// A validated intra-day wall-clock value.
///
/// A `ClockTime` has no date or timezone component: it is the `HH:MM`
/// reading an operator copies from a parking ticket. Values are ordered
/// chronologically within a single day.
///
/// # Examples
///
/// ```
/// use parkade::ClockTime;
///
/// let time: ClockTime = "14:30".parse().unwrap();
/// assert_eq!(time.hour(), 14);
/// assert_eq!(time.minute(), 30);
/// assert_eq!(time.to_string(), "14:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Creates a clock time from an hour and minute.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTime`] if the hour is not in `0..24` or the minute
    /// is not in `0..60`.
    pub fn new(hour: u8, minute: u8) -> Result<Self, InvalidTime> {
        if hour >= 24 || minute >= 60 {
            return Err(InvalidTime(format!("{hour}:{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    /// The hour component, in `0..24`.
    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// The minute component, in `0..60`.
    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// The time expressed as fractional hours since midnight.
    ///
    /// `14:30` becomes `14.5`.
    #[must_use]
    pub fn fractional_hours(self) -> f64 {
        f64::from(self.hour) + f64::from(self.minute) / 60.0
    }

    /// The duration in hours from this time until `exit`.
    ///
    /// An exit reading numerically earlier than the entry is taken to mean
    /// the stay crossed midnight exactly once, so the span is shifted
    /// forward by 24 hours. Stays of 24 hours or longer are not
    /// representable.
    ///
    /// ```
    /// use parkade::ClockTime;
    ///
    /// let entry: ClockTime = "22:00".parse().unwrap();
    /// let exit: ClockTime = "02:00".parse().unwrap();
    /// assert!((entry.hours_until(exit) - 4.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn hours_until(self, exit: Self) -> f64 {
        let span = exit.fractional_hours() - self.fractional_hours();
        if span < 0.0 { span + 24.0 } else { span }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Error returned when a string is not a valid `HH:MM` clock time.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid time '{0}': expected HH:MM with hour 00-23 and minute 00-59")]
pub struct InvalidTime(String);

impl FromStr for ClockTime {
    type Err = InvalidTime;

    /// Parses exactly the pattern `H[H]:M[M]`.
    ///
    /// Each side of the colon must be one or two ASCII digits; anything
    /// else (extra text, signs, whitespace, a missing colon) is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || InvalidTime(s.to_string());

        let (hour_part, minute_part) = s.split_once(':').ok_or_else(err)?;

        for part in [hour_part, minute_part] {
            if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(err());
            }
        }

        let hour: u8 = hour_part.parse().map_err(|_| err())?;
        let minute: u8 = minute_part.parse().map_err(|_| err())?;

        Self::new(hour, minute).map_err(|_| err())
    }
}

impl TryFrom<&str> for ClockTime {
    type Error = InvalidTime;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_str(value)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("14:30", 14, 30; "mid afternoon")]
    #[test_case("00:00", 0, 0; "midnight")]
    #[test_case("23:59", 23, 59; "last minute of the day")]
    #[test_case("9:5", 9, 5; "single digit components")]
    #[test_case("08:00", 8, 0; "leading zero hour")]
    fn parse_valid(raw: &str, hour: u8, minute: u8) {
        let time: ClockTime = raw.parse().unwrap();
        assert_eq!(time.hour(), hour);
        assert_eq!(time.minute(), minute);
    }

    #[test_case("24:00"; "hour out of range")]
    #[test_case("12:60"; "minute out of range")]
    #[test_case("abc"; "not a time")]
    #[test_case(""; "empty")]
    #[test_case("1430"; "missing colon")]
    #[test_case("12:345"; "minute too wide")]
    #[test_case("123:45"; "hour too wide")]
    #[test_case("12:"; "empty minute")]
    #[test_case(":30"; "empty hour")]
    #[test_case(" 12:30"; "leading whitespace")]
    #[test_case("12:30 "; "trailing whitespace")]
    #[test_case("12:30pm"; "trailing text")]
    #[test_case("-1:30"; "signed hour")]
    #[test_case("12:3a"; "non digit minute")]
    fn parse_invalid(raw: &str) {
        assert!(raw.parse::<ClockTime>().is_err());
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(ClockTime::new(24, 0).is_err());
        assert!(ClockTime::new(0, 60).is_err());
        assert!(ClockTime::new(23, 59).is_ok());
    }

    #[test_case("14:30", 14.5; "half hour")]
    #[test_case("00:00", 0.0; "midnight")]
    #[test_case("10:15", 10.25; "quarter hour")]
    fn fractional_hours(raw: &str, expected: f64) {
        let time: ClockTime = raw.parse().unwrap();
        assert!((time.fractional_hours() - expected).abs() < 1e-9);
    }

    #[test_case("08:00", "10:00", 2.0; "same day")]
    #[test_case("22:00", "02:00", 4.0; "overnight rollover")]
    #[test_case("23:59", "00:00", 1.0 / 60.0; "rollover by one minute")]
    #[test_case("12:00", "12:00", 0.0; "zero duration")]
    #[test_case("00:00", "23:59", 23.0 + 59.0 / 60.0; "nearly a full day")]
    fn duration(entry: &str, exit: &str, expected: f64) {
        let entry: ClockTime = entry.parse().unwrap();
        let exit: ClockTime = exit.parse().unwrap();
        assert!((entry.hours_until(exit) - expected).abs() < 1e-9);
    }

    #[test]
    fn display_zero_pads() {
        let time: ClockTime = "9:5".parse().unwrap();
        assert_eq!(time.to_string(), "09:05");
    }

    #[test]
    fn ordering_is_chronological() {
        let early: ClockTime = "08:00".parse().unwrap();
        let late: ClockTime = "17:45".parse().unwrap();
        assert!(early < late);
    }

    #[test]
    fn error_display() {
        let error = "25:00".parse::<ClockTime>().unwrap_err();
        assert_eq!(
            error.to_string(),
            "invalid time '25:00': expected HH:MM with hour 00-23 and minute 00-59"
        );
    }
}
