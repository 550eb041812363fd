use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;

use crate::domain::validation::ValidationError;

fn non_empty_trimmed(value: String, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// SubGram `secret_key`, used for order and bot management.
///
/// Invariant: non-empty after trimming.
pub struct SecretKey(String);

impl SecretKey {
    pub const FIELD: &'static str = "secret_key";

    /// Create a validated [`SecretKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        non_empty_trimmed(value.into(), Self::FIELD).map(Self)
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(***)")
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// SubGram `api_token`, used for balance, filters, statistics and exclusions.
///
/// Invariant: non-empty after trimming.
pub struct ApiToken(String);

impl ApiToken {
    pub const FIELD: &'static str = "api_token";

    /// Create a validated [`ApiToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        non_empty_trimmed(value.into(), Self::FIELD).map(Self)
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Per-bot SubGram `api_key`, used for sponsor and subscriber lookups.
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        non_empty_trimmed(value.into(), Self::FIELD).map(Self)
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Telegram bot token as issued by BotFather (`bot_token`).
///
/// Invariant: non-empty after trimming.
pub struct BotToken(String);

impl BotToken {
    pub const FIELD: &'static str = "bot_token";

    /// Create a validated [`BotToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        non_empty_trimmed(value.into(), Self::FIELD).map(Self)
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Full link to the advertised resource (`link`), e.g. `https://t.me/channel`.
///
/// Invariant: non-empty after trimming.
pub struct Link(String);

impl Link {
    pub const FIELD: &'static str = "link";

    /// Create a validated [`Link`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        non_empty_trimmed(value.into(), Self::FIELD).map(Self)
    }

    /// Borrow the validated link.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
/// Calendar date sent as `YYYY-MM-DD`.
///
/// Build it from a [`NaiveDate`], a [`NaiveDateTime`] (the time part is dropped),
/// or parse a preformatted string.
pub struct DateValue(NaiveDate);

impl DateValue {
    pub const FORMAT: &'static str = "%Y-%m-%d";

    /// Parse a `YYYY-MM-DD` string.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(value.trim(), Self::FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate {
                field: "date",
                input: value.to_owned(),
            })
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Wire representation (`YYYY-MM-DD`).
    pub fn to_wire(&self) -> String {
        self.0.format(Self::FORMAT).to_string()
    }
}

impl From<NaiveDate> for DateValue {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl From<NaiveDateTime> for DateValue {
    fn from(value: NaiveDateTime) -> Self {
        Self(value.date())
    }
}

impl FromStr for DateValue {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DateValue {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
/// Date and time sent as `YYYY-MM-DD HH:MM:SS`.
///
/// [`DateTimeValue::parse`] also accepts the ISO 8601 `T` separator. Values
/// decoded from responses go through a lenient parser: seconds may be missing
/// or fractional, and an RFC 3339 offset is dropped keeping the local time.
pub struct DateTimeValue(NaiveDateTime);

impl DateTimeValue {
    pub const FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";
    const ISO_FORMAT: &'static str = "%Y-%m-%dT%H:%M:%S";
    const LENIENT_FORMATS: [&'static str; 4] = [
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
    ];

    /// Parse a `YYYY-MM-DD HH:MM:SS` string.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        NaiveDateTime::parse_from_str(trimmed, Self::FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(trimmed, Self::ISO_FORMAT))
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate {
                field: "datetime",
                input: value.to_owned(),
            })
    }

    /// Parse a timestamp as returned by the API.
    pub(crate) fn parse_lenient(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        Self::LENIENT_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
            .or_else(|| {
                DateTime::parse_from_rfc3339(trimmed)
                    .ok()
                    .map(|datetime| datetime.naive_local())
            })
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidDate {
                field: "datetime",
                input: value.to_owned(),
            })
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }

    /// Wire representation (`YYYY-MM-DD HH:MM:SS`).
    pub fn to_wire(&self) -> String {
        self.0.format(Self::FORMAT).to_string()
    }
}

impl From<NaiveDateTime> for DateTimeValue {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl FromStr for DateTimeValue {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Lenient: used when decoding responses.
impl TryFrom<String> for DateTimeValue {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_lenient(&value)
    }
}

impl fmt::Display for DateTimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
/// Time of day sent as `HH:MM`.
///
/// String input may use a single-digit hour (`9:30`); it is zero-padded before
/// parsing. Seconds, when present, are accepted and dropped on the wire.
/// Values decoded from responses may also carry fractional seconds and a `Z`.
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub const FORMAT: &'static str = "%H:%M";

    /// Parse `H:MM`, `HH:MM` or `HH:MM:SS`.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::parse_with(value, value.trim(), &[Self::FORMAT, "%H:%M:%S"])
    }

    /// Parse a time as returned by the API.
    pub(crate) fn parse_lenient(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        let trimmed = trimmed.strip_suffix(['Z', 'z']).unwrap_or(trimmed);
        Self::parse_with(value, trimmed, &[Self::FORMAT, "%H:%M:%S%.f"])
    }

    fn parse_with(input: &str, trimmed: &str, formats: &[&str]) -> Result<Self, ValidationError> {
        let padded = match trimmed.split(':').next() {
            Some(hour) if hour.len() == 1 => format!("0{trimmed}"),
            _ => trimmed.to_owned(),
        };

        formats
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(&padded, format).ok())
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidDate {
                field: "time",
                input: input.to_owned(),
            })
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }

    /// Wire representation (`HH:MM`).
    pub fn to_wire(&self) -> String {
        self.0.format(Self::FORMAT).to_string()
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(value: NaiveTime) -> Self {
        Self(value)
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Lenient: used when decoding responses.
impl TryFrom<String> for TimeOfDay {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_lenient(&value)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_debug_output_is_redacted() {
        let key = SecretKey::new("super-secret").unwrap();
        assert_eq!(format!("{key:?}"), "SecretKey(***)");
        assert_eq!(key.as_str(), "super-secret");
    }

    #[test]
    fn time_of_day_pads_single_digit_hour() {
        let time = TimeOfDay::parse("9:30").unwrap();
        assert_eq!(time.to_wire(), "09:30");

        let time = TimeOfDay::parse("21:05:59").unwrap();
        assert_eq!(time.to_wire(), "21:05");
    }

    #[test]
    fn time_of_day_rejects_garbage() {
        assert!(matches!(
            TimeOfDay::parse("25:99"),
            Err(ValidationError::InvalidDate { field: "time", .. })
        ));
        assert!(TimeOfDay::parse("").is_err());
    }

    #[test]
    fn date_value_from_native_and_string() {
        let native = DateValue::from(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(native.to_wire(), "2024-03-05");

        let parsed: DateValue = " 2024-03-05 ".parse().unwrap();
        assert_eq!(parsed, native);
        assert!(DateValue::parse("05.03.2024").is_err());
    }

    #[test]
    fn date_value_drops_time_of_datetime() {
        let dt = NaiveDate::from_ymd_opt(2024, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap();
        assert_eq!(DateValue::from(dt).to_wire(), "2024-12-31");
    }

    #[test]
    fn strict_parsing_keeps_canonical_forms_only() {
        assert!(DateTimeValue::parse("2024-03-05 08:00").is_err());
        assert!(DateTimeValue::parse("2024-03-05T08:00:00Z").is_err());
        assert!(TimeOfDay::parse("08:00:00.5").is_err());
    }

    #[test]
    fn lenient_time_accepts_fraction_and_utc_marker() {
        for input in ["8:15", "08:15:00.250", "08:15:59Z"] {
            let time = TimeOfDay::try_from(input.to_owned()).unwrap();
            assert_eq!(time.to_wire(), "08:15", "{input}");
        }
        assert!(TimeOfDay::try_from("noon".to_owned()).is_err());
    }

    #[test]
    fn datetime_value_accepts_space_and_iso_separator() {
        let a = DateTimeValue::parse("2024-03-05 07:08:09").unwrap();
        let b = DateTimeValue::parse("2024-03-05T07:08:09").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_wire(), "2024-03-05 07:08:09");
    }
}
