use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use crate::{RANGE_LEN, RANGE_SEPARATOR, prelude::*};

/// A point in time, exchanged with callers as an ISO-8601 UTC string.
pub type Instant = DateTime<Utc>;

/// The value a date input holds: nothing selected yet, one date, or a range.
///
/// "No value at all" is `Option::None` around this type. `Empty` is the
/// distinct state of a range input that has been initialized but has no dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "RawValue", into = "RawValue")]
pub enum DateValue {
    #[display(fmt = "")]
    Empty,
    #[display(fmt = "{}", "to_iso(_0)")]
    Single(Instant),
    #[display(fmt = "{}{}{}", "to_iso(_0)", RANGE_SEPARATOR, "to_iso(_1)")]
    Range(Instant, Instant),
}

/// Error type for converting caller values into `DateValue`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// A string that is not an ISO-8601 date-time.
    #[error("Invalid date-time: {0}")]
    InvalidInstant(String),

    /// More dates than a range holds.
    #[error("Too many dates: expected at most {max}, found {0}", max = RANGE_LEN)]
    TooManyDates(usize),
}

impl DateValue {
    /// Returns the dates in order
    pub fn dates(&self) -> Vec<Instant> {
        match *self {
            Self::Empty => Vec::new(),
            Self::Single(date) => vec![date],
            Self::Range(start, end) => vec![start, end],
        }
    }

    /// Returns the first date, if any
    pub const fn start(&self) -> Option<Instant> {
        match *self {
            Self::Empty => None,
            Self::Single(date) | Self::Range(date, _) => Some(date),
        }
    }

    /// Returns the last date, if any
    pub const fn end(&self) -> Option<Instant> {
        match *self {
            Self::Empty => None,
            Self::Single(date) | Self::Range(_, date) => Some(date),
        }
    }

    /// Whether this value belongs to a range input (`Empty` or `Range`)
    pub const fn is_range(&self) -> bool {
        matches!(self, Self::Empty | Self::Range(..))
    }

    /// Appends a date: `Empty` becomes `Single`, `Single` becomes `Range`.
    /// A `Range` is already full and is returned unchanged.
    #[must_use]
    pub const fn with_date(self, date: Instant) -> Self {
        match self {
            Self::Empty => Self::Single(date),
            Self::Single(start) => Self::Range(start, date),
            Self::Range(..) => self,
        }
    }
}

/// Formats an instant as `2020-07-02T08:00:00.000Z`
pub fn to_iso(instant: &Instant) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Reads an RFC 3339 date-time with any offset, or a bare `YYYY-MM-DD` date
/// taken as UTC midnight.
///
/// # Errors
/// Returns `ValueError::InvalidInstant` when the string is neither.
pub fn from_iso(s: &str) -> Result<Instant, ValueError> {
    let trimmed = s.trim();
    DateTime::parse_from_rfc3339(trimmed)
        .map(|instant| instant.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|midnight| midnight.and_utc())
        })
        .ok_or_else(|| ValueError::InvalidInstant(s.to_owned()))
}

/// A value as callers hand it over: one string or a list of strings.
///
/// Nothing is validated here; entries may be unparseable and there may be
/// more than two of them. The renderer skips entries it cannot read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, From, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    One(String),
    Many(Vec<String>),
}

impl RawValue {
    /// An empty string or an empty list
    pub fn is_empty(&self) -> bool {
        match self {
            Self::One(s) => s.is_empty(),
            Self::Many(items) => items.is_empty(),
        }
    }

    /// Each entry read as an instant; unreadable entries are `None`
    pub fn instants(&self) -> Vec<Option<Instant>> {
        match self {
            Self::One(s) => vec![from_iso(s).ok()],
            Self::Many(items) => items.iter().map(|s| from_iso(s).ok()).collect(),
        }
    }
}

impl TryFrom<RawValue> for DateValue {
    type Error = ValueError;

    fn try_from(raw: RawValue) -> Result<Self, Self::Error> {
        match raw {
            RawValue::One(s) => Ok(Self::Single(from_iso(&s)?)),
            RawValue::Many(items) => {
                let dates = items
                    .iter()
                    .map(|s| from_iso(s))
                    .collect::<Result<Vec<_>, _>>()?;
                match dates.as_slice() {
                    [] => Ok(Self::Empty),
                    [date] => Ok(Self::Single(*date)),
                    [start, end] => Ok(Self::Range(*start, *end)),
                    _ => Err(ValueError::TooManyDates(dates.len())),
                }
            },
        }
    }
}

impl From<DateValue> for RawValue {
    fn from(value: DateValue) -> Self {
        match value {
            DateValue::Single(date) => Self::One(to_iso(&date)),
            DateValue::Empty | DateValue::Range(..) => Self::Many(value.dates().iter().map(to_iso).collect()),
        }
    }
}
