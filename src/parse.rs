use chrono::{Local, TimeZone};
use tracing::trace;

use crate::{
    MAX_DAY, MAX_DAY_DIGITS, MAX_MONTH, MAX_MONTH_DIGITS, MIN_YEAR_DIGITS,
    schema::Schema,
    types::{FieldKind, FieldMap, Token},
    value::{DateValue, Instant},
    zone::local_midnight,
};

/// Parses masked text in the host's local time zone.
///
/// See [`parse_text_in`].
pub fn parse_text(text: &str, schema: &Schema) -> Option<DateValue> {
    parse_text_in(text, schema, &Local)
}

/// Parses masked text into a value, taking typed dates as midnight in `tz`.
///
/// Partial input is fine: tokens past the end of `text` are skipped and
/// incomplete dates are not committed. A literal that does not match the text is
/// a syntax error and the whole parse yields `None`, even when an earlier
/// date in the same text was complete. At most two dates are kept.
///
/// Returns `None` for empty text, on a syntax error, or when no date was
/// complete.
pub fn parse_text_in<Tz: TimeZone>(text: &str, schema: &Schema, tz: &Tz) -> Option<DateValue> {
    if text.is_empty() {
        return None;
    }

    let mut scan = schema
        .iter()
        .try_fold(Scan::default(), |scan, token| scan.step(text, token, tz))?;
    scan.close(tz);
    scan.committed
}

/// Parser state threaded through the schema walk.
#[derive(Debug, Default)]
struct Scan<'a> {
    /// Byte offset into the text
    index:     usize,
    /// Digits captured for the date being read
    fields:    FieldMap<&'a str>,
    committed: Option<DateValue>,
}

impl<'a> Scan<'a> {
    /// Consumes one token. `None` means a literal did not match.
    fn step<Tz: TimeZone>(mut self, text: &'a str, token: &Token, tz: &Tz) -> Option<Self> {
        let Some(rest) = text.get(self.index..).filter(|rest| !rest.is_empty()) else {
            return Some(self);
        };

        match token.field() {
            Some(kind) => {
                // A field seen twice starts the next date.
                if self.fields.contains(kind) {
                    self.close(tz);
                }
                let digits = leading_digits(rest);
                self.fields.insert(kind, digits);
                self.index += digits.len();
            },
            None if rest.starts_with(token.as_str()) => self.index += token.len(),
            None => {
                trace!(index = self.index, expected = token.as_str(), "date text does not match format");
                return None;
            },
        }
        Some(self)
    }

    /// Commits the captured fields as a date if they form one and starts over.
    /// Fields that do not form a date stay captured; the next group's digits
    /// overwrite them one field at a time.
    fn close<Tz: TimeZone>(&mut self, tz: &Tz) {
        let Some(date) = commit(&self.fields, tz) else {
            if self.fields != FieldMap::default() {
                trace!(fields = ?self.fields, "captured fields do not form a date");
            }
            return;
        };
        let committed = self.committed.map_or(DateValue::Single(date), |value| {
            if matches!(value, DateValue::Range(..)) {
                trace!("ignoring date beyond the second");
            }
            value.with_date(date)
        });
        self.committed = Some(committed);
        self.fields.clear();
    }
}

fn leading_digits(text: &str) -> &str {
    let end = text.find(|c: char| !c.is_ascii_digit()).unwrap_or(text.len());
    &text[..end]
}

/// Turns captured digits into an instant when all three fields are present
/// and within bounds. Month and day are not checked against the calendar;
/// February 31 rolls over into March.
fn commit<Tz: TimeZone>(fields: &FieldMap<&str>, tz: &Tz) -> Option<Instant> {
    let month = fields.get(FieldKind::Month)?;
    let day = fields.get(FieldKind::Day)?;
    let year = fields.get(FieldKind::Year)?;

    if year.len() < MIN_YEAR_DIGITS || month.len() > MAX_MONTH_DIGITS || day.len() > MAX_DAY_DIGITS {
        return None;
    }

    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    if month > MAX_MONTH || day > MAX_DAY {
        return None;
    }

    local_midnight(tz, year.parse().ok()?, month, day)
}
