use chrono::{Datelike, Local, NaiveDate, TimeZone};

use crate::{
    PADDED_WIDTH, UNPADDED_WIDTH,
    schema::Schema,
    types::{FieldKind, FieldMap},
    value::{DateValue, RawValue},
    zone::local_date,
};

/// Renders `value` as text in the host's local time zone.
///
/// See [`render_text_in`].
pub fn render_text(value: Option<&DateValue>, schema: &Schema) -> String {
    render_text_in(value, schema, &Local)
}

/// Renders `value` as text, reading calendar fields in `tz`.
///
/// No value and `Empty` both render as `""` so a placeholder can show
/// instead. Field tokens with no date left to fill them are written as the
/// token itself, so a single date in a range format renders as
/// `07/02/2020-mm/dd/yyyy`.
pub fn render_text_in<Tz: TimeZone>(value: Option<&DateValue>, schema: &Schema, tz: &Tz) -> String {
    match value {
        None | Some(DateValue::Empty) => String::new(),
        Some(value) => {
            let dates: Vec<_> = value.dates().iter().map(|date| Some(local_date(date, tz))).collect();
            render_dates(&dates, schema)
        },
    }
}

/// Renders a caller-supplied value that has not been validated.
/// Entries that are not readable instants are skipped.
pub fn render_raw_in<Tz: TimeZone>(value: Option<&RawValue>, schema: &Schema, tz: &Tz) -> String {
    match value {
        Some(raw) if !raw.is_empty() => {
            let dates: Vec<_> = raw
                .instants()
                .iter()
                .map(|date| date.as_ref().map(|date| local_date(date, tz)))
                .collect();
            render_dates(&dates, schema)
        },
        _ => String::new(),
    }
}

/// Which date is being written and which of its fields are already out.
#[derive(Debug, Default)]
struct Cursor {
    index:    usize,
    rendered: FieldMap<()>,
}

impl Cursor {
    /// Moves past unreadable dates, and past the current date when `field`
    /// has already been written for it.
    fn settle(&mut self, dates: &[Option<NaiveDate>], field: Option<FieldKind>) {
        while let Some(date) = dates.get(self.index) {
            let repeated = field.is_some_and(|kind| self.rendered.contains(kind));
            if date.is_some() && !repeated {
                break;
            }
            self.index += 1;
            self.rendered.clear();
        }
    }
}

fn render_dates(dates: &[Option<NaiveDate>], schema: &Schema) -> String {
    let (text, _) = schema
        .iter()
        .fold((String::new(), Cursor::default()), |(mut text, mut cursor), token| {
            let field = token.field();
            cursor.settle(dates, field);

            let date = dates.get(cursor.index).copied().flatten();
            let piece = field.zip(date).and_then(|(kind, date)| {
                let piece = format_field(kind, token.width(), date)?;
                cursor.rendered.insert(kind, ());
                Some(piece)
            });

            match piece {
                Some(piece) => text.push_str(&piece),
                None => text.push_str(token),
            }
            (text, cursor)
        });
    text
}

/// `m`/`d` unpadded, `mm`/`dd` zero-padded, `yy` the last two year digits,
/// any other year width the full year. Wider `m`/`d` runs are not fields
/// the renderer fills.
fn format_field(kind: FieldKind, width: usize, date: NaiveDate) -> Option<String> {
    match (kind, width) {
        (FieldKind::Month, UNPADDED_WIDTH) => Some(date.month().to_string()),
        (FieldKind::Month, PADDED_WIDTH) => Some(format!("{:02}", date.month())),
        (FieldKind::Day, UNPADDED_WIDTH) => Some(date.day().to_string()),
        (FieldKind::Day, PADDED_WIDTH) => Some(format!("{:02}", date.day())),
        (FieldKind::Year, PADDED_WIDTH) => {
            let year = date.year().to_string();
            let cut = year.len().saturating_sub(PADDED_WIDTH);
            Some(year[cut..].to_owned())
        },
        (FieldKind::Year, _) => Some(date.year().to_string()),
        (FieldKind::Month | FieldKind::Day, _) => None,
    }
}
