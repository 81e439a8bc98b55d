use chrono::{Local, TimeZone};
use tracing::trace;

use crate::{
    mask::MaskPart,
    parse::parse_text_in,
    prelude::*,
    render::render_text_in,
    schema::{Schema, compile_schema},
    value::{DateValue, Instant},
};

/// A pick made on a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    /// One day was clicked
    Date(Instant),
    /// A start and end were chosen together
    Span(Instant, Instant),
}

/// Serializable settings for a [`DateField`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DateFieldConfig {
    /// Mask format such as `mm/dd/yyyy`; without one the field takes no typing
    pub format: Option<String>,
    /// Initial value; `[]` marks an empty range field
    pub value:  Option<DateValue>,
}

/// Keeps masked text and its date value in step while a user edits them.
///
/// The schema is compiled once per format. Typed text is parsed in full on
/// every edit. Values coming from outside re-render the text, except when
/// they are just the value this field produced itself, so half-typed text
/// survives the caller echoing the value back.
#[derive(Debug, Clone)]
pub struct DateField<Tz: TimeZone = Local> {
    format:   Option<String>,
    schema:   Option<Schema>,
    text:     Option<String>,
    value:    Option<DateValue>,
    /// Last value handed out by `input` or `select`
    produced: Option<DateValue>,
    range:    bool,
    tz:       Tz,
}

impl DateField<Local> {
    /// Creates a field that reads and writes dates in the host's time zone
    pub fn new(format: Option<&str>, value: Option<DateValue>) -> Self {
        Self::with_zone(format, value, Local)
    }
}

impl<Tz: TimeZone> DateField<Tz> {
    pub fn with_zone(format: Option<&str>, value: Option<DateValue>, tz: Tz) -> Self {
        let mut field = Self {
            format: format.map(str::to_owned),
            schema: compile_schema(format),
            text: None,
            value,
            produced: value,
            range: value.is_some_and(|value| value.is_range()),
            tz,
        };
        field.refresh_text();
        field
    }

    pub fn from_config(config: &DateFieldConfig, tz: Tz) -> Self {
        Self::with_zone(config.format.as_deref(), config.value, tz)
    }

    /// Switches the format. The schema is only recompiled when it changed.
    pub fn set_format(&mut self, format: Option<&str>) {
        if self.format.as_deref() == format {
            return;
        }
        self.format = format.map(str::to_owned);
        self.schema = compile_schema(format);
        self.refresh_text();
    }

    /// Applies a value set from outside the field
    pub fn set_value(&mut self, value: Option<DateValue>) {
        self.value = value;
        if let Some(value) = value {
            self.range = value.is_range();
        }
        if value != self.produced {
            self.produced = value;
            self.refresh_text();
        }
    }

    /// Takes the full text after an edit and returns the value it parses to.
    /// Without a format there is no text to edit and the value is unchanged.
    pub fn input(&mut self, text: &str) -> Option<DateValue> {
        let Some(schema) = &self.schema else {
            trace!("ignoring typed text on a field without a format");
            return self.value;
        };
        let value = parse_text_in(text, schema, &self.tz);
        self.text = Some(text.to_owned());
        self.value = value;
        self.produced = value;
        value
    }

    /// Applies a calendar pick. In a range field a single day becomes a
    /// one-day range.
    pub fn select(&mut self, selection: Selection) -> Option<DateValue> {
        let value = match selection {
            Selection::Span(start, end) => {
                self.range = true;
                DateValue::Range(start, end)
            },
            Selection::Date(date) if self.range => DateValue::Range(date, date),
            Selection::Date(date) => DateValue::Single(date),
        };
        self.value = Some(value);
        self.produced = Some(value);
        self.refresh_text();
        self.value
    }

    fn refresh_text(&mut self) {
        self.text = self
            .schema
            .as_ref()
            .map(|schema| render_text_in(self.value.as_ref(), schema, &self.tz));
    }

    /// Whether the field holds a range rather than a single date
    pub const fn is_range(&self) -> bool {
        self.range
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub const fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    /// The input mask, when the field has a format
    pub fn mask(&self) -> Option<Vec<MaskPart>> {
        self.schema.as_ref().map(Schema::mask)
    }

    /// Current text; `None` when the field has no format
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub const fn value(&self) -> Option<DateValue> {
        self.value
    }

    pub const fn zone(&self) -> &Tz {
        &self.tz
    }
}
