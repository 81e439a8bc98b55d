//! Converts dates and date ranges to and from masked text.
//!
//! A format such as `mm/dd/yyyy` or `mm/dd/yyyy-mm/dd/yyyy` is compiled once
//! into a [`Schema`]. The schema then renders values as text
//! ([`render_text`]) and reads text typed so far back into values
//! ([`parse_text`]), tolerating incomplete input.
//!
//! ```
//! use date_mask::{compile_schema, parse_text_in, render_text_in};
//! use chrono::Utc;
//!
//! let schema = compile_schema(Some("mm/dd/yyyy")).unwrap();
//! let value = parse_text_in("07/02/2020", &schema, &Utc).unwrap();
//! assert_eq!(value.to_string(), "2020-07-02T00:00:00.000Z");
//! assert_eq!(render_text_in(Some(&value), &schema, &Utc), "07/02/2020");
//! assert_eq!(parse_text_in("07/0", &schema, &Utc), None);
//! ```
//!
//! Only numeric month, day and year fields are recognized, and calendar
//! validation stops at simple bounds (month at most 12, day at most 31).

mod consts;
mod field;
mod mask;
mod parse;
mod prelude;
mod render;
mod schema;
mod types;
mod value;
mod zone;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use field::{DateField, DateFieldConfig, Selection};
pub use mask::MaskPart;
pub use parse::{parse_text, parse_text_in};
pub use render::{render_raw_in, render_text, render_text_in};
pub use schema::{Schema, SchemaError, compile_schema};
pub use types::{FieldKind, Token};
pub use value::{DateValue, Instant, RawValue, ValueError, from_iso, to_iso};
pub use zone::{local_date, local_midnight};

pub use chrono;
