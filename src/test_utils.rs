//! Shared fixtures for unit tests.
#![allow(clippy::expect_used)]

use chrono::FixedOffset;

use crate::{
    schema::{Schema, compile_schema},
    value::{Instant, from_iso},
};

/// Midnight on July 2, 2020 at UTC-08:00
pub const DATE: &str = "2020-07-02T08:00:00.000Z";
/// Midnight on July 7, 2020 at UTC-08:00
pub const SECOND_DATE: &str = "2020-07-07T08:00:00.000Z";

/// A fixed UTC-08:00 zone, so tests do not depend on the host
pub fn pacific() -> FixedOffset {
    FixedOffset::west_opt(8 * 3600).expect("valid offset")
}

pub fn instant(iso: &str) -> Instant {
    from_iso(iso).expect("valid test instant")
}

pub fn schema(format: &str) -> Schema {
    compile_schema(Some(format)).expect("non-empty test format")
}
