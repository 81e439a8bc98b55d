//! Prelude module for date_mask crate.
//!
//! Re-exports the derive macros shared by the value and schema types:
//! derive_more for formatting and newtype plumbing, serde for the boundary.

#[allow(unused_imports)]
pub use derive_more::{Deref, Display, From, Into};
pub use serde::{Deserialize, Serialize};
