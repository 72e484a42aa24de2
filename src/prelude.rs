//! Prelude module for persian_date crate.
//!
//! Re-exports the derive macros the value types are built from.

#[allow(unused_imports)]
pub use derive_more::{Deref, Display, From, Into};
