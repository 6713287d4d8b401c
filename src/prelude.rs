//! Crate-internal derive imports.

pub use derive_more::Display;
