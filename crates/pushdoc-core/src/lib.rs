//! # pushdoc-core
//!
//! Foundation types shared by the pushdoc crates:
//!
//! - **Errors**: [`ValidationError`], the only failures surfaced to callers
//! - **Fragments**: [`Fragment`], the JSON object every builder projects into
//! - **Merge rules**: [`shallow_merge`], [`field_merge`], [`deep_merge`] and [`MergeStrategy`]
//! - **Logging**: `tracing` subscriber setup and log capture for tests

#![deny(unsafe_code)]

pub mod errors;
pub mod json;
pub mod logging;

pub use errors::{Result, ValidationError};
pub use json::{Fragment, MergeStrategy, deep_merge, field_merge, shallow_merge};
