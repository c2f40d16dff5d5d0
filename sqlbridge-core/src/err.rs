//! Error handling for the sqlbridge workspace.
//!
//! Consumed as `err::{Result, Error, Context, bail}` throughout.

pub use anyhow::*;
