//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod aggregate;
pub mod lookup;
pub mod parse;
pub mod summary;
