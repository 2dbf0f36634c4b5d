//! Shared error-context helpers and text utilities used across all courier crates.

pub mod error;
pub mod text;

pub use error::FromMessage;
