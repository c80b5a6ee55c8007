//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no domain transforms.

pub mod events;
pub mod tables;

pub use events::{describe_event, describe_snapshot};
pub use tables::{format_optional, format_timestamp, print_separator, truncate_string};
