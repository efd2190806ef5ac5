#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
#![allow(
    clippy::module_name_repetitions, // e.g. LayoutError in layout module
    clippy::must_use_candidate,      // Annotated selectively on critical APIs
    clippy::missing_errors_doc       // Error conditions documented on the error type
)]

//! Ordered JSON layouts for application and HTTP access log events.
//!
//! The host pipeline hands one immutable event at a time to a layout; the
//! layout decides which fields appear, under which names and in which order,
//! and returns the encoded JSON text. Writing the line is the caller's job.

pub mod config;
pub mod event;
pub mod layout;

// Re-export main types for easy access
pub use config::{
    AccessLayoutConfig, ApplicationLayoutConfig, ConfigError, TimestampConfig, TimestampMode,
};
pub use event::{AccessEvent, ApplicationEvent, ErrorChain};
pub use layout::{
    AccessJsonLayout, ApplicationJsonLayout, ExceptionRenderer, FieldMapBuilder, JsonFormatter,
    JsonLayout, LayoutError, TimestampFormatter,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
