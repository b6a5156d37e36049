//! Tasklist - a small keyboard-driven to-do list for the terminal.
//!
//! Tasks live in memory for the lifetime of the process. The domain layer
//! holds immutable task list snapshots, the application layer mutates them
//! through [`application::TaskStore`], and the presentation layer renders
//! them with ratatui.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer with the task store.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration and id generators.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "tasklist";
