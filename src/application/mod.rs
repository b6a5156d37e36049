//! Application layer with the task list state manager.

/// Application services.
pub mod services;

pub use services::TaskStore;
