//! Domain error types.

mod task_error;

pub use task_error::TaskError;
