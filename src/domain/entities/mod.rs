//! Domain entity definitions.

mod task;

pub use task::{Task, TaskId};
