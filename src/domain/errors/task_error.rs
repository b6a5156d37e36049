//! Task list error types.

use thiserror::Error;

use crate::domain::entities::TaskId;

/// Reasons a task list operation was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum TaskError {
    #[error("a task titled {title:?} already exists")]
    DuplicateTitle { title: String },

    #[error("task {id} not found")]
    NotFound { id: TaskId },
}

impl TaskError {
    /// Creates duplicate title error.
    #[must_use]
    pub fn duplicate(title: impl Into<String>) -> Self {
        Self::DuplicateTitle {
            title: title.into(),
        }
    }

    /// Returns whether the user must be told about the rejection.
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        matches!(self, Self::DuplicateTitle { .. })
    }
}
