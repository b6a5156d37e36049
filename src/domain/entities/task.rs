//! Task entity.

use serde::{Deserialize, Serialize};

/// Unique identifier for a task within a running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    done: bool,
}

impl Task {
    /// Creates a pending task.
    #[must_use]
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            done: false,
        }
    }

    /// Returns the task ID.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    pub(crate) fn toggled(&self) -> Self {
        Self {
            done: !self.done,
            ..self.clone()
        }
    }

    pub(crate) fn retitled(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_pending() {
        let task = Task::new(7_u64, "Buy milk");

        assert_eq!(task.id(), TaskId(7));
        assert_eq!(task.title(), "Buy milk");
        assert!(!task.is_done());
    }

    #[test]
    fn test_toggled_keeps_identity() {
        let task = Task::new(1_u64, "Walk the dog");
        let toggled = task.toggled();

        assert!(toggled.is_done());
        assert_eq!(toggled.id(), task.id());
        assert_eq!(toggled.title(), task.title());
        assert!(!toggled.toggled().is_done());
    }

    #[test]
    fn test_retitled_keeps_done_flag() {
        let task = Task::new(1_u64, "Old").toggled();
        let renamed = task.retitled("New");

        assert_eq!(renamed.title(), "New");
        assert!(renamed.is_done());
        assert_eq!(renamed.id(), TaskId(1));
    }

    #[test]
    fn test_task_id_display() {
        assert_eq!(TaskId(1_700_000_000_000).to_string(), "1700000000000");
    }
}
