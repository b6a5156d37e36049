//! Immutable task list snapshots.
//!
//! Every mutation builds a new snapshot and leaves the old one untouched.
//! No-op mutations hand back the same allocation, so callers holding an
//! older snapshot can detect change with [`TaskList::ptr_eq`].

use std::sync::Arc;

use crate::domain::entities::{Task, TaskId};

/// Ordered, reference-counted sequence of tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Arc<[Task]>,
}

impl TaskList {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when both snapshots share the same allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tasks, &other.tasks)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    #[must_use]
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id() == id)
    }

    /// Exact, case-sensitive title lookup.
    #[must_use]
    pub fn contains_title(&self, title: &str) -> bool {
        self.tasks.iter().any(|t| t.title() == title)
    }

    /// Same as [`Self::contains_title`] but ignores the task with `id`.
    #[must_use]
    pub fn contains_title_except(&self, title: &str, id: TaskId) -> bool {
        self.tasks
            .iter()
            .any(|t| t.id() != id && t.title() == title)
    }

    #[must_use]
    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_done()).count()
    }

    /// Returns a new snapshot with `task` at the end.
    #[must_use]
    pub fn appended(&self, task: Task) -> Self {
        let tasks: Vec<Task> = self.tasks.iter().cloned().chain(Some(task)).collect();
        Self {
            tasks: tasks.into(),
        }
    }

    #[must_use]
    pub fn with_toggled(&self, id: TaskId) -> Self {
        self.map_one(id, Task::toggled)
    }

    #[must_use]
    pub fn with_title(&self, id: TaskId, title: &str) -> Self {
        self.map_one(id, |t| t.retitled(title))
    }

    #[must_use]
    pub fn without(&self, id: TaskId) -> Self {
        if self.position(id).is_none() {
            return self.clone();
        }
        let tasks: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| t.id() != id)
            .cloned()
            .collect();
        Self {
            tasks: tasks.into(),
        }
    }

    fn map_one(&self, id: TaskId, f: impl Fn(&Task) -> Task) -> Self {
        let Some(index) = self.position(id) else {
            return self.clone();
        };
        let tasks: Vec<Task> = self
            .tasks
            .iter()
            .enumerate()
            .map(|(i, t)| if i == index { f(t) } else { t.clone() })
            .collect();
        Self {
            tasks: tasks.into(),
        }
    }
}

/// Pending removal of one task, issued before the user has confirmed it.
///
/// Holding a request has no effect on the list; only handing it back to the
/// store performs the removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalRequest {
    id: TaskId,
    title: String,
}

impl RemovalRequest {
    pub(crate) fn new(task: &Task) -> Self {
        Self {
            id: task.id(),
            title: task.title().to_string(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Title of the task at the time the removal was requested.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self {
            tasks: tasks.into(),
        }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TaskList {
        TaskList::from(vec![
            Task::new(1_u64, "a"),
            Task::new(2_u64, "b"),
            Task::new(3_u64, "c"),
        ])
    }

    fn titles(list: &TaskList) -> Vec<&str> {
        list.iter().map(Task::title).collect()
    }

    #[test]
    fn test_appended_leaves_original_untouched() {
        let list = sample();
        let next = list.appended(Task::new(4_u64, "d"));

        assert_eq!(titles(&list), ["a", "b", "c"]);
        assert_eq!(titles(&next), ["a", "b", "c", "d"]);
        assert!(!list.ptr_eq(&next));
    }

    #[test]
    fn test_with_toggled_flips_only_target() {
        let list = sample();
        let next = list.with_toggled(TaskId(2));

        let flags: Vec<bool> = next.iter().map(Task::is_done).collect();
        assert_eq!(flags, [false, true, false]);
        assert_eq!(titles(&next), titles(&list));
    }

    #[test]
    fn test_missing_id_returns_same_snapshot() {
        let list = sample();

        assert!(list.ptr_eq(&list.with_toggled(TaskId(99))));
        assert!(list.ptr_eq(&list.without(TaskId(99))));
        assert!(list.ptr_eq(&list.with_title(TaskId(99), "z")));
    }

    #[test]
    fn test_without_preserves_order() {
        let next = sample().without(TaskId(2));
        assert_eq!(titles(&next), ["a", "c"]);
    }

    #[test]
    fn test_with_title_replaces_only_title() {
        let list = sample().with_toggled(TaskId(3));
        let next = list.with_title(TaskId(3), "renamed");

        let task = next.find(TaskId(3)).unwrap();
        assert_eq!(task.title(), "renamed");
        assert!(task.is_done());
        assert_eq!(titles(&next), ["a", "b", "renamed"]);
    }

    #[test]
    fn test_title_lookup_is_exact() {
        let list = sample();

        assert!(list.contains_title("a"));
        assert!(!list.contains_title("A"));
        assert!(!list.contains_title("a "));
        assert!(!list.contains_title_except("a", TaskId(1)));
        assert!(list.contains_title_except("a", TaskId(2)));
    }

    #[test]
    fn test_done_count() {
        let list = sample().with_toggled(TaskId(1)).with_toggled(TaskId(3));
        assert_eq!(list.done_count(), 2);
        assert_eq!(list.len(), 3);
    }
}
