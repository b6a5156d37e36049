//! Owner of the canonical task list.
//!
//! The store is the only writer of the list. Each operation swaps in a new
//! [`TaskList`] snapshot (or keeps the current one on a no-op), so anything
//! holding an earlier snapshot keeps a consistent view of it.

use tracing::{debug, info, warn};

use crate::domain::entities::TaskId;
use crate::domain::errors::TaskError;
use crate::domain::ports::IdGenerator;
use crate::domain::{DuplicatePolicy, RemovalRequest, Task, TaskList};

pub struct TaskStore {
    tasks: TaskList,
    ids: Box<dyn IdGenerator>,
    policy: DuplicatePolicy,
}

impl std::fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskStore")
            .field("tasks", &self.tasks)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl TaskStore {
    #[must_use]
    pub fn new(ids: Box<dyn IdGenerator>, policy: DuplicatePolicy) -> Self {
        Self {
            tasks: TaskList::new(),
            ids,
            policy,
        }
    }

    /// Current snapshot. Cheap to clone and never changes afterwards.
    #[must_use]
    pub fn snapshot(&self) -> TaskList {
        self.tasks.clone()
    }

    #[must_use]
    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    #[must_use]
    pub const fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends a pending task titled `title`.
    ///
    /// The title is taken as-is, without trimming.
    ///
    /// # Errors
    /// Returns [`TaskError::DuplicateTitle`] if any task already has exactly
    /// this title. The list is left unchanged.
    pub fn add(&mut self, title: &str) -> Result<TaskId, TaskError> {
        if self.tasks.contains_title(title) {
            info!(title = %title, "Rejected duplicate task");
            return Err(TaskError::duplicate(title));
        }

        let id = self.ids.next_id();
        self.tasks = self.tasks.appended(Task::new(id, title));
        debug!(id = %id, count = self.tasks.len(), "Task added");
        Ok(id)
    }

    /// Flips the done flag of the task with `id`.
    ///
    /// Returns false when no task matches; that is not an error.
    pub fn toggle_done(&mut self, id: TaskId) -> bool {
        let next = self.tasks.with_toggled(id);
        if next.ptr_eq(&self.tasks) {
            debug!(id = %id, "Toggle ignored, task not found");
            return false;
        }
        self.tasks = next;
        debug!(id = %id, "Task toggled");
        true
    }

    /// First half of removal: names the task without touching the list.
    ///
    /// # Errors
    /// Returns [`TaskError::NotFound`] if no task has `id`.
    pub fn request_removal(&self, id: TaskId) -> Result<RemovalRequest, TaskError> {
        self.tasks
            .find(id)
            .map(RemovalRequest::new)
            .ok_or(TaskError::NotFound { id })
    }

    /// Second half of removal, once the user said yes.
    pub fn confirm_removal(&mut self, request: &RemovalRequest) -> bool {
        self.remove(request.id())
    }

    /// Removes the task with `id`, keeping the order of the rest.
    ///
    /// Returns false when no task matches.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let next = self.tasks.without(id);
        if next.ptr_eq(&self.tasks) {
            debug!(id = %id, "Remove ignored, task not found");
            return false;
        }
        self.tasks = next;
        debug!(id = %id, count = self.tasks.len(), "Task removed");
        true
    }

    /// Renames the task with `id`.
    ///
    /// An unknown id is a silent no-op.
    ///
    /// # Errors
    /// Returns [`TaskError::DuplicateTitle`] if the new title collides under
    /// the configured [`DuplicatePolicy`]. The list is left unchanged.
    pub fn edit(&mut self, id: TaskId, new_title: &str) -> Result<(), TaskError> {
        if self.policy.edit_collides(&self.tasks, id, new_title) {
            warn!(id = %id, title = %new_title, policy = %self.policy, "Rejected duplicate rename");
            return Err(TaskError::duplicate(new_title));
        }

        let next = self.tasks.with_title(id, new_title);
        if next.ptr_eq(&self.tasks) {
            debug!(id = %id, "Edit ignored, task not found");
        } else {
            self.tasks = next;
            debug!(id = %id, "Task renamed");
        }
        Ok(())
    }
}


#[cfg(test)]
mod proptests {
    use std::collections::HashSet;

    use proptest::prelude::*;
    use proptest::sample::Index;

    use super::*;
    use crate::infrastructure::ids::SequentialIds;

    #[derive(Debug, Clone)]
    enum Op {
        Add(String),
        Toggle(u64),
        Remove(u64),
        Edit(u64, String),
    }

    // A tiny alphabet so generated titles collide often.
    fn arb_title() -> impl Strategy<Value = String> {
        "[a-c]{0,2}"
    }

    fn arb_policy() -> impl Strategy<Value = DuplicatePolicy> {
        prop_oneof![Just(DuplicatePolicy::Strict), Just(DuplicatePolicy::ExemptSelf)]
    }

    fn arb_seed() -> impl Strategy<Value = (Vec<String>, Vec<bool>)> {
        (
            proptest::collection::vec(arb_title(), 0..8),
            proptest::collection::vec(any::<bool>(), 8),
        )
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            arb_title().prop_map(Op::Add),
            (1_u64..12).prop_map(Op::Toggle),
            (1_u64..12).prop_map(Op::Remove),
            (1_u64..12, arb_title()).prop_map(|(id, title)| Op::Edit(id, title)),
        ]
    }

    fn seeded((titles, flags): &(Vec<String>, Vec<bool>), policy: DuplicatePolicy) -> TaskStore {
        let mut store = TaskStore::new(Box::new(SequentialIds::new()), policy);
        for (title, done) in titles.iter().zip(flags) {
            if let Ok(id) = store.add(title) {
                if *done {
                    store.toggle_done(id);
                }
            }
        }
        store
    }

    fn titles_unique(store: &TaskStore) -> bool {
        let mut seen = HashSet::new();
        store.tasks().iter().all(|task| seen.insert(task.title()))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn add_of_new_title_appends_one_pending_task(
            seed in arb_seed(),
            policy in arb_policy(),
            title in arb_title(),
        ) {
            let mut store = seeded(&seed, policy);
            prop_assume!(!store.tasks().contains_title(&title));
            let before = store.snapshot();

            let result = store.add(&title);

            prop_assert!(result.is_ok());
            prop_assert_eq!(store.len(), before.len() + 1);
            prop_assert!(before.iter().eq(store.tasks().iter().take(before.len())));
            let last = store.tasks().get(before.len());
            prop_assert_eq!(last.map(Task::title), Some(title.as_str()));
            prop_assert_eq!(last.map(Task::is_done), Some(false));
            prop_assert_eq!(last.map(Task::id), result.ok());
        }

        #[test]
        fn add_of_existing_title_keeps_snapshot(
            seed in arb_seed(),
            policy in arb_policy(),
            pick in any::<Index>(),
        ) {
            let mut store = seeded(&seed, policy);
            prop_assume!(!store.is_empty());
            let before = store.snapshot();
            let existing = before.iter().nth(pick.index(before.len())).map(|t| t.title().to_string());
            let title = existing.unwrap_or_default();

            prop_assert_eq!(store.add(&title), Err(TaskError::duplicate(&title)));
            prop_assert!(store.tasks().ptr_eq(&before));
        }

        #[test]
        fn toggle_flips_exactly_one_task(
            seed in arb_seed(),
            policy in arb_policy(),
            id in 1_u64..12,
        ) {
            let mut store = seeded(&seed, policy);
            let before = store.snapshot();
            let id = TaskId(id);

            let hit = store.toggle_done(id);

            if before.find(id).is_some() {
                prop_assert!(hit);
                prop_assert_eq!(store.len(), before.len());
                for (old, new) in before.iter().zip(store.tasks()) {
                    prop_assert_eq!(old.id(), new.id());
                    prop_assert_eq!(old.title(), new.title());
                    prop_assert_eq!(old.is_done() != new.is_done(), old.id() == id);
                }
            } else {
                prop_assert!(!hit);
                prop_assert!(store.tasks().ptr_eq(&before));
            }
        }

        #[test]
        fn confirmed_removal_keeps_order_of_the_rest(
            seed in arb_seed(),
            policy in arb_policy(),
            id in 1_u64..12,
        ) {
            let mut store = seeded(&seed, policy);
            let before = store.snapshot();
            let id = TaskId(id);

            match store.request_removal(id) {
                Ok(request) => {
                    prop_assert!(store.tasks().ptr_eq(&before));
                    prop_assert!(store.confirm_removal(&request));
                    let expected: Vec<Task> = before.iter().filter(|t| t.id() != id).cloned().collect();
                    let actual: Vec<Task> = store.tasks().iter().cloned().collect();
                    prop_assert_eq!(actual, expected);
                }
                Err(err) => {
                    prop_assert_eq!(err, TaskError::NotFound { id });
                    prop_assert!(!store.remove(id));
                    prop_assert!(store.tasks().ptr_eq(&before));
                }
            }
        }

        #[test]
        fn edit_replaces_only_the_title(
            seed in arb_seed(),
            policy in arb_policy(),
            id in 1_u64..12,
            title in arb_title(),
        ) {
            let mut store = seeded(&seed, policy);
            let before = store.snapshot();
            let id = TaskId(id);
            let collides = before.iter().any(|t| {
                t.title() == title && (policy == DuplicatePolicy::Strict || t.id() != id)
            });

            let result = store.edit(id, &title);

            if collides {
                prop_assert_eq!(result, Err(TaskError::duplicate(&title)));
                prop_assert!(store.tasks().ptr_eq(&before));
            } else {
                prop_assert!(result.is_ok());
                prop_assert_eq!(store.len(), before.len());
                for (old, new) in before.iter().zip(store.tasks()) {
                    prop_assert_eq!(old.id(), new.id());
                    prop_assert_eq!(old.is_done(), new.is_done());
                    let expected = if old.id() == id { title.as_str() } else { old.title() };
                    prop_assert_eq!(new.title(), expected);
                }
            }
        }

        #[test]
        fn titles_stay_unique_across_operation_sequences(
            policy in arb_policy(),
            ops in proptest::collection::vec(arb_op(), 0..60),
        ) {
            let mut store = TaskStore::new(Box::new(SequentialIds::new()), policy);
            for op in ops {
                let before = store.snapshot();
                let rejected = match op {
                    Op::Add(title) => store.add(&title).is_err(),
                    Op::Toggle(id) => !store.toggle_done(TaskId(id)),
                    Op::Remove(id) => !store.remove(TaskId(id)),
                    Op::Edit(id, title) => store.edit(TaskId(id), &title).is_err(),
                };
                if rejected {
                    prop_assert!(store.tasks().ptr_eq(&before));
                }
                prop_assert!(titles_unique(&store));
            }
        }
    }
}
