//! Title uniqueness rule applied to edits.

use serde::{Deserialize, Serialize};

use crate::domain::entities::TaskId;
use crate::domain::task_list::TaskList;

/// Decides whether renaming a task to `title` would collide.
///
/// Adding always uses the plain check; only edits are affected by the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Any task with the same title rejects the edit, the edited task
    /// included. Re-submitting an unchanged title is reported as a duplicate.
    #[default]
    Strict,
    /// The edited task is ignored, so an unchanged title is accepted.
    ExemptSelf,
}

impl DuplicatePolicy {
    #[must_use]
    pub fn edit_collides(self, tasks: &TaskList, id: TaskId, title: &str) -> bool {
        match self {
            Self::Strict => tasks.contains_title(title),
            Self::ExemptSelf => tasks.contains_title_except(title, id),
        }
    }
}

impl std::fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::ExemptSelf => write!(f, "exempt_self"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Task;

    fn list() -> TaskList {
        TaskList::from(vec![Task::new(1_u64, "a"), Task::new(2_u64, "b")])
    }

    #[test]
    fn test_strict_rejects_own_title() {
        assert!(DuplicatePolicy::Strict.edit_collides(&list(), TaskId(1), "a"));
    }

    #[test]
    fn test_exempt_self_accepts_own_title() {
        assert!(!DuplicatePolicy::ExemptSelf.edit_collides(&list(), TaskId(1), "a"));
    }

    #[test]
    fn test_both_reject_other_title() {
        assert!(DuplicatePolicy::Strict.edit_collides(&list(), TaskId(1), "b"));
        assert!(DuplicatePolicy::ExemptSelf.edit_collides(&list(), TaskId(1), "b"));
    }

    #[test]
    fn test_parse_from_toml_value() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: DuplicatePolicy,
        }
        let parsed: Wrapper = toml::from_str("policy = \"exempt_self\"").unwrap();
        assert_eq!(parsed.policy, DuplicatePolicy::ExemptSelf);
    }
}
