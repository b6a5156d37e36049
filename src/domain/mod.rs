//! Domain layer with core entities, snapshot operations and port definitions.

/// Blocking dialog definitions.
pub mod dialog;
/// Title uniqueness rule.
pub mod duplicate_policy;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Port definitions.
pub mod ports;
/// Task list snapshots.
pub mod task_list;

pub use dialog::{ConfirmChoice, Dialog, DialogKind, DialogOutcome};
pub use duplicate_policy::DuplicatePolicy;
pub use entities::{Task, TaskId};
pub use errors::TaskError;
pub use ports::IdGenerator;
pub use task_list::{RemovalRequest, TaskList};
