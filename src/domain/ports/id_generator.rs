//! Task identifier source.

use crate::domain::entities::TaskId;

/// Port for producing task identifiers.
///
/// Implementations must never hand out the same id twice within a session.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send {
    /// Returns a fresh identifier.
    fn next_id(&mut self) -> TaskId;
}
