//! Task id generators.

use chrono::Utc;

use crate::domain::entities::TaskId;
use crate::domain::ports::IdGenerator;
use crate::infrastructure::config::IdSource;

/// Plain counter starting at 1.
#[derive(Debug, Default)]
pub struct SequentialIds {
    last: u64,
}

impl SequentialIds {
    #[must_use]
    pub const fn new() -> Self {
        Self { last: 0 }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> TaskId {
        self.last += 1;
        TaskId(self.last)
    }
}

/// Millisecond timestamps, bumped past the previous id when two tasks are
/// created within the same millisecond or the clock steps backwards.
pub struct ClockIds {
    last: u64,
    now_ms: Box<dyn FnMut() -> u64 + Send>,
}

impl std::fmt::Debug for ClockIds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClockIds")
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}

impl ClockIds {
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(|| u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0))
    }

    /// Uses `now_ms` instead of the system clock.
    #[must_use]
    pub fn with_clock(now_ms: impl FnMut() -> u64 + Send + 'static) -> Self {
        Self {
            last: 0,
            now_ms: Box::new(now_ms),
        }
    }
}

impl Default for ClockIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for ClockIds {
    fn next_id(&mut self) -> TaskId {
        let now = (self.now_ms)();
        self.last = now.max(self.last + 1);
        TaskId(self.last)
    }
}

/// Builds the generator selected in the configuration.
#[must_use]
pub fn id_generator(source: IdSource) -> Box<dyn IdGenerator> {
    match source {
        IdSource::Sequential => Box::new(SequentialIds::new()),
        IdSource::Clock => Box::new(ClockIds::new()),
    }
}
