use std::time::Duration;

pub const DEFAULT_UNIT_DELAY: Duration = Duration::from_secs(2);
pub const DEFAULT_GLOBAL_TIMEOUT: Duration = Duration::from_secs(5);

/// Timing knobs for the preparation simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StallConfig {
    /// Preparation time per ordered unit.
    pub unit_delay: Duration,
    /// Maximum time the counter waits for all preparation messages,
    /// measured once from the start of the wait.
    pub global_timeout: Duration,
}

impl Default for StallConfig {
    fn default() -> Self {
        Self {
            unit_delay: DEFAULT_UNIT_DELAY,
            global_timeout: DEFAULT_GLOBAL_TIMEOUT,
        }
    }
}

impl StallConfig {
    pub fn new(unit_delay: Duration, global_timeout: Duration) -> Self {
        Self {
            unit_delay,
            global_timeout,
        }
    }
}
