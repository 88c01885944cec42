/// Engine configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Effects with a priority strictly above this value abort the rest of the
    /// batch when they fail.
    pub critical_priority: i32,
}

impl EngineConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_CRITICAL_PRIORITY: i32 = 100;

    pub fn new() -> Self {
        Self {
            critical_priority: Self::DEFAULT_CRITICAL_PRIORITY,
        }
    }

    pub fn with_critical_priority(critical_priority: i32) -> Self {
        Self { critical_priority }
    }

    /// Returns true if a failure at `priority` should stop the batch.
    pub fn is_critical(&self, priority: i32) -> bool {
        priority > self.critical_priority
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
