//! Economy status adapter with a fixed answer.

use crate::ports::EconomyStatus;

/// Reports a fixed economy availability, typically from process configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticEconomy {
    active: bool,
}

impl StaticEconomy {
    pub fn active() -> Self {
        Self { active: true }
    }

    pub fn inactive() -> Self {
        Self { active: false }
    }
}

impl From<bool> for StaticEconomy {
    fn from(active: bool) -> Self {
        Self { active }
    }
}

impl EconomyStatus for StaticEconomy {
    fn is_active(&self) -> bool {
        self.active
    }
}
