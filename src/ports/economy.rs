//! Economy Port - Whether a payment integration is available.

/// Port reporting whether teleport costs can be charged.
pub trait EconomyStatus: Send + Sync {
    fn is_active(&self) -> bool;
}
