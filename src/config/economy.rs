//! Economy configuration

use serde::Deserialize;

/// Economy integration settings
#[derive(Debug, Clone, Deserialize, Default)]
pub struct EconomyConfig {
    /// Whether an economy is available to charge profile costs.
    /// When disabled every profile resolves with a cost of zero.
    #[serde(default)]
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_economy_disabled_by_default() {
        assert!(!EconomyConfig::default().enabled);
    }

    #[test]
    fn test_economy_deserialization() {
        let config: EconomyConfig = serde_json::from_str(r#"{"enabled": true}"#).unwrap();
        assert!(config.enabled);
    }
}
