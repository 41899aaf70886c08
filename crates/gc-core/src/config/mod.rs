//! Session configuration domain model.

use serde::{Deserialize, Serialize};

/// Tunables for one check-in session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Reject fixes whose reported accuracy is worse than this many
    /// meters and keep acquiring. `None` accepts any successful fix,
    /// which matches the reference behavior.
    pub max_accuracy_meters: Option<f64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_accuracy_meters: None,
        }
    }
}

impl SessionConfig {
    /// Whether a fix with the given reported accuracy is trustworthy
    /// under this configuration. Fixes without an accuracy indicator
    /// are always accepted.
    pub fn accepts_accuracy(&self, accuracy_meters: Option<f64>) -> bool {
        match (self.max_accuracy_meters, accuracy_meters) {
            (Some(max), Some(reported)) => reported <= max,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_accepts_everything() {
        let config = SessionConfig::default();
        assert!(config.accepts_accuracy(None));
        assert!(config.accepts_accuracy(Some(5000.0)));
    }

    #[test]
    fn threshold_rejects_worse_fixes_only() {
        let config = SessionConfig {
            max_accuracy_meters: Some(50.0),
        };
        assert!(config.accepts_accuracy(Some(50.0)));
        assert!(config.accepts_accuracy(Some(12.0)));
        assert!(!config.accepts_accuracy(Some(50.1)));
        // A provider that reports no accuracy is trusted.
        assert!(config.accepts_accuracy(None));
    }

    #[test]
    fn loads_from_toml() {
        let config: SessionConfig = toml::from_str("max_accuracy_meters = 25.0").unwrap();
        assert_eq!(config.max_accuracy_meters, Some(25.0));

        let config: SessionConfig = toml::from_str("").unwrap();
        assert_eq!(config.max_accuracy_meters, None);
    }
}
