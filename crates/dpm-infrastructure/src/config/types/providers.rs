//! Provider configuration types

use dpm_application::ports::registry::ProductProviderConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Provider selection and per-provider settings
///
/// ```toml
/// [providers]
/// enabled = ["configuration", "real-time-feed"]
///
/// [providers.settings.configuration]
/// stockScoreThreshold = 7.5
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    /// Providers to load, in catalog order; empty loads every registered provider
    pub enabled: Vec<String>,

    /// Settings table per provider name
    pub settings: BTreeMap<String, BTreeMap<String, Value>>,
}

impl ProvidersConfig {
    /// Registry configuration for the named provider
    ///
    /// Scalar settings are flattened to strings; strings are taken verbatim.
    pub fn registry_config(&self, provider: &str) -> ProductProviderConfig {
        let settings: HashMap<String, String> = self
            .settings
            .get(provider)
            .map(|table| {
                table
                    .iter()
                    .map(|(key, value)| (key.clone(), setting_to_string(value)))
                    .collect()
            })
            .unwrap_or_default();

        ProductProviderConfig::new(provider).with_settings(settings)
    }
}

fn setting_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
