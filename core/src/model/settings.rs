use serde::{Deserialize, Serialize};

use crate::model::config::AppConfig;

/// Contents of the settings file. `profile` is the configuration a session starts from
/// and returns to on reset; its `refectory_days` is replaced by the period's business days
/// while `use_calculated_days` is set.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Settings {
    pub profile: AppConfig,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            profile: AppConfig::default_for(0),
            log_level: None,
        }
    }
}
