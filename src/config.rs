use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BankConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_menu_title")]
    pub menu_title: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_menu_title() -> String {
    "--- Bank Menu ---".to_string()
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            menu_title: default_menu_title(),
        }
    }
}

impl BankConfig {
    /// Read `path` if given; any problem falls back to defaults.
    /// Never writes to disk.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(s) => match toml::from_str(&s) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Error parsing config: {}. Using Defaults.", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Error reading config '{}': {}. Using Defaults.", path.display(), e);
                Self::default()
            }
        }
    }
}
