use std::env;

use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "en-gb".to_string()
}

fn default_api_url() -> String {
    "https://od-api.oxforddictionaries.com/api/v2".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ProviderConfig {
    #[serde(default)]
    pub app_id: String,
    #[serde(default)]
    pub app_key: String,
    /// Language tag sent with every lookup
    #[serde(alias = "lang", default = "default_language")]
    pub language: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl ProviderConfig {
    /// Credentials from the environment win over the file
    pub fn apply_env(&mut self) {
        if let Ok(app_id) = env::var("OXFORD_APP_ID") {
            self.app_id = app_id;
        }
        if let Ok(app_key) = env::var("OXFORD_APP_KEY") {
            self.app_key = app_key;
        }
        if let Ok(language) = env::var("OXFORD_LANG") {
            self.language = language;
        }
    }

    pub fn has_credentials(&self) -> bool {
        !self.app_id.is_empty() && !self.app_key.is_empty()
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            app_key: String::new(),
            language: default_language(),
            api_url: default_api_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
