use serde::{Deserialize, Serialize};

fn default_words_path() -> String {
    "dictionary.json".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// JSON word list used for "did you mean" suggestions
    #[serde(default = "default_words_path")]
    pub words_path: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            words_path: default_words_path(),
        }
    }
}
