use serde::{Deserialize, Serialize};

fn default_definitions_per_category() -> usize {
    3
}

fn default_wrap_width() -> usize {
    40
}

fn default_suggestion_count() -> usize {
    3
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct NavigationConfig {
    /// Definitions listed per lexical category
    #[serde(alias = "num_defns", default = "default_definitions_per_category")]
    pub definitions_per_category: usize,
    /// Characters per line in the detailed definition view
    #[serde(alias = "chars_per_line", default = "default_wrap_width")]
    pub wrap_width: usize,
    /// "Did you mean" entries shown when a word is not found
    #[serde(default = "default_suggestion_count")]
    pub suggestion_count: usize,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            definitions_per_category: default_definitions_per_category(),
            wrap_width: default_wrap_width(),
            suggestion_count: default_suggestion_count(),
        }
    }
}
