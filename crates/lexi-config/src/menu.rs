use std::env;

use serde::{Deserialize, Serialize};

fn default_command() -> String {
    "rofi".to_string()
}

fn default_args() -> Vec<String> {
    ["-dmenu", "-lines", "10", "-no-fixed-num-lines", "-i"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_prompt_flag() -> String {
    "-p".to_string()
}

fn default_no_custom_flag() -> String {
    "-no-custom".to_string()
}

fn default_back_label() -> String {
    "⬅ Go back.".to_string()
}

fn default_define_prompt() -> String {
    "define:".to_string()
}

/// dmenu-compatible picker invocation
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct MenuConfig {
    #[serde(default = "default_command")]
    pub command: String,
    #[serde(default = "default_args")]
    pub args: Vec<String>,
    #[serde(default = "default_prompt_flag")]
    pub prompt_flag: String,
    /// Flag that forbids free-text entry; left out for the word prompt
    #[serde(default = "default_no_custom_flag")]
    pub no_custom_flag: String,
    #[serde(default = "default_back_label")]
    pub back_label: String,
    #[serde(default = "default_define_prompt")]
    pub define_prompt: String,
}

impl MenuConfig {
    pub fn apply_env(&mut self) {
        if let Ok(command) = env::var("LEXI_MENU_COMMAND") {
            self.command = command;
        }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            args: default_args(),
            prompt_flag: default_prompt_flag(),
            no_custom_flag: default_no_custom_flag(),
            back_label: default_back_label(),
            define_prompt: default_define_prompt(),
        }
    }
}
