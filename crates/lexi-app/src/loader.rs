use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

#[derive(Deserialize)]
struct WordList {
    words: Vec<String>,
}

/// Load the suggestion word list (`{"words": [...]}`)
pub fn load_words(path: &Path) -> anyhow::Result<Vec<String>> {
    tracing::info!("Loading word list from {}", path.display());
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;
    let list: WordList = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse word list {}", path.display()))?;
    tracing::info!("Loaded {} words", list.words.len());
    Ok(list.words)
}

/// Like [`load_words`], but an unusable list only costs the suggestions
pub fn load_words_or_empty(path: &Path) -> Vec<String> {
    load_words(path).unwrap_or_else(|e| {
        tracing::warn!("{e:#}");
        tracing::warn!("Starting without suggestions");
        Vec::new()
    })
}
