use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::menu::{MenuPresenter, MenuRequest, PresenterError};
use crate::model::{RawCategory, RawEntry, RawHeadword, RawLexicalEntry, RawLookup, RawSense};
use crate::provider::{LexicalProvider, LookupError};

pub const BACK: &str = "⬅ Go back.";

/// One screen as the presenter received it
#[derive(Debug, Clone)]
pub struct Shown {
    pub lines: Vec<String>,
    pub prompt: String,
    pub allow_custom: bool,
}

/// Presenter that replays canned answers and records every screen.
/// Runs out into cancellation.
pub struct ScriptedMenu {
    answers: Mutex<VecDeque<Option<String>>>,
    shown: Arc<Mutex<Vec<Shown>>>,
}

impl ScriptedMenu {
    pub fn new(answers: &[Option<&str>]) -> (Self, Arc<Mutex<Vec<Shown>>>) {
        let shown = Arc::new(Mutex::new(Vec::new()));
        let menu = Self {
            answers: Mutex::new(answers.iter().map(|a| a.map(str::to_string)).collect()),
            shown: shown.clone(),
        };
        (menu, shown)
    }
}

#[async_trait]
impl MenuPresenter for ScriptedMenu {
    async fn present(&self, request: MenuRequest<'_>) -> Result<Option<String>, PresenterError> {
        self.shown.lock().unwrap().push(Shown {
            lines: request.lines.to_vec(),
            prompt: request.prompt.to_string(),
            allow_custom: request.allow_custom,
        });
        Ok(self.answers.lock().unwrap().pop_front().flatten())
    }
}

/// Presenter whose picker program always fails
pub struct FailingMenu;

#[async_trait]
impl MenuPresenter for FailingMenu {
    async fn present(&self, _request: MenuRequest<'_>) -> Result<Option<String>, PresenterError> {
        Err(PresenterError::Failed("rofi: cannot open display".to_string()))
    }
}

/// In-memory provider that records every queried word
pub struct FakeProvider {
    entries: HashMap<String, RawLookup>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeProvider {
    pub fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let provider = Self {
            entries: HashMap::new(),
            calls: calls.clone(),
        };
        (provider, calls)
    }

    pub fn with_entry(mut self, word: &str, raw: RawLookup) -> Self {
        self.entries.insert(word.to_string(), raw);
        self
    }
}

#[async_trait]
impl LexicalProvider for FakeProvider {
    async fn lookup(&self, word: &str) -> Result<RawLookup, LookupError> {
        self.calls.lock().unwrap().push(word.to_string());
        self.entries
            .get(word)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(word.to_string()))
    }

    fn language(&self) -> &str {
        "en-gb"
    }
}

/// Provider whose every request fails at the transport level
pub struct BrokenProvider;

#[async_trait]
impl LexicalProvider for BrokenProvider {
    async fn lookup(&self, _word: &str) -> Result<RawLookup, LookupError> {
        Err(LookupError::Api("HTTP 500 Internal Server Error".to_string()))
    }

    fn language(&self) -> &str {
        "en-gb"
    }
}

/// Raw payload with one lexical entry per `(category, definitions)` pair
pub fn raw(categories: &[(&str, Vec<&str>)]) -> RawLookup {
    RawLookup {
        results: vec![RawHeadword {
            id: String::new(),
            lexical_entries: categories
                .iter()
                .map(|(category, definitions)| RawLexicalEntry {
                    lexical_category: RawCategory {
                        id: category.to_lowercase(),
                        text: category.to_string(),
                    },
                    entries: vec![RawEntry {
                        senses: definitions
                            .iter()
                            .map(|d| RawSense {
                                definitions: vec![d.to_string()],
                            })
                            .collect(),
                    }],
                })
                .collect(),
        }],
    }
}

pub fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
