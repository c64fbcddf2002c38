use serde::{Deserialize, Serialize};

use crate::error::NavigationError;
use crate::provider::LookupError;

// Provider wire model. Every level defaults so partial payloads still decode.

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawLookup {
    pub results: Vec<RawHeadword>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawHeadword {
    pub id: String,
    pub lexical_entries: Vec<RawLexicalEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawLexicalEntry {
    pub lexical_category: RawCategory,
    pub entries: Vec<RawEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCategory {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawEntry {
    pub senses: Vec<RawSense>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSense {
    pub definitions: Vec<String>,
}

/// One lexical category of a word with its definitions, in provider order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sense {
    pub category: String,
    pub definitions: Vec<String>,
}

/// Successful lookup. Never empty, and no sense is without definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    senses: Vec<Sense>,
}

impl LookupResult {
    /// Build from a provider payload.
    ///
    /// Each lexical entry becomes one [`Sense`]. Only the first definition of
    /// every raw sense is kept, with its whitespace collapsed; raw senses whose
    /// first definition is missing or blank are dropped, and so are lexical
    /// entries left empty. Fails with [`LookupError::NotFound`] when nothing
    /// survives.
    pub fn from_raw(query: &str, raw: RawLookup) -> Result<Self, LookupError> {
        let senses: Vec<Sense> = raw
            .results
            .into_iter()
            .flat_map(|headword| headword.lexical_entries)
            .filter_map(|lexical| {
                let category = match single_line(&lexical.lexical_category.text) {
                    text if text.is_empty() => single_line(&lexical.lexical_category.id),
                    text => text,
                };

                let definitions: Vec<String> = lexical
                    .entries
                    .into_iter()
                    .flat_map(|entry| entry.senses)
                    .filter_map(|sense| sense.definitions.first().map(|d| single_line(d)))
                    .filter(|definition| !definition.is_empty())
                    .collect();

                if definitions.is_empty() {
                    tracing::debug!("Dropping category '{}' without definitions", category);
                    return None;
                }

                Some(Sense {
                    category,
                    definitions,
                })
            })
            .collect();

        Self::from_senses(senses).ok_or_else(|| LookupError::NotFound(query.to_string()))
    }

    /// Wrap already-built senses, applying the same filtering as [`Self::from_raw`]
    pub fn from_senses(senses: Vec<Sense>) -> Option<Self> {
        let senses: Vec<Sense> = senses
            .into_iter()
            .filter(|sense| !sense.definitions.is_empty())
            .collect();

        if senses.is_empty() {
            None
        } else {
            Some(Self { senses })
        }
    }

    pub fn senses(&self) -> &[Sense] {
        &self.senses
    }

    pub fn len(&self) -> usize {
        self.senses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senses.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.senses.iter().map(|sense| sense.category.as_str())
    }

    pub fn sense(&self, index: usize) -> Result<&Sense, NavigationError> {
        self.senses.get(index).ok_or(NavigationError::IndexError {
            what: "sense",
            index,
            len: self.senses.len(),
        })
    }

    /// First `limit` definitions of a sense
    pub fn definitions_for(
        &self,
        sense_index: usize,
        limit: usize,
    ) -> Result<&[String], NavigationError> {
        let sense = self.sense(sense_index)?;
        let end = limit.min(sense.definitions.len());
        Ok(&sense.definitions[..end])
    }
}

/// Menu entries are newline separated, so provider text must stay on one line
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
