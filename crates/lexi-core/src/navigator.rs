use lexi_config::navigation::NavigationConfig;

use crate::error::NavigationError;
use crate::menu::{Choice, MenuPresenter, MenuProjection, numbered};
use crate::model::LookupResult;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};
use crate::provider::{LexicalProvider, LookupError};
use crate::reflow::wrap;
use crate::state::{NavigationState, Session};
use crate::suggest::SuggestionResolver;

const DEFAULT_DEFINE_PROMPT: &str = "define:";

/// Drives the lookup menus until the user leaves
pub struct Navigator<P, M> {
    provider: P,
    menu: MenuProjection<M>,
    suggestions: SuggestionResolver,
    preprocessor: Box<dyn Preprocessor>,
    words: Vec<String>,
    config: NavigationConfig,
    define_prompt: String,
    session: Session,
}

impl<P, M> Navigator<P, M>
where
    P: LexicalProvider,
    M: MenuPresenter,
{
    /// `words` is the suggestion dictionary, consulted only for unknown words
    pub fn new(
        provider: P,
        menu: MenuProjection<M>,
        words: Vec<String>,
        config: NavigationConfig,
    ) -> Self {
        Self {
            provider,
            menu,
            suggestions: SuggestionResolver::default(),
            preprocessor: Box::new(DefaultPreprocessor),
            words,
            config,
            define_prompt: DEFAULT_DEFINE_PROMPT.to_string(),
            session: Session::new(),
        }
    }

    pub fn with_define_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.define_prompt = prompt.into();
        self
    }

    pub fn with_suggestions(mut self, suggestions: SuggestionResolver) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run until the session reaches [`NavigationState::Exit`]
    pub async fn run(&mut self) -> Result<(), NavigationError> {
        tracing::info!("[NAVIGATOR] Starting session");

        while self.session.state() != NavigationState::Exit {
            let from = self.session.state();
            let to = self.step().await?;
            tracing::debug!(?from, ?to, "[NAVIGATOR] Transition");
            self.session.set_state(to);
        }

        tracing::info!("[NAVIGATOR] Session finished");
        Ok(())
    }

    /// Render the current screen once and return the next state
    pub async fn step(&mut self) -> Result<NavigationState, NavigationError> {
        match self.session.state() {
            NavigationState::Exit => Ok(NavigationState::Exit),
            NavigationState::Define => self.define().await,
            NavigationState::WordNotFound => self.word_not_found().await,
            NavigationState::Categories => self.categories().await,
            NavigationState::Definitions => self.definitions().await,
            NavigationState::DetailedDefinition => self.detailed_definition().await,
        }
    }

    async fn define(&mut self) -> Result<NavigationState, NavigationError> {
        let Some(input) = self.menu.prompt_word(&self.define_prompt).await? else {
            tracing::debug!("No word entered");
            return Ok(NavigationState::Exit);
        };

        let query = self.preprocessor.process(&input);
        if query.is_empty() {
            return Ok(NavigationState::Exit);
        }

        self.session.begin_query(query);
        self.lookup().await
    }

    async fn word_not_found(&mut self) -> Result<NavigationState, NavigationError> {
        let query = self.session.query().to_string();
        let suggestions = self
            .suggestions
            .suggest(&query, &self.words, self.config.suggestion_count);
        tracing::debug!("{} suggestions for '{}'", suggestions.len(), query);

        let lines = numbered(suggestions.iter().map(|s| &s.word));
        let prompt = format!("ERR: Could not find \"{query}\". Did you mean:");
        let choice = bounded(self.menu.render(&lines, &prompt).await?, lines.len());

        match choice {
            Choice::Index(i) => {
                let word = self.preprocessor.process(&suggestions[i].word);
                self.session.begin_query(word);
                self.lookup().await
            }
            other => Ok(self.session.state().transition(other)),
        }
    }

    async fn categories(&mut self) -> Result<NavigationState, NavigationError> {
        let lines = numbered(self.session.result()?.categories());
        let choice = bounded(
            self.menu.render(&lines, self.session.query()).await?,
            lines.len(),
        );

        if let Choice::Index(i) = choice {
            self.session.select_sense(i);
        }
        Ok(self.session.state().transition(choice))
    }

    async fn definitions(&mut self) -> Result<NavigationState, NavigationError> {
        let sense = self.session.selected_sense()?;
        let definitions = self
            .session
            .result()?
            .definitions_for(sense, self.config.definitions_per_category)?;
        let lines = numbered(definitions);

        let choice = bounded(
            self.menu.render(&lines, self.session.query()).await?,
            lines.len(),
        );

        if let Choice::Index(i) = choice {
            self.session.select_definition(i);
        }
        Ok(self.session.state().transition(choice))
    }

    async fn detailed_definition(&mut self) -> Result<NavigationState, NavigationError> {
        let sense = self.session.selected_sense()?;
        let index = self.session.selected_definition()?;
        let definitions = self
            .session
            .result()?
            .definitions_for(sense, self.config.definitions_per_category)?;
        let text = definitions.get(index).ok_or(NavigationError::IndexError {
            what: "definition",
            index,
            len: definitions.len(),
        })?;

        let lines = numbered(wrap(text, self.config.wrap_width).lines());
        let choice = bounded(
            self.menu.render(&lines, self.session.query()).await?,
            lines.len(),
        );

        Ok(self.session.state().transition(choice))
    }

    /// Look up the session query: Categories when found, WordNotFound when not
    async fn lookup(&mut self) -> Result<NavigationState, NavigationError> {
        let query = self.session.query().to_string();
        tracing::debug!("Looking up '{}' ({})", query, self.provider.language());

        let outcome = self
            .provider
            .lookup(&query)
            .await
            .and_then(|raw| LookupResult::from_raw(&query, raw));

        match outcome {
            Ok(result) => {
                tracing::info!("Found {} categories for '{}'", result.len(), query);
                self.session.set_result(result);
                Ok(NavigationState::Categories)
            }
            Err(LookupError::NotFound(_)) => {
                tracing::info!("No entry for '{}'", query);
                Ok(NavigationState::WordNotFound)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// An index the menu did not offer counts as cancellation
fn bounded(choice: Choice, len: usize) -> Choice {
    match choice {
        Choice::Index(i) if i >= len => Choice::Cancel,
        other => other,
    }
}
