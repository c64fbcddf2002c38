use crate::error::NavigationError;
use crate::menu::Choice;
use crate::model::LookupResult;

/// Screens of the lookup flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationState {
    Exit,
    WordNotFound,
    Define,
    Categories,
    Definitions,
    DetailedDefinition,
}

impl NavigationState {
    /// Where the back entry leads
    pub fn predecessor(self) -> NavigationState {
        match self {
            NavigationState::Exit | NavigationState::Define => NavigationState::Exit,
            NavigationState::WordNotFound | NavigationState::Categories => NavigationState::Define,
            NavigationState::Definitions => NavigationState::Categories,
            NavigationState::DetailedDefinition => NavigationState::Definitions,
        }
    }

    /// Where a successful pick leads
    pub fn successor(self) -> NavigationState {
        match self {
            NavigationState::Exit => NavigationState::Exit,
            NavigationState::Define | NavigationState::WordNotFound => NavigationState::Categories,
            NavigationState::Categories => NavigationState::Definitions,
            NavigationState::Definitions | NavigationState::DetailedDefinition => {
                NavigationState::DetailedDefinition
            }
        }
    }

    pub fn transition(self, choice: Choice) -> NavigationState {
        match choice {
            Choice::Back => self.predecessor(),
            Choice::Index(_) => self.successor(),
            Choice::Cancel => NavigationState::Exit,
        }
    }
}

/// Mutable record of one interactive session
#[derive(Debug, Clone)]
pub struct Session {
    state: NavigationState,
    query: String,
    result: Option<LookupResult>,
    sense: Option<usize>,
    definition: Option<usize>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: NavigationState::Define,
            query: String::new(),
            result: None,
            sense: None,
            definition: None,
        }
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: NavigationState) {
        self.state = state;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Switch to a new query, dropping the result and every selection
    pub fn begin_query(&mut self, query: String) {
        self.query = query;
        self.result = None;
        self.sense = None;
        self.definition = None;
    }

    pub fn set_result(&mut self, result: LookupResult) {
        self.result = Some(result);
        self.sense = None;
        self.definition = None;
    }

    pub fn select_sense(&mut self, index: usize) {
        self.sense = Some(index);
        self.definition = None;
    }

    pub fn select_definition(&mut self, index: usize) {
        self.definition = Some(index);
    }

    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    pub fn result(&self) -> Result<&LookupResult, NavigationError> {
        self.result
            .as_ref()
            .ok_or(NavigationError::Missing { what: "lookup result" })
    }

    pub fn selected_sense(&self) -> Result<usize, NavigationError> {
        self.sense.ok_or(NavigationError::Missing { what: "sense" })
    }

    pub fn selected_definition(&self) -> Result<usize, NavigationError> {
        self.definition
            .ok_or(NavigationError::Missing { what: "definition" })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
