pub mod error;
pub mod menu;
pub mod model;
pub mod navigator;
pub mod preprocess;
pub mod provider;
pub mod reflow;
pub mod state;
pub mod suggest;

#[cfg(test)]
mod tests;

pub use error::NavigationError;
pub use menu::{Choice, MenuPresenter, MenuProjection, MenuRequest, PresenterError};
pub use model::{LookupResult, RawLookup, Sense};
pub use navigator::Navigator;
pub use provider::{LexicalProvider, LookupError};
pub use state::{NavigationState, Session};
pub use suggest::{IndelRatio, Similarity, Suggestion, SuggestionResolver};
