use crate::menu::PresenterError;
use crate::provider::LookupError;

/// Failures that end a navigation session
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    /// A stored selection no longer points into the data it was taken from
    #[error("Stale {what} selection: index {index} out of {len}")]
    IndexError {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("No {what} selected")]
    Missing { what: &'static str },

    #[error("Lookup failed: {0}")]
    Provider(#[from] LookupError),

    #[error("Menu failed: {0}")]
    Presenter(#[from] PresenterError),
}
