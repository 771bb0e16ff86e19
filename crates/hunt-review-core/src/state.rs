//! Outcome of a view's fetch cycle

use crate::ClientResult;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    /// Settle a finished cycle; errors become the reviewer-facing message
    pub fn from_result(result: ClientResult<T>, fallback: &str) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(e) => {
                tracing::error!("Fetch cycle failed: {}", e);
                LoadState::Failed(e.user_message(fallback))
            }
        }
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn loaded_mut(&mut self) -> Option<&mut T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}
