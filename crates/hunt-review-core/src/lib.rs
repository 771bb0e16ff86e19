//! Hunt Review Core
//!
//! Everything the reviewer dashboard needs that is not rendering: the API
//! records, the session store, the HTTP client, and the fetch cycles behind
//! the dashboard and hunt detail views.

pub mod api;
pub mod assignment;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod generation;
pub mod guard;
pub mod hunt_detail;
pub mod lang;
pub mod map;
pub mod models;
pub mod routes;
pub mod session;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

use thiserror::Error;

pub use api::{HttpReviewApi, ReviewApi};
pub use config::ClientConfig;
pub use generation::{FetchGeneration, FetchTicket};
pub use lang::EditorMode;
pub use models::{Challenge, Comment, Hunt, HuntId, User};
pub use session::{MemoryStorage, SessionStorage, SessionStore, StorageError};
pub use state::LoadState;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request failed with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Sign-in response carried no user record")]
    EmptyAuthResponse,
}

impl ClientError {
    /// Message shown to the reviewer: the server's own message when the
    /// response carried one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
