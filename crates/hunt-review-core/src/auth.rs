//! Sign-in

use crate::api::ReviewApi;
use crate::models::{AuthResponse, Credentials};
use crate::session::{SessionStorage, SessionStore};
use crate::{ClientError, ClientResult};

pub const LOGIN_FALLBACK_MESSAGE: &str = "Login failed. Please check your credentials.";

/// Sign in and keep the tokens of the first returned user.
///
/// Stored tokens are only touched once the backend has answered with at
/// least one user record.
pub async fn login<S: SessionStorage>(
    api: &dyn ReviewApi,
    session: &SessionStore<S>,
    credentials: &Credentials,
) -> ClientResult<AuthResponse> {
    let response = api.sign_in(credentials).await.map_err(|e| {
        tracing::error!("Login error: {}", e);
        e
    })?;

    let user = response.data.first().ok_or(ClientError::EmptyAuthResponse)?;
    session.persist(user)?;

    tracing::info!(email = %credentials.email, "signed in");
    Ok(response)
}
