//! HTTP client for the treasure hunt backend
//!
//! Every network call the dashboard makes goes through [`ReviewApi`]. The
//! real implementation attaches the stored access token to each request;
//! tests substitute an in-memory fake.

use crate::config::ClientConfig;
use crate::models::{
    ApiErrorBody, AuthResponse, Challenge, Comment, Credentials, Hunt, HuntId, HuntStatus,
    NewComment, Page, User,
};
use crate::session::{SessionStorage, SessionStore};
use crate::{ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// Endpoints consumed by the reviewer views
#[async_trait(?Send)]
pub trait ReviewApi {
    /// `POST /auth/signin`
    async fn sign_in(&self, credentials: &Credentials) -> ClientResult<AuthResponse>;

    /// `GET /hunts?status=..`
    async fn hunts_by_status(&self, status: HuntStatus) -> ClientResult<Page<Hunt>>;

    /// `GET /hunts/reviewers/me`
    async fn assigned_hunts(&self) -> ClientResult<Vec<Hunt>>;

    /// `POST /reviewers/hunts/{id}`. The backend flips the caller's
    /// assignment; the raw status code is returned so callers decide what
    /// counts as success.
    async fn toggle_assignment(&self, hunt_id: HuntId) -> ClientResult<u16>;

    async fn hunt(&self, hunt_id: HuntId) -> ClientResult<Hunt>;

    async fn challenges(&self, hunt_id: HuntId) -> ClientResult<Vec<Challenge>>;

    async fn comments(&self, hunt_id: HuntId) -> ClientResult<Vec<Comment>>;

    async fn add_comment(&self, hunt_id: HuntId, content: &str) -> ClientResult<Comment>;

    async fn delete_comment(&self, comment_id: i64) -> ClientResult<()>;

    async fn user(&self, user_id: i64) -> ClientResult<User>;
}

/// [`ReviewApi`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpReviewApi<S> {
    client: reqwest::Client,
    config: ClientConfig,
    session: SessionStore<S>,
}

impl<S: SessionStorage> HttpReviewApi<S> {
    pub fn new(config: ClientConfig, session: SessionStore<S>) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            session,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// Hunt artwork; rendered by URL, never fetched by the client
    pub fn background_image_url(&self, hunt_id: HuntId) -> String {
        self.config.endpoint(&format!("/hunts/{}/images/bg", hunt_id))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        tracing::debug!("{} {}", method, url);

        let builder = self.client.request(method, url);
        match self.session.access_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ClientResult<T> {
        let response = checked(builder.send().await?).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Turn a non-2xx response into [`ClientError::Status`]
async fn checked(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ApiErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);

    tracing::warn!(status = status.as_u16(), ?message, "request rejected");

    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait(?Send)]
impl<S: SessionStorage> ReviewApi for HttpReviewApi<S> {
    async fn sign_in(&self, credentials: &Credentials) -> ClientResult<AuthResponse> {
        self.fetch(self.request(Method::POST, "/auth/signin").json(credentials))
            .await
    }

    async fn hunts_by_status(&self, status: HuntStatus) -> ClientResult<Page<Hunt>> {
        self.fetch(
            self.request(Method::GET, "/hunts")
                .query(&[("status", status.as_str())]),
        )
        .await
    }

    async fn assigned_hunts(&self) -> ClientResult<Vec<Hunt>> {
        self.fetch(self.request(Method::GET, "/hunts/reviewers/me"))
            .await
    }

    async fn toggle_assignment(&self, hunt_id: HuntId) -> ClientResult<u16> {
        let response = self
            .request(Method::POST, &format!("/reviewers/hunts/{}", hunt_id))
            .send()
            .await?;
        Ok(response.status().as_u16())
    }

    async fn hunt(&self, hunt_id: HuntId) -> ClientResult<Hunt> {
        self.fetch(self.request(Method::GET, &format!("/hunts/{}", hunt_id)))
            .await
    }

    async fn challenges(&self, hunt_id: HuntId) -> ClientResult<Vec<Challenge>> {
        self.fetch(self.request(Method::GET, &format!("/hunts/{}/challenges", hunt_id)))
            .await
    }

    async fn comments(&self, hunt_id: HuntId) -> ClientResult<Vec<Comment>> {
        self.fetch(self.request(Method::GET, &format!("/hunts/{}/comments", hunt_id)))
            .await
    }

    async fn add_comment(&self, hunt_id: HuntId, content: &str) -> ClientResult<Comment> {
        self.fetch(
            self.request(Method::POST, &format!("/hunts/{}/comments", hunt_id))
                .json(&NewComment { content }),
        )
        .await
    }

    async fn delete_comment(&self, comment_id: i64) -> ClientResult<()> {
        let response = self
            .request(Method::DELETE, &format!("/comments/{}", comment_id))
            .send()
            .await?;
        checked(response).await?;
        Ok(())
    }

    async fn user(&self, user_id: i64) -> ClientResult<User> {
        self.fetch(self.request(Method::GET, &format!("/users/{}", user_id)))
            .await
    }
}
