//! In-memory backend for view model tests

use crate::api::ReviewApi;
use crate::models::{
    AuthResponse, AuthUser, Challenge, Comment, Credentials, Hunt, HuntId, HuntStatus, Location,
    Page, User,
};
use crate::session::{
    MemoryStorage, SessionStorage, StorageError, StorageResult, REFRESH_TOKEN_KEY,
};
use crate::{ClientError, ClientResult};
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::HashMap;

/// Reviewer id of the signed-in caller
pub(crate) const ME: i64 = 99;

/// Memory storage that refuses to write the refresh token
#[derive(Default)]
pub(crate) struct RefreshWriteFails {
    pub inner: MemoryStorage,
}

impl SessionStorage for RefreshWriteFails {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if key == REFRESH_TOKEN_KEY {
            return Err(StorageError("quota exceeded".to_string()));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.inner.remove(key)
    }
}

#[derive(Default)]
struct Backend {
    hunts: Vec<Hunt>,
    challenges: HashMap<HuntId, Vec<Challenge>>,
    comments: Vec<Comment>,
    users: HashMap<i64, User>,
    sign_in: Option<Result<Vec<AuthUser>, u16>>,
    failures: HashMap<&'static str, (u16, Option<String>)>,
    toggle_status: Option<u16>,
    next_comment_id: i64,
    calls: Vec<String>,
}

/// [`ReviewApi`] answering from memory and recording every call
#[derive(Default)]
pub(crate) struct FakeApi {
    backend: RefCell<Backend>,
}

impl FakeApi {
    pub fn new() -> Self {
        let api = Self::default();
        api.backend.borrow_mut().next_comment_id = 100;
        api
    }

    pub fn set_sign_in(&self, result: Result<Vec<AuthUser>, u16>) {
        self.backend.borrow_mut().sign_in = Some(result);
    }

    pub fn add_hunt(&self, hunt: Hunt) {
        self.backend.borrow_mut().hunts.push(hunt);
    }

    pub fn add_challenge(&self, hunt_id: HuntId, challenge: Challenge) {
        self.backend
            .borrow_mut()
            .challenges
            .entry(hunt_id)
            .or_default()
            .push(challenge);
    }

    pub fn add_comment_record(&self, comment: Comment) {
        self.backend.borrow_mut().comments.push(comment);
    }

    pub fn add_user(&self, user: User) {
        self.backend.borrow_mut().users.insert(user.id, user);
    }

    /// Make `endpoint` fail with `status`
    pub fn fail(&self, endpoint: &'static str, status: u16, message: Option<&str>) {
        self.backend
            .borrow_mut()
            .failures
            .insert(endpoint, (status, message.map(str::to_string)));
    }

    /// Status the toggle endpoint answers with, without flipping anything
    pub fn set_toggle_status(&self, status: u16) {
        self.backend.borrow_mut().toggle_status = Some(status);
    }

    pub fn calls(&self) -> Vec<String> {
        self.backend.borrow().calls.clone()
    }

    pub fn call_count(&self, endpoint: &str) -> usize {
        self.backend
            .borrow()
            .calls
            .iter()
            .filter(|c| c.split(' ').next() == Some(endpoint))
            .count()
    }

    fn enter(&self, endpoint: &'static str, detail: String) -> ClientResult<()> {
        let mut backend = self.backend.borrow_mut();
        backend.calls.push(format!("{} {}", endpoint, detail).trim().to_string());
        match backend.failures.get(endpoint) {
            Some((status, message)) => Err(ClientError::Status {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn not_found() -> ClientError {
        ClientError::Status {
            status: 404,
            message: Some("Not found".to_string()),
        }
    }
}

#[async_trait(?Send)]
impl ReviewApi for FakeApi {
    async fn sign_in(&self, credentials: &Credentials) -> ClientResult<AuthResponse> {
        self.enter("sign_in", credentials.email.clone())?;
        match self.backend.borrow().sign_in.clone() {
            Some(Ok(data)) => Ok(AuthResponse {
                success: true,
                message: "ok".to_string(),
                data,
                errors: vec![],
                error_code: 0,
                timestamp: 0,
            }),
            Some(Err(status)) => Err(ClientError::Status {
                status,
                message: Some("Bad credentials".to_string()),
            }),
            None => Err(Self::not_found()),
        }
    }

    async fn hunts_by_status(&self, status: HuntStatus) -> ClientResult<Page<Hunt>> {
        self.enter("hunts_by_status", status.to_string())?;
        let content: Vec<Hunt> = self
            .backend
            .borrow()
            .hunts
            .iter()
            .filter(|h| h.status == status.as_str())
            .cloned()
            .collect();
        Ok(Page {
            total_elements: content.len() as u64,
            empty: content.is_empty(),
            content,
            total_pages: 1,
            number: 0,
            size: 20,
            first: true,
            last: true,
        })
    }

    async fn assigned_hunts(&self) -> ClientResult<Vec<Hunt>> {
        self.enter("assigned_hunts", String::new())?;
        Ok(self
            .backend
            .borrow()
            .hunts
            .iter()
            .filter(|h| h.reviewer_id == Some(ME))
            .cloned()
            .collect())
    }

    async fn toggle_assignment(&self, hunt_id: HuntId) -> ClientResult<u16> {
        self.enter("toggle_assignment", hunt_id.to_string())?;
        let mut backend = self.backend.borrow_mut();
        if let Some(status) = backend.toggle_status {
            return Ok(status);
        }
        match backend.hunts.iter_mut().find(|h| h.id == hunt_id) {
            Some(hunt) => {
                hunt.reviewer_id = match hunt.reviewer_id {
                    Some(ME) => None,
                    _ => Some(ME),
                };
                Ok(200)
            }
            None => Ok(404),
        }
    }

    async fn hunt(&self, hunt_id: HuntId) -> ClientResult<Hunt> {
        self.enter("hunt", hunt_id.to_string())?;
        self.backend
            .borrow()
            .hunts
            .iter()
            .find(|h| h.id == hunt_id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn challenges(&self, hunt_id: HuntId) -> ClientResult<Vec<Challenge>> {
        self.enter("challenges", hunt_id.to_string())?;
        Ok(self
            .backend
            .borrow()
            .challenges
            .get(&hunt_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn comments(&self, hunt_id: HuntId) -> ClientResult<Vec<Comment>> {
        self.enter("comments", hunt_id.to_string())?;
        let key = hunt_id.to_string();
        Ok(self
            .backend
            .borrow()
            .comments
            .iter()
            .filter(|c| c.hunt_id == key)
            .cloned()
            .collect())
    }

    async fn add_comment(&self, hunt_id: HuntId, content: &str) -> ClientResult<Comment> {
        self.enter("add_comment", hunt_id.to_string())?;
        let mut backend = self.backend.borrow_mut();
        let comment = Comment {
            id: backend.next_comment_id,
            hunt_id: hunt_id.to_string(),
            content: content.to_string(),
            reviewer_id: Some(ME),
        };
        backend.next_comment_id += 1;
        backend.comments.push(comment.clone());
        Ok(comment)
    }

    async fn delete_comment(&self, comment_id: i64) -> ClientResult<()> {
        self.enter("delete_comment", comment_id.to_string())?;
        let mut backend = self.backend.borrow_mut();
        let before = backend.comments.len();
        backend.comments.retain(|c| c.id != comment_id);
        if backend.comments.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }

    async fn user(&self, user_id: i64) -> ClientResult<User> {
        self.enter("user", user_id.to_string())?;
        self.backend
            .borrow()
            .users
            .get(&user_id)
            .cloned()
            .ok_or_else(Self::not_found)
    }
}

pub(crate) fn hunt(id: HuntId, reviewer_id: Option<i64>) -> Hunt {
    Hunt {
        id,
        title: format!("Hunt #{}", id),
        description: "Follow the clues".to_string(),
        organizer_id: 7,
        reviewer_id,
        start_date: None,
        end_date: None,
        status: HuntStatus::UnderReview.as_str().to_string(),
        location: Some(Location {
            latitude: 48.8566,
            longitude: 2.3522,
        }),
    }
}

pub(crate) fn organizer(id: i64) -> User {
    User {
        id,
        username: "organizer".to_string(),
        email: "organizer@example.com".to_string(),
        score: None,
    }
}

pub(crate) fn challenge(id: i64) -> Challenge {
    Challenge {
        challenge_id: id,
        title: format!("Challenge {}", id),
        description: "Solve it".to_string(),
        points: 10,
        challenge_type: "CODE".to_string(),
        external_game_uri: None,
        test_cases: vec![],
        optimal_solutions: vec![],
        challenge_codes: vec![],
        created_at: None,
    }
}

pub(crate) fn comment(id: i64, hunt_id: HuntId, content: &str) -> Comment {
    Comment {
        id,
        hunt_id: hunt_id.to_string(),
        content: content.to_string(),
        reviewer_id: Some(ME),
    }
}

pub(crate) fn auth_user(prefix: &str) -> AuthUser {
    AuthUser {
        id: "1".to_string(),
        username: prefix.to_string(),
        email: format!("{}@example.com", prefix),
        roles: vec!["REVIEWER".to_string()],
        access_token: format!("{}-access", prefix),
        refresh_token: format!("{}-refresh", prefix),
    }
}
