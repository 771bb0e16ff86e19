//! Hunt detail aggregation and the comment thread

use crate::api::ReviewApi;
use crate::models::{Challenge, Comment, Hunt, HuntId, User};
use crate::ClientResult;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch hunt details. Please try again later.";

/// Shown when the route parameter is not a hunt id
pub const NOT_FOUND_MESSAGE: &str = "Hunt not found.";

/// Everything the detail view renders about one hunt
#[derive(Debug, Clone, PartialEq)]
pub struct HuntDetail {
    pub hunt: Hunt,
    pub challenges: Vec<Challenge>,
    pub comments: CommentThread,
    pub organizer: User,
}

/// Hunt, challenges and comments concurrently, then the organizer profile.
///
/// A failed organizer lookup fails the whole cycle like any other request.
pub async fn load_hunt_detail(api: &dyn ReviewApi, hunt_id: HuntId) -> ClientResult<HuntDetail> {
    let (hunt, challenges, comments) = futures::join!(
        api.hunt(hunt_id),
        api.challenges(hunt_id),
        api.comments(hunt_id)
    );
    let hunt = hunt?;
    let challenges = challenges?;
    let comments = comments?;

    let organizer = api.user(hunt.organizer_id).await?;

    Ok(HuntDetail {
        hunt,
        challenges,
        comments: CommentThread::new(comments),
        organizer,
    })
}

/// Comments in the order they were received or added
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentThread {
    comments: Vec<Comment>,
}

impl CommentThread {
    pub fn new(comments: Vec<Comment>) -> Self {
        Self { comments }
    }

    pub fn append(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    /// Drop the comment with `id`; returns whether one was removed
    pub fn resolve(&mut self, id: i64) -> bool {
        let before = self.comments.len();
        self.comments.retain(|c| c.id != id);
        self.comments.len() != before
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

/// Post a comment draft.
///
/// Blank drafts are ignored without a request and yield `Ok(None)`. The
/// draft is sent as typed.
pub async fn submit_comment(
    api: &dyn ReviewApi,
    hunt_id: HuntId,
    draft: &str,
) -> ClientResult<Option<Comment>> {
    if draft.trim().is_empty() {
        return Ok(None);
    }

    match api.add_comment(hunt_id, draft).await {
        Ok(comment) => Ok(Some(comment)),
        Err(e) => {
            tracing::error!(hunt_id, "Error submitting comment: {}", e);
            Err(e)
        }
    }
}

pub async fn resolve_comment(api: &dyn ReviewApi, comment_id: i64) -> ClientResult<()> {
    api.delete_comment(comment_id).await.map_err(|e| {
        tracing::error!(comment_id, "Error resolving comment: {}", e);
        e
    })
}
