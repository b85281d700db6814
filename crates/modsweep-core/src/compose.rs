//! Outbound payload composition for bulk moderation actions.

use serde::Serialize;

use crate::model::{AuthFields, BulkAction, PostRef};

/// Payload for `POST /admin/deletePost`.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteRequest {
    /// Targeted post identifiers, in selection order.
    pub ids: Vec<u64>,
    /// Board the posts belong to.
    pub board: String,
    /// Authentication fields, flattened into the payload top level.
    #[serde(flatten)]
    pub auth: AuthFields,
}

/// Payload for `POST /admin/ban`.
#[derive(Debug, Clone, Serialize)]
pub struct BanRequest {
    /// Targeted post identifiers, in selection order.
    pub ids: Vec<u64>,
    /// Board the posts belong to.
    pub board: String,
    /// Total ban length in minutes.
    pub duration: u64,
    /// Free-text reason shown to the banned poster.
    pub reason: String,
    /// Authentication fields, flattened into the payload top level.
    #[serde(flatten)]
    pub auth: AuthFields,
}

/// A composed moderation request, ready for transmission.
///
/// Serializes as the flat payload object the admin endpoints expect.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ActionRequest {
    /// Bulk delete payload.
    Delete(DeleteRequest),
    /// Bulk ban payload.
    Ban(BanRequest),
}

impl ActionRequest {
    /// Build the outbound payload for one submission.
    ///
    /// Pure with respect to its arguments; transmission is a separate step.
    #[must_use]
    pub fn compose(
        action: BulkAction,
        posts: &[PostRef],
        board: impl Into<String>,
        auth: AuthFields,
    ) -> Self {
        let ids = posts.iter().map(|post| post.id).collect();
        let board = board.into();
        match action {
            BulkAction::Delete => Self::Delete(DeleteRequest { ids, board, auth }),
            BulkAction::Ban(params) => Self::Ban(BanRequest {
                ids,
                board,
                duration: params.duration_minutes,
                reason: params.reason,
                auth,
            }),
        }
    }

    /// Admin endpoint this request is posted to.
    #[must_use]
    pub const fn endpoint(&self) -> &'static str {
        match self {
            Self::Delete(_) => "/admin/deletePost",
            Self::Ban(_) => "/admin/ban",
        }
    }
}
