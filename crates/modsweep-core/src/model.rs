//! Core domain types shared across the workspace.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ModerationError;

/// Stable reference to an externally-owned post.
///
/// The client never owns post content; it only carries identifiers read off
/// the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRef {
    /// Post identifier as assigned by the server.
    pub id: u64,
}

impl PostRef {
    /// Reference the post with the given identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self { id }
    }
}

/// Recognized bulk moderation actions, by wire spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Delete the selected posts.
    DeletePost,
    /// Temporarily ban the authors of the selected posts.
    Ban,
}

impl ActionKind {
    /// Wire spelling used by the action selector and the admin endpoints.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DeletePost => "deletePost",
            Self::Ban => "ban",
        }
    }

    /// Whether this action consumes the ban input fields.
    #[must_use]
    pub const fn takes_ban_inputs(self) -> bool {
        matches!(self, Self::Ban)
    }
}

impl FromStr for ActionKind {
    type Err = ModerationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "deletePost" => Ok(Self::DeletePost),
            "ban" => Ok(Self::Ban),
            other => Err(ModerationError::InvalidActionKind {
                value: other.to_string(),
            }),
        }
    }
}

/// Duration and reason attached to a ban submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanParameters {
    /// Total ban length in minutes.
    pub duration_minutes: u64,
    /// Free-text reason shown to the banned poster.
    pub reason: String,
}

/// A fully-specified bulk action, ready for composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkAction {
    /// Delete the selected posts.
    Delete,
    /// Ban with the given parameters.
    Ban(BanParameters),
}

impl BulkAction {
    /// Action kind this payload belongs to.
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Self::Delete => ActionKind::DeletePost,
            Self::Ban(_) => ActionKind::Ban,
        }
    }
}

/// Raw text of one labeled ban-duration input.
///
/// Transient; exists only for the lifetime of one ban submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationField {
    /// Field label, e.g. `day` or `hour`.
    pub label: String,
    /// Raw input text; may be blank.
    pub value: String,
}

impl DurationField {
    /// Build a field from its label and raw input text.
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Opaque authentication fields merged into every outbound payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthFields {
    /// Field name to JSON value, flattened into the payload top level.
    pub fields: Map<String, Value>,
}

impl AuthFields {
    /// Fields consisting of a single `key: value` pair.
    #[must_use]
    pub fn single(key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut fields = Map::new();
        fields.insert(key.into(), value.into());
        Self { fields }
    }
}
