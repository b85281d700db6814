//! Collaborator traits at the client's external boundaries.
//!
//! The panel logic depends on these seams only; production adapters live in
//! the outer crates and tests substitute their own.

use async_trait::async_trait;
use serde_json::Value;

use crate::model::{AuthFields, DurationField, PostRef};

/// Result surface of one transport exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body text, verbatim.
    pub body: String,
}

impl TransportResponse {
    /// Whether the status code is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Network transport used to deliver composed requests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST a JSON payload to a path below the moderation authority.
    ///
    /// Implementations report connection-level failures as errors and pass
    /// every HTTP status through untouched; classifying a non-success status
    /// is the caller's job. Timeout policy also lives behind this seam.
    async fn post_json(&self, path: &str, payload: &Value) -> anyhow::Result<TransportResponse>;
}

/// Display surface the panel reads selection and input state from.
pub trait ModSurface: Send + Sync {
    /// Posts currently marked for bulk action, in selection order.
    fn marked(&self) -> Vec<PostRef>;

    /// Clear all selection marks.
    fn clear_marks(&self);

    /// Board the current selection is scoped to.
    fn board(&self) -> String;

    /// Raw value of the action selector control.
    fn action_value(&self) -> String;

    /// Raw ban-duration inputs, including blank ones.
    fn duration_fields(&self) -> Vec<DurationField>;

    /// Free-text ban reason field.
    fn reason_value(&self) -> String;
}

/// Persistent key/value store for display preferences.
///
/// Writes replace the whole value for a key; there are no partial updates.
pub trait PreferenceStore: Send + Sync {
    /// Read a stored value.
    fn get(&self, key: &str) -> Option<String>;

    /// Replace a stored value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Supplier of the authentication fields merged into every request.
///
/// Assumed synchronous and always available; a fresh set of fields is
/// requested for every submission.
pub trait AuthProvider: Send + Sync {
    /// Fields to merge into the next outbound payload.
    fn auth_fields(&self) -> AuthFields;
}
