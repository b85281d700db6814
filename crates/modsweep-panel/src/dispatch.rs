//! Bulk-action dispatch: one composed request per submit trigger.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use modsweep_core::{
    ActionKind, ActionRequest, AuthProvider, BanParameters, BulkAction, ModSurface,
    ModerationError, ModerationResult, Transport, total_minutes,
};

use crate::selection::collect_selection;

/// Outcome of one submit trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A request was sent and accepted by the server.
    Sent {
        /// Number of posts in the submission.
        posts: usize,
    },
    /// Nothing was marked; no request was sent.
    EmptySelection,
    /// A submission was already in flight; this trigger was ignored.
    AlreadySubmitting,
}

/// Orchestrates one bulk-action submission end to end.
///
/// The dispatcher is either idle or submitting; it returns to idle on every
/// exit path, so a failed exchange never wedges the panel.
pub struct Dispatcher {
    surface: Arc<dyn ModSurface>,
    transport: Arc<dyn Transport>,
    auth: Arc<dyn AuthProvider>,
    in_flight: AtomicBool,
}

impl Dispatcher {
    /// Wire a dispatcher to its collaborators.
    #[must_use]
    pub fn new(
        surface: Arc<dyn ModSurface>,
        transport: Arc<dyn Transport>,
        auth: Arc<dyn AuthProvider>,
    ) -> Self {
        Self {
            surface,
            transport,
            auth,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether a submission is currently in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Run one submission cycle.
    ///
    /// A submit trigger while another submission is in flight is ignored and
    /// reported as [`DispatchOutcome::AlreadySubmitting`]. The selection
    /// marks are cleared as soon as they are read, so a failed submission
    /// cannot be replayed from the same selection.
    ///
    /// # Errors
    ///
    /// Fails with [`ModerationError::InvalidActionKind`] on an unrecognized
    /// action control value, [`ModerationError::RequestRejected`] when the
    /// server answers with a non-success status (carrying the exact body
    /// text), and [`ModerationError::Transport`] on connection-level
    /// failures. No variant leaves the dispatcher stuck in the submitting
    /// state.
    pub async fn submit(&self) -> ModerationResult<DispatchOutcome> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Ok(DispatchOutcome::AlreadySubmitting);
        }
        let _idle = IdleOnDrop {
            flag: &self.in_flight,
        };

        let posts = collect_selection(self.surface.as_ref());
        if posts.is_empty() {
            return Ok(DispatchOutcome::EmptySelection);
        }

        let kind = self.surface.action_value().parse::<ActionKind>()?;
        let action = match kind {
            ActionKind::DeletePost => BulkAction::Delete,
            ActionKind::Ban => BulkAction::Ban(BanParameters {
                duration_minutes: total_minutes(&self.surface.duration_fields()),
                reason: self.surface.reason_value(),
            }),
        };

        let request = ActionRequest::compose(
            action,
            &posts,
            self.surface.board(),
            self.auth.auth_fields(),
        );
        let endpoint = request.endpoint();
        let payload =
            serde_json::to_value(&request).map_err(|source| ModerationError::Encode { source })?;

        tracing::debug!(
            action = kind.as_str(),
            posts = posts.len(),
            endpoint,
            "submitting bulk action"
        );

        let response = self
            .transport
            .post_json(endpoint, &payload)
            .await
            .map_err(|source| ModerationError::Transport { source })?;

        if response.is_success() {
            Ok(DispatchOutcome::Sent { posts: posts.len() })
        } else {
            tracing::debug!(status = response.status, endpoint, "bulk action rejected");
            Err(ModerationError::RequestRejected {
                status: response.status,
                body: response.body,
            })
        }
    }
}

/// Drops the dispatcher back to idle on every exit path.
struct IdleOnDrop<'a> {
    flag: &'a AtomicBool,
}

impl Drop for IdleOnDrop<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use modsweep_core::{AuthFields, DurationField, PostRef, TransportResponse};
    use serde_json::{Value, json};
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Notify;

    struct StubSurface {
        marks: Mutex<Vec<PostRef>>,
        action: String,
        fields: Vec<DurationField>,
        reason: String,
    }

    impl StubSurface {
        fn delete(ids: &[u64]) -> Self {
            Self {
                marks: Mutex::new(ids.iter().copied().map(PostRef::new).collect()),
                action: "deletePost".to_string(),
                fields: Vec::new(),
                reason: String::new(),
            }
        }

        fn ban(ids: &[u64], fields: &[(&str, &str)], reason: &str) -> Self {
            Self {
                marks: Mutex::new(ids.iter().copied().map(PostRef::new).collect()),
                action: "ban".to_string(),
                fields: fields
                    .iter()
                    .map(|(label, value)| DurationField::new(*label, *value))
                    .collect(),
                reason: reason.to_string(),
            }
        }

        fn with_action(ids: &[u64], action: &str) -> Self {
            Self {
                action: action.to_string(),
                ..Self::delete(ids)
            }
        }
    }

    impl ModSurface for StubSurface {
        fn marked(&self) -> Vec<PostRef> {
            self.marks.lock().expect("marks mutex poisoned").clone()
        }

        fn clear_marks(&self) {
            self.marks.lock().expect("marks mutex poisoned").clear();
        }

        fn board(&self) -> String {
            "b".to_string()
        }

        fn action_value(&self) -> String {
            self.action.clone()
        }

        fn duration_fields(&self) -> Vec<DurationField> {
            self.fields.clone()
        }

        fn reason_value(&self) -> String {
            self.reason.clone()
        }
    }

    struct StubAuth;

    impl AuthProvider for StubAuth {
        fn auth_fields(&self) -> AuthFields {
            AuthFields::single("session", "tok")
        }
    }

    struct RecordingTransport {
        requests: Mutex<Vec<(String, Value)>>,
        response: Option<TransportResponse>,
    }

    impl RecordingTransport {
        fn answering(status: u16, body: &str) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                response: Some(TransportResponse {
                    status,
                    body: body.to_string(),
                }),
            }
        }

        fn failing() -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                response: None,
            }
        }

        fn requests(&self) -> Vec<(String, Value)> {
            self.requests.lock().expect("requests mutex poisoned").clone()
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn post_json(
            &self,
            path: &str,
            payload: &Value,
        ) -> anyhow::Result<TransportResponse> {
            self.requests
                .lock()
                .expect("requests mutex poisoned")
                .push((path.to_string(), payload.clone()));
            self.response
                .clone()
                .ok_or_else(|| anyhow::anyhow!("connection refused"))
        }
    }

    fn dispatcher(
        surface: Arc<StubSurface>,
        transport: Arc<RecordingTransport>,
    ) -> Dispatcher {
        Dispatcher::new(surface, transport, Arc::new(StubAuth))
    }

    #[tokio::test]
    async fn empty_selection_is_a_silent_no_op() {
        let surface = Arc::new(StubSurface::delete(&[]));
        let transport = Arc::new(RecordingTransport::answering(200, ""));
        let dispatcher = dispatcher(surface, Arc::clone(&transport));

        let outcome = dispatcher.submit().await.expect("no-op submit");
        assert_eq!(outcome, DispatchOutcome::EmptySelection);
        assert!(transport.requests().is_empty());
        assert!(!dispatcher.is_submitting());
    }

    #[tokio::test]
    async fn delete_submission_posts_the_expected_payload() {
        let surface = Arc::new(StubSurface::delete(&[1, 2, 3]));
        let transport = Arc::new(RecordingTransport::answering(200, ""));
        let dispatcher = dispatcher(Arc::clone(&surface), Arc::clone(&transport));

        let outcome = dispatcher.submit().await.expect("submit");
        assert_eq!(outcome, DispatchOutcome::Sent { posts: 3 });

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, "/admin/deletePost");
        assert_eq!(
            requests[0].1,
            json!({"ids": [1, 2, 3], "board": "b", "session": "tok"})
        );
        assert!(surface.marked().is_empty());
    }

    #[tokio::test]
    async fn ban_submission_aggregates_duration_fields() {
        let surface = Arc::new(StubSurface::ban(
            &[7],
            &[("day", "1"), ("hour", "2"), ("min", "")],
            "spam",
        ));
        let transport = Arc::new(RecordingTransport::answering(200, ""));
        let dispatcher = dispatcher(surface, Arc::clone(&transport));

        dispatcher.submit().await.expect("submit");

        let requests = transport.requests();
        assert_eq!(requests[0].0, "/admin/ban");
        assert_eq!(
            requests[0].1,
            json!({
                "ids": [7],
                "board": "b",
                "duration": 1560,
                "reason": "spam",
                "session": "tok"
            })
        );
    }

    #[tokio::test]
    async fn marks_are_cleared_even_when_the_transport_fails() {
        let surface = Arc::new(StubSurface::delete(&[4, 5]));
        let transport = Arc::new(RecordingTransport::failing());
        let dispatcher = dispatcher(Arc::clone(&surface), transport);

        let err = dispatcher.submit().await.expect_err("transport failure");
        assert!(matches!(err, ModerationError::Transport { .. }));
        assert!(surface.marked().is_empty());
        assert!(!dispatcher.is_submitting());
    }

    #[tokio::test]
    async fn rejected_response_carries_the_exact_body_text() {
        let surface = Arc::new(StubSurface::delete(&[1]));
        let transport = Arc::new(RecordingTransport::answering(403, "not your board"));
        let dispatcher = dispatcher(surface, transport);

        let err = dispatcher.submit().await.expect_err("rejected submit");
        match err {
            ModerationError::RequestRejected { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, "not your board");
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(!dispatcher.is_submitting());

        let outcome = dispatcher.submit().await.expect("idle again");
        assert_eq!(outcome, DispatchOutcome::EmptySelection);
    }

    #[tokio::test]
    async fn unknown_action_value_fails_loudly_after_clearing_marks() {
        let surface = Arc::new(StubSurface::with_action(&[1], "purge"));
        let transport = Arc::new(RecordingTransport::answering(200, ""));
        let dispatcher = dispatcher(Arc::clone(&surface), Arc::clone(&transport));

        let err = dispatcher.submit().await.expect_err("unknown action");
        assert!(
            matches!(err, ModerationError::InvalidActionKind { value } if value == "purge")
        );
        assert!(surface.marked().is_empty());
        assert!(transport.requests().is_empty());
    }

    struct GatedTransport {
        entered: Notify,
        release: Notify,
        calls: AtomicUsize,
    }

    impl GatedTransport {
        fn new() -> Self {
            Self {
                entered: Notify::new(),
                release: Notify::new(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Transport for GatedTransport {
        async fn post_json(
            &self,
            _path: &str,
            _payload: &Value,
        ) -> anyhow::Result<TransportResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.entered.notify_one();
            self.release.notified().await;
            Ok(TransportResponse {
                status: 200,
                body: String::new(),
            })
        }
    }

    #[tokio::test]
    async fn reentrant_submit_is_ignored_while_in_flight() {
        let surface = Arc::new(StubSurface::delete(&[1]));
        let transport = Arc::new(GatedTransport::new());
        let dispatcher = Arc::new(Dispatcher::new(
            surface,
            Arc::clone(&transport) as Arc<dyn Transport>,
            Arc::new(StubAuth),
        ));

        let background = {
            let dispatcher = Arc::clone(&dispatcher);
            tokio::spawn(async move { dispatcher.submit().await })
        };
        transport.entered.notified().await;
        assert!(dispatcher.is_submitting());

        let outcome = dispatcher.submit().await.expect("guarded submit");
        assert_eq!(outcome, DispatchOutcome::AlreadySubmitting);

        transport.release.notify_one();
        let first = background
            .await
            .expect("join background submit")
            .expect("first submit");
        assert_eq!(first, DispatchOutcome::Sent { posts: 1 });
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
        assert!(!dispatcher.is_submitting());
    }
}
