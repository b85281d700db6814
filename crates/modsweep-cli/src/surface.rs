//! Display-surface and auth adapters over parsed command-line arguments.

use std::sync::Mutex;

use modsweep_core::{ActionKind, AuthFields, AuthProvider, DurationField, ModSurface, PostRef};

/// One-shot display surface backed by command-line arguments.
///
/// The marked set starts out as the identifiers passed on the command line
/// and empties when the dispatcher clears it, like any other surface.
pub(crate) struct ArgSurface {
    marks: Mutex<Vec<PostRef>>,
    board: String,
    action: ActionKind,
    day: Option<u64>,
    hour: Option<u64>,
    minute: Option<u64>,
    reason: String,
}

impl ArgSurface {
    pub(crate) fn delete(ids: &[u64], board: impl Into<String>) -> Self {
        Self {
            marks: Mutex::new(ids.iter().copied().map(PostRef::new).collect()),
            board: board.into(),
            action: ActionKind::DeletePost,
            day: None,
            hour: None,
            minute: None,
            reason: String::new(),
        }
    }

    pub(crate) fn ban(
        ids: &[u64],
        board: impl Into<String>,
        day: Option<u64>,
        hour: Option<u64>,
        minute: Option<u64>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            marks: Mutex::new(ids.iter().copied().map(PostRef::new).collect()),
            board: board.into(),
            action: ActionKind::Ban,
            day,
            hour,
            minute,
            reason: reason.into(),
        }
    }
}

/// An absent flag reads as a blank field, exactly like an empty input box.
fn field(label: &str, value: Option<u64>) -> DurationField {
    DurationField::new(label, value.map(|v| v.to_string()).unwrap_or_default())
}

impl ModSurface for ArgSurface {
    fn marked(&self) -> Vec<PostRef> {
        self.marks.lock().expect("marks mutex poisoned").clone()
    }

    fn clear_marks(&self) {
        self.marks.lock().expect("marks mutex poisoned").clear();
    }

    fn board(&self) -> String {
        self.board.clone()
    }

    fn action_value(&self) -> String {
        self.action.as_str().to_string()
    }

    fn duration_fields(&self) -> Vec<DurationField> {
        vec![
            field("day", self.day),
            field("hour", self.hour),
            field("minute", self.minute),
        ]
    }

    fn reason_value(&self) -> String {
        self.reason.clone()
    }
}

/// Auth supplier contributing the moderation session token.
#[derive(Debug)]
pub(crate) struct SessionAuth {
    session: String,
}

impl SessionAuth {
    pub(crate) fn new(session: impl Into<String>) -> Self {
        Self {
            session: session.into(),
        }
    }
}

impl AuthProvider for SessionAuth {
    fn auth_fields(&self) -> AuthFields {
        AuthFields::single("session", self.session.clone())
    }
}
