#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Submission pipeline and panel state for the modsweep client.
//!
//! The dispatcher pulls the current selection off the display surface,
//! composes one request per submission, and delivers it through the
//! transport collaborator. Panel state that must survive across sessions
//! goes through the preference store; everything else is transient.
//!
//! Layout: `selection.rs` (mark collection), `dispatch.rs` (the submission
//! state machine), `visibility.rs` (checkbox/panel visibility),
//! `prefs.rs` (preference store adapters), `http.rs` (reqwest transport).

pub mod dispatch;
pub mod http;
pub mod prefs;
pub mod selection;
pub mod visibility;

pub use dispatch::{DispatchOutcome, Dispatcher};
pub use http::HttpTransport;
pub use prefs::{FilePreferenceStore, MemoryPreferenceStore};
pub use selection::collect_selection;
pub use visibility::{HIDE_CHECKBOXES_KEY, Visibility, VisibilityController};
