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

//! Domain types and collaborator traits for the modsweep client.
//!
//! Layout: `model.rs` (posts, action kinds, ban parameters, auth fields),
//! `duration.rs` (ban-duration aggregation), `compose.rs` (outbound payload
//! composition), `service.rs` (traits at the external boundaries),
//! `error.rs` (the moderation error taxonomy).

pub mod compose;
pub mod duration;
pub mod error;
pub mod model;
pub mod service;

pub use compose::{ActionRequest, BanRequest, DeleteRequest};
pub use duration::total_minutes;
pub use error::{ModerationError, ModerationResult};
pub use model::{ActionKind, AuthFields, BanParameters, BulkAction, DurationField, PostRef};
pub use service::{AuthProvider, ModSurface, PreferenceStore, Transport, TransportResponse};
