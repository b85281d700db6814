//! Checkbox and panel visibility state.

use std::sync::Arc;

use modsweep_core::PreferenceStore;

/// Store key for the persisted checkbox preference.
///
/// The stored value is the *hide* flag (`"true"`/`"false"`), so an absent
/// key means the checkboxes are shown.
pub const HIDE_CHECKBOXES_KEY: &str = "hide_mod_checkboxes";

/// Visibility of the per-post selection controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Selection checkboxes are displayed.
    Shown,
    /// Selection checkboxes are hidden.
    Hidden,
}

/// Tracks panel display state and the persisted checkbox preference.
///
/// Constructed explicitly and handed to whoever needs it. The persisted
/// flag always reflects the last explicit toggle; the transient panel
/// display and stay-visible override never touch the store.
pub struct VisibilityController {
    store: Arc<dyn PreferenceStore>,
    checkboxes: Visibility,
    panel_open: bool,
    stay_visible: bool,
}

impl VisibilityController {
    /// Restore the last persisted preference; defaults to shown.
    #[must_use]
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        let hidden = store.get(HIDE_CHECKBOXES_KEY).as_deref() == Some("true");
        Self {
            store,
            checkboxes: if hidden {
                Visibility::Hidden
            } else {
                Visibility::Shown
            },
            panel_open: false,
            stay_visible: false,
        }
    }

    /// Current checkbox visibility.
    #[must_use]
    pub const fn checkboxes(&self) -> Visibility {
        self.checkboxes
    }

    /// Whether the panel itself is currently displayed.
    #[must_use]
    pub const fn panel_open(&self) -> bool {
        self.panel_open
    }

    /// Whether the stay-visible override is holding the panel on screen.
    #[must_use]
    pub const fn stay_visible(&self) -> bool {
        self.stay_visible
    }

    /// Toggle the selection checkboxes and persist the choice.
    ///
    /// Showing the checkboxes also pins the panel through the stay-visible
    /// override; hiding them releases it.
    ///
    /// # Errors
    ///
    /// Returns an error when the preference store cannot be written; the
    /// in-memory state is updated regardless.
    pub fn set_checkboxes(&mut self, show: bool) -> anyhow::Result<()> {
        self.checkboxes = if show {
            Visibility::Shown
        } else {
            Visibility::Hidden
        };
        self.stay_visible = show;
        self.store
            .set(HIDE_CHECKBOXES_KEY, if show { "false" } else { "true" })
    }

    /// Display the panel. Transient; never persisted.
    pub const fn open_panel(&mut self) {
        self.panel_open = true;
    }

    /// Hide the panel without touching the stored preference.
    pub const fn close_panel(&mut self) {
        self.panel_open = false;
    }

    /// Drop all transient display state, e.g. when moderation mode ends.
    ///
    /// The stored preference survives; only the panel display and the
    /// stay-visible override are reset.
    pub const fn reset(&mut self) {
        self.panel_open = false;
        self.stay_visible = false;
    }
}
