//! Selection collection with optimistic mark clearing.

use modsweep_core::{ModSurface, PostRef};

/// Read the current selection off the display surface and clear the marks.
///
/// Clearing happens exactly once, before the selection is returned, so the
/// user-facing marks never survive a collection attempt regardless of what
/// later pipeline steps do. A submission therefore only ever acts on the
/// selection captured in its own cycle.
pub fn collect_selection(surface: &dyn ModSurface) -> Vec<PostRef> {
    let marked = surface.marked();
    surface.clear_marks();
    marked
}
