//! Active entry resolution.
//!
//! Activeness is section-level: unless the caller names an href, the gate's
//! own root link is the active one, whatever sub-path the location points at.
//! Deriving a leaf from the finer path (a specific meeting id, say) is not
//! attempted.

use crate::gate::RouteGate;
use crate::model::MenuModel;

/// Href of the leaf to highlight, if any.
///
/// A non-empty `explicit` href wins over the derived default and is compared
/// exactly. Without one, the leaf linking to the gate root is active, compared
/// the way the gate matches locations (ASCII case and trailing `/` ignored).
///
/// Leaves marked `external` are never active, even when `explicit` names one
/// of them: they point outside the gated section, so nothing is highlighted.
/// Sections are never active either.
pub fn resolve_active<'m>(
    location: &str,
    gate: &RouteGate,
    model: &'m MenuModel,
    explicit: Option<&str>,
) -> Option<&'m str> {
    if !gate.should_render(location) {
        return None;
    }

    let explicit = explicit.filter(|href| !href.is_empty());

    model
        .links()
        .filter(|link| !link.external)
        .find(|link| match explicit {
            Some(href) => link.href == href,
            None => gate.is_root_href(&link.href),
        })
        .map(|link| link.href.as_str())
}
