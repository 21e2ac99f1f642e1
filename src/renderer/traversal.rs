use tracing::trace;

use crate::navigation::{Container, PageId};
use crate::renderer::options::DepthWindow;
use crate::renderer::traits::PageFilter;

/// The deepest active page found in a depth window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePage {
    pub id: PageId,
    /// Absolute depth, root level is 0.
    pub depth: usize,
}

/// Whether `filter` accepts the page; with `recursive`, every ancestor must
/// be accepted as well.
pub fn accepts(container: &Container, filter: &dyn PageFilter, id: PageId, recursive: bool) -> bool {
    let mut current = Some(id);
    while let Some(page_id) = current {
        if !filter.accept(container.page(page_id)) {
            return false;
        }
        if !recursive {
            break;
        }
        current = container.parent(page_id);
    }
    true
}

/// Whether the page has at least one child that passes the filter.
pub fn has_accepted_children(container: &Container, filter: &dyn PageFilter, id: PageId) -> bool {
    container
        .children(id)
        .iter()
        .any(|child| filter.accept(container.page(*child)))
}

/// Deepest page whose own active flag is set and whose depth lies inside the
/// window. The first page found wins among pages of equal depth.
pub fn find_active(
    container: &Container,
    window: DepthWindow,
    filter: Option<&dyn PageFilter>,
) -> Option<ActivePage> {
    let mut found: Option<ActivePage> = None;
    for (id, depth) in container.depth_first(window.max) {
        if !window.contains(depth) || !container.page(id).active {
            continue;
        }
        if let Some(filter) = filter {
            if !accepts(container, filter, id, true) {
                continue;
            }
        }
        if found.map_or(true, |best| depth > best.depth) {
            found = Some(ActivePage { id, depth });
        }
    }
    trace!(?found, "active page lookup");
    found
}

/// Whether a page that is not itself active still belongs to the rendered
/// part of the active branch.
///
/// Children of the active page are always included. Siblings of the active
/// page are included when the active page has nothing to show below it,
/// either because no child passes the filter or because its children lie
/// beyond `max_depth`. Ancestors are covered by the recursive active check
/// done by the caller.
pub fn in_active_branch(
    container: &Container,
    filter: &dyn PageFilter,
    found: Option<ActivePage>,
    candidate: PageId,
    max_depth: Option<usize>,
) -> bool {
    let Some(found) = found else {
        return false;
    };
    if container.children(found.id).contains(&candidate) {
        return true;
    }
    if candidate != found.id && container.siblings(found.id).contains(&candidate) {
        return !has_accepted_children(container, filter, found.id)
            || max_depth.is_some_and(|max| found.depth + 1 > max);
    }
    false
}
