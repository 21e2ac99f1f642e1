use std::collections::HashMap;

use tracing::debug;

use crate::error::{NavResult, NavigationError};
use crate::navigation::types::*;

/// Ordered page tree. Pages live in an arena and refer to each other by
/// [`PageId`]; a `PageId` is only meaningful for the container that issued it.
#[derive(Debug, Clone, Default)]
pub struct Container {
    pages: Vec<Page>,
    roots: Vec<PageId>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_specs(specs: Vec<PageSpec>) -> Self {
        let mut container = Self::new();
        for spec in &specs {
            container.insert(None, spec);
        }
        container
    }

    /// Build a container from the JSON page-tree format (an array of pages).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let specs: Vec<PageSpec> = serde_json::from_str(json)?;
        Ok(Self::from_specs(specs))
    }

    /// Append a page (and its nested pages) to the root level.
    pub fn add_page(&mut self, spec: PageSpec) -> PageId {
        self.insert(None, &spec)
    }

    /// Append a page (and its nested pages) below `parent`.
    pub fn add_child(&mut self, parent: PageId, spec: PageSpec) -> PageId {
        self.insert(Some(parent), &spec)
    }

    fn insert(&mut self, parent: Option<PageId>, spec: &PageSpec) -> PageId {
        let id = PageId(self.pages.len());
        self.pages.push(Page::from_spec(spec, parent));
        match parent {
            Some(parent) => self.pages[parent.0].children.push(id),
            None => self.roots.push(id),
        }
        for child in &spec.pages {
            self.insert(Some(id), child);
        }
        id
    }

    pub fn page(&self, id: PageId) -> &Page {
        &self.pages[id.0]
    }

    pub fn page_mut(&mut self, id: PageId) -> &mut Page {
        &mut self.pages[id.0]
    }

    pub fn roots(&self) -> &[PageId] {
        &self.roots
    }

    pub fn children(&self, id: PageId) -> &[PageId] {
        &self.pages[id.0].children
    }

    pub fn parent(&self, id: PageId) -> Option<PageId> {
        self.pages[id.0].parent
    }

    /// The list a page belongs to: its parent's children, or the root level.
    pub fn siblings(&self, id: PageId) -> &[PageId] {
        match self.parent(id) {
            Some(parent) => self.children(parent),
            None => &self.roots,
        }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Unfiltered child existence.
    pub fn has_pages(&self, id: PageId) -> bool {
        !self.pages[id.0].children.is_empty()
    }

    /// Whether the page is active; with `recursive`, also when any
    /// descendant is.
    pub fn is_active(&self, id: PageId, recursive: bool) -> bool {
        let page = &self.pages[id.0];
        if page.active {
            return true;
        }
        recursive
            && page
                .children
                .iter()
                .any(|child| self.is_active(*child, true))
    }

    pub fn set_active(&mut self, id: PageId, active: bool) {
        self.pages[id.0].active = active;
    }

    /// Clear every active flag, then mark the first page whose uri matches.
    pub fn activate_uri(&mut self, uri: &str) -> Option<PageId> {
        for page in &mut self.pages {
            page.active = false;
        }
        let id = self.find_by_uri(uri)?;
        self.pages[id.0].active = true;
        Some(id)
    }

    /// First page in depth-first order with the given uri.
    pub fn find_by_uri(&self, uri: &str) -> Option<PageId> {
        self.depth_first(None)
            .map(|(id, _)| id)
            .find(|id| self.pages[id.0].uri.as_deref() == Some(uri))
    }

    pub fn find_by_label(&self, label: &str) -> Option<PageId> {
        self.depth_first(None)
            .map(|(id, _)| id)
            .find(|id| self.pages[id.0].label == label)
    }

    /// Absolute depth of a page, root level is 0.
    pub fn depth(&self, id: PageId) -> usize {
        let mut depth = 0;
        let mut current = self.parent(id);
        while let Some(parent) = current {
            depth += 1;
            current = self.parent(parent);
        }
        depth
    }

    /// Chain from the root level down to `id`, inclusive.
    pub fn ancestors(&self, id: PageId) -> Vec<PageId> {
        let mut chain = vec![id];
        let mut current = self.parent(id);
        while let Some(parent) = current {
            chain.push(parent);
            current = self.parent(parent);
        }
        chain.reverse();
        chain
    }

    /// Pre-order walk yielding `(page, depth)`, not descending below
    /// `max_depth` when one is given.
    pub fn depth_first(&self, max_depth: Option<usize>) -> DepthFirst<'_> {
        let stack = self.roots.iter().rev().map(|id| (*id, 0)).collect();
        DepthFirst {
            container: self,
            stack,
            max_depth,
        }
    }
}

/// Iterator returned by [`Container::depth_first`].
pub struct DepthFirst<'a> {
    container: &'a Container,
    stack: Vec<(PageId, usize)>,
    max_depth: Option<usize>,
}

impl Iterator for DepthFirst<'_> {
    type Item = (PageId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        if self.max_depth.map_or(true, |max| depth < max) {
            let children = self.container.children(id);
            self.stack
                .extend(children.iter().rev().map(|child| (*child, depth + 1)));
        }
        Some((id, depth))
    }
}

/// How a render call picks its container.
#[derive(Debug)]
pub enum ContainerSource<'a> {
    /// The helper's default container.
    Default,
    /// A container registered on the helper under an alias.
    Named(&'a str),
    /// An explicit container owned by the caller.
    Instance(&'a mut Container),
}

impl<'a> From<&'a mut Container> for ContainerSource<'a> {
    fn from(container: &'a mut Container) -> Self {
        ContainerSource::Instance(container)
    }
}

impl<'a> From<Option<&'a mut Container>> for ContainerSource<'a> {
    fn from(container: Option<&'a mut Container>) -> Self {
        container.map_or(ContainerSource::Default, ContainerSource::Instance)
    }
}

/// Containers held by a helper: one default plus any number of aliases.
#[derive(Debug, Clone, Default)]
pub struct ContainerRegistry {
    default: Container,
    named: HashMap<String, Container>,
}

impl ContainerRegistry {
    pub fn new(default: Container) -> Self {
        Self {
            default,
            named: HashMap::new(),
        }
    }

    pub fn set_default(&mut self, container: Container) {
        self.default = container;
    }

    pub fn default_container(&self) -> &Container {
        &self.default
    }

    pub fn default_container_mut(&mut self) -> &mut Container {
        &mut self.default
    }

    pub fn register(&mut self, alias: impl Into<String>, container: Container) {
        self.named.insert(alias.into(), container);
    }

    pub fn get(&self, alias: &str) -> Option<&Container> {
        self.named.get(alias)
    }

    pub fn resolve<'c>(&'c mut self, source: ContainerSource<'c>) -> NavResult<&'c mut Container> {
        match source {
            ContainerSource::Default => Ok(&mut self.default),
            ContainerSource::Instance(container) => Ok(container),
            ContainerSource::Named(alias) => {
                debug!(alias, "resolving named container");
                self.named
                    .get_mut(alias)
                    .ok_or_else(|| NavigationError::UnknownContainer(alias.to_string()))
            }
        }
    }
}
