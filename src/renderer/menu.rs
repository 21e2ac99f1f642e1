use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::{NavResult, NavigationError};
use crate::navigation::{Container, ContainerRegistry, ContainerSource, Page, PageId};
use crate::renderer::bootstrap;
use crate::renderer::components::{render_attributes, ClassList};
use crate::renderer::options::{DepthWindow, Indent, MenuOptions, MenuOverrides};
use crate::renderer::partial::{Partial, PartialModel};
use crate::renderer::renderer::Navigation;
use crate::renderer::traits::*;
use crate::renderer::traversal::*;

/// Renders a container as a Bootstrap nav.
pub struct Menu<'a> {
    nav: Navigation<'a>,
    containers: ContainerRegistry,
    defaults: MenuOptions,
}

impl<'a> Menu<'a> {
    pub fn new(nav: Navigation<'a>) -> Self {
        Self {
            nav,
            containers: ContainerRegistry::default(),
            defaults: MenuOptions::default(),
        }
    }

    pub fn with_options(mut self, options: MenuOptions) -> Self {
        self.defaults = options;
        self
    }

    pub fn with_container(mut self, container: Container) -> Self {
        self.containers.set_default(container);
        self
    }

    pub fn options(&self) -> &MenuOptions {
        &self.defaults
    }

    pub fn options_mut(&mut self) -> &mut MenuOptions {
        &mut self.defaults
    }

    pub fn containers(&self) -> &ContainerRegistry {
        &self.containers
    }

    pub fn containers_mut(&mut self) -> &mut ContainerRegistry {
        &mut self.containers
    }

    /// Render through the configured partial if there is one, otherwise
    /// with the built-in markup.
    pub fn render(&mut self, source: ContainerSource<'_>) -> NavResult<String> {
        if self.defaults.partial.is_some() {
            self.render_partial(source, None)
        } else {
            self.render_menu(source, &MenuOverrides::default())
        }
    }

    pub fn render_menu(
        &mut self,
        source: ContainerSource<'_>,
        overrides: &MenuOverrides,
    ) -> NavResult<String> {
        let options = self.defaults.merged(overrides);
        self.render_with(source, &options)
    }

    /// Only the entries directly below the deepest active page.
    pub fn render_sub_menu(
        &mut self,
        source: ContainerSource<'_>,
        ul_class: Option<&str>,
        indent: Option<Indent>,
        li_active_class: Option<&str>,
    ) -> NavResult<String> {
        let mut options = self.defaults.clone();
        options.only_active_branch = true;
        options.render_parents = false;
        options.min_depth = None;
        options.max_depth = None;
        if let Some(ul_class) = ul_class {
            options.ul_class = ul_class.to_string();
        }
        if let Some(indent) = indent {
            options.indent = indent;
        }
        if let Some(li_active_class) = li_active_class {
            options.li_active_class = li_active_class.to_string();
        }
        self.render_with(source, &options)
    }

    pub fn render_partial(
        &mut self,
        source: ContainerSource<'_>,
        partial: Option<&Partial>,
    ) -> NavResult<String> {
        self.render_partial_with_params(source, partial, Map::new())
    }

    pub fn render_partial_with_params(
        &mut self,
        source: ContainerSource<'_>,
        partial: Option<&Partial>,
        params: Map<String, Value>,
    ) -> NavResult<String> {
        let partial = partial
            .or(self.defaults.partial.as_ref())
            .cloned()
            .ok_or_else(|| NavigationError::InvalidPartial("no partial configured".to_string()))?;
        let renderer = self
            .nav
            .partials
            .ok_or_else(|| NavigationError::Partial("no partial renderer available".to_string()))?;
        let container = self.containers.resolve(source)?;
        let model = PartialModel::new(container).with_params(params);
        renderer.render(&partial, &model)
    }

    /// Link markup for a single page, outside of any list.
    pub fn htmlify(&self, page: &Page, escape_label: bool, add_class_to_list_item: bool) -> String {
        self.nav
            .labels
            .to_html(page, escape_label, !add_class_to_list_item, &BTreeMap::new())
    }

    fn render_with(&mut self, source: ContainerSource<'_>, options: &MenuOptions) -> NavResult<String> {
        let ul_classes = bootstrap::list_classes(options)?;
        let nav = self.nav;
        let container = self.containers.resolve(source)?;
        let deepest = options.only_active_branch && !options.render_parents;
        debug!(
            pages = container.len(),
            deepest,
            window = ?options.depth_window(),
            "rendering menu"
        );
        let html = if deepest {
            render_deepest_menu(&nav, container, options, &ul_classes)
        } else {
            render_normal_menu(&nav, container, options, &ul_classes)
        };
        Ok(html)
    }
}

fn top_level_list_attributes(nav: &Navigation<'_>, options: &MenuOptions, ul_classes: &ClassList) -> String {
    let mut attributes = ul_classes.to_attribute(nav.escaper);
    if let Some(role) = &options.role {
        attributes.push_str(&render_attributes([("role", role.as_str())], nav.escaper));
    }
    attributes
}

/// Item and link classes for one entry; returns (li attributes, link
/// classes, link attributes).
fn entry_attributes(
    nav: &Navigation<'_>,
    page: &Page,
    options: &MenuOptions,
    depth: usize,
    active: bool,
    has_children: bool,
) -> (String, ClassList, BTreeMap<String, String>) {
    let mut li = ClassList::new();
    li.push_if(depth == 0, "nav-item")
        .push_if(has_children, "dropdown")
        .push_if(active, &options.li_active_class)
        .push(page.li_class.as_deref().unwrap_or_default())
        .push(&options.li_class)
        .push_if(options.add_class_to_list_item, page.class.as_str());
    let mut li_attributes = li.to_attribute(nav.escaper);
    if depth == 0 && options.role.is_some() {
        li_attributes.push_str(" role=\"presentation\"");
    }

    let mut link = ClassList::new();
    link.push(if depth == 0 { "nav-link" } else { "dropdown-item" });
    let mut attributes = BTreeMap::new();
    if has_children {
        link.push("dropdown-toggle");
        attributes.insert("data-bs-toggle".to_string(), "dropdown".to_string());
        attributes.insert("aria-expanded".to_string(), "false".to_string());
        attributes.insert("role".to_string(), "button".to_string());
    }
    if active {
        link.push("active");
        if depth == 0 {
            attributes.insert("aria-current".to_string(), "page".to_string());
        }
    }
    (li_attributes, link, attributes)
}

/// Full tree walk, opening and closing nested lists as the depth changes.
fn render_normal_menu(
    nav: &Navigation<'_>,
    container: &mut Container,
    options: &MenuOptions,
    ul_classes: &ClassList,
) -> String {
    let window = options.depth_window();
    let context = RenderContext::new(options.indent.whitespace());
    let found = if options.only_active_branch {
        match find_active(container, window, None) {
            // an active page just above the window still contributes its children
            None if window.min > 0 => find_active(
                container,
                DepthWindow::new(window.min - 1, window.max),
                None,
            ),
            found => found,
        }
    } else {
        None
    };

    let order: Vec<(PageId, usize)> = container.depth_first(window.max).collect();
    let mut html = String::new();
    let mut prev_depth: Option<usize> = None;

    for (id, depth) in order {
        if depth < window.min || !accepts(container, nav.filter, id, true) {
            trace!(label = %container.page(id).label, depth, "skipping page");
            continue;
        }
        let active = container.is_active(id, true);
        if options.only_active_branch
            && !active
            && !in_active_branch(container, nav.filter, found, id, window.max)
        {
            continue;
        }

        let depth = depth - window.min;
        let level = context.with_depth(depth);
        match prev_depth {
            Some(prev) if depth <= prev => {
                for closing in (depth + 1..=prev).rev() {
                    let closing = context.with_depth(closing);
                    html.push_str(&format!("{}</li>\n", closing.item_indent()));
                    html.push_str(&format!("{}</ul>\n", closing.indent()));
                }
                html.push_str(&format!("{}</li>\n", level.item_indent()));
            }
            _ => {
                let list_attributes = if depth == 0 {
                    top_level_list_attributes(nav, options, ul_classes)
                } else {
                    " class=\"dropdown-menu\"".to_string()
                };
                html.push_str(&format!("{}<ul{}>\n", level.indent(), list_attributes));
            }
        }

        // unfiltered on purpose: a page whose children are all rejected
        // still renders as a dropdown toggle
        let has_children = container.has_pages(id);
        let (li_attributes, link_classes, attributes) =
            entry_attributes(nav, container.page(id), options, depth, active, has_children);
        let link = nav.menu_link(
            container,
            id,
            options.escape_labels,
            options.add_class_to_list_item,
            link_classes,
            attributes,
        );
        html.push_str(&format!("{}<li{}>\n", level.item_indent(), li_attributes));
        html.push_str(&format!("{}{}\n", level.link_indent(), link));

        prev_depth = Some(depth);
    }

    if let Some(prev) = prev_depth {
        for closing in (0..=prev).rev() {
            let closing = context.with_depth(closing);
            html.push_str(&format!("{}</li>\n", closing.item_indent()));
            html.push_str(&format!("{}</ul>\n", closing.indent()));
        }
    }
    if html.ends_with('\n') {
        html.pop();
    }
    html
}

/// Flat list of the entries below the deepest active page, or of its
/// siblings when it has nothing to show below it.
fn render_deepest_menu(
    nav: &Navigation<'_>,
    container: &mut Container,
    options: &MenuOptions,
    ul_classes: &ClassList,
) -> String {
    let window = options.depth_window();
    if window.max.is_some_and(|max| max < window.min) {
        return String::new();
    }
    let search = DepthWindow::new(window.min.saturating_sub(1), window.max);
    let Some(active) = find_active(container, search, Some(nav.filter)) else {
        return String::new();
    };

    let has_children = has_accepted_children(container, nav.filter, active.id);
    let items: Vec<PageId> = if active.depth < window.min {
        if !has_children {
            return String::new();
        }
        container.children(active.id).to_vec()
    } else if !has_children || window.max.is_some_and(|max| active.depth + 1 > max) {
        // the container stands in as parent of root-level pages
        container.siblings(active.id).to_vec()
    } else {
        container.children(active.id).to_vec()
    };

    let context = RenderContext::new(options.indent.whitespace());
    let mut html = format!(
        "{}<ul{}>\n",
        context.indent(),
        top_level_list_attributes(nav, options, ul_classes)
    );
    for id in items {
        if !nav.filter.accept(container.page(id)) {
            continue;
        }
        let item_active = container.is_active(id, true);
        let (li_attributes, link_classes, attributes) =
            entry_attributes(nav, container.page(id), options, 0, item_active, false);
        let link = nav.menu_link(
            container,
            id,
            options.escape_labels,
            options.add_class_to_list_item,
            link_classes,
            attributes,
        );
        html.push_str(&format!("{}<li{}>\n", context.item_indent(), li_attributes));
        html.push_str(&format!("{}{}\n", context.link_indent(), link));
        html.push_str(&format!("{}</li>\n", context.item_indent()));
    }
    html.push_str(&format!("{}</ul>", context.indent()));
    html
}
