use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{NavResult, NavigationError};
use crate::navigation::{Container, ContainerRegistry, ContainerSource, PageId};
use crate::renderer::options::{BreadcrumbOptions, BreadcrumbOverrides, DepthWindow};
use crate::renderer::partial::{Partial, PartialModel};
use crate::renderer::renderer::Navigation;
use crate::renderer::traits::RenderContext;
use crate::renderer::traversal::{find_active, ActivePage};

/// Renders the trail from the root level to the active page.
pub struct Breadcrumbs<'a> {
    nav: Navigation<'a>,
    containers: ContainerRegistry,
    defaults: BreadcrumbOptions,
}

impl<'a> Breadcrumbs<'a> {
    pub fn new(nav: Navigation<'a>) -> Self {
        Self {
            nav,
            containers: ContainerRegistry::default(),
            defaults: BreadcrumbOptions::default(),
        }
    }

    pub fn with_options(mut self, options: BreadcrumbOptions) -> Self {
        self.defaults = options;
        self
    }

    pub fn with_container(mut self, container: Container) -> Self {
        self.containers.set_default(container);
        self
    }

    pub fn options(&self) -> &BreadcrumbOptions {
        &self.defaults
    }

    pub fn options_mut(&mut self) -> &mut BreadcrumbOptions {
        &mut self.defaults
    }

    pub fn containers(&self) -> &ContainerRegistry {
        &self.containers
    }

    pub fn containers_mut(&mut self) -> &mut ContainerRegistry {
        &mut self.containers
    }

    pub fn render(&mut self, source: ContainerSource<'_>) -> NavResult<String> {
        if self.defaults.partial.is_some() {
            self.render_partial(source, None)
        } else {
            self.render_straight(source, &BreadcrumbOverrides::default())
        }
    }

    pub fn render_straight(
        &mut self,
        source: ContainerSource<'_>,
        overrides: &BreadcrumbOverrides,
    ) -> NavResult<String> {
        let options = self.defaults.merged(overrides);
        let nav = self.nav;
        let container = self.containers.resolve(source)?;
        let Some(active) = find_breadcrumb_active(&nav, container, options.depth_window()) else {
            debug!("no active page, breadcrumbs are empty");
            return Ok(String::new());
        };
        Ok(render_trail(&nav, container, &options, active.id))
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
        let nav = self.nav;
        let window = self.defaults.depth_window();
        let container = self.containers.resolve(source)?;
        let pages = find_breadcrumb_active(&nav, container, window)
            .map(|active| container.ancestors(active.id))
            .unwrap_or_default();
        let model = PartialModel::new(container)
            .with_pages(pages)
            .with_params(params);
        renderer.render(&partial, &model)
    }
}

/// Deepest accepted active page at or below `min`; a page deeper than `max`
/// is replaced by its ancestor at `max`.
fn find_breadcrumb_active(
    nav: &Navigation<'_>,
    container: &Container,
    window: DepthWindow,
) -> Option<ActivePage> {
    let mut found = find_active(container, DepthWindow::new(window.min, None), Some(nav.filter))?;
    if let Some(max) = window.max {
        while found.depth > max {
            if found.depth - 1 < window.min {
                return None;
            }
            found = ActivePage {
                id: container.parent(found.id)?,
                depth: found.depth - 1,
            };
        }
    }
    Some(found)
}

fn render_trail(
    nav: &Navigation<'_>,
    container: &Container,
    options: &BreadcrumbOptions,
    active: PageId,
) -> String {
    let context = RenderContext::new(options.indent.whitespace());
    let entry_indent = context.link_indent();
    let chain = container.ancestors(active);
    let Some((last, parents)) = chain.split_last() else {
        return String::new();
    };

    let mut items: Vec<String> = parents
        .iter()
        .map(|id| {
            let link = nav.labels.to_html(
                container.page(*id),
                options.escape_labels,
                true,
                &BTreeMap::new(),
            );
            format!("{}<li class=\"breadcrumb-item\">{}</li>", entry_indent, link)
        })
        .collect();

    let page = container.page(*last);
    let label = if options.link_last {
        nav.labels
            .to_html(page, options.escape_labels, true, &BTreeMap::new())
    } else {
        nav.label_text(&page.label, options.escape_labels)
    };
    items.push(format!(
        "{}<li class=\"breadcrumb-item active\" aria-current=\"page\">{}</li>",
        entry_indent, label
    ));

    let list = if options.ordered_list { "ol" } else { "ul" };
    let indent = context.indent();
    let mut html = format!("{}<nav aria-label=\"breadcrumb\">\n", indent);
    html.push_str(&format!("{}<{} class=\"breadcrumb\">\n", context.item_indent(), list));
    html.push_str(&items.join(&options.separator));
    html.push('\n');
    html.push_str(&format!("{}</{}>\n", context.item_indent(), list));
    html.push_str(&format!("{}</nav>", indent));
    html
}
