use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tera::{Context, Tera};
use tracing::debug;

use crate::error::{NavResult, NavigationError};
use crate::navigation::{Container, PageId};
use crate::renderer::traits::PartialRenderer;

/// Template used in place of the built-in markup.
///
/// Written either as a template name or as a `[template, key]` pair, where
/// `key` names the variable the container is exposed under.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "PartialSpec")]
pub enum Partial {
    Template(String),
    WithModel(String, String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PartialSpec {
    Name(String),
    Parts(Vec<String>),
}

impl TryFrom<PartialSpec> for Partial {
    type Error = NavigationError;

    fn try_from(spec: PartialSpec) -> Result<Self, Self::Error> {
        match spec {
            PartialSpec::Name(name) => Ok(Partial::Template(name)),
            PartialSpec::Parts(parts) => Partial::from_parts(parts),
        }
    }
}

impl Partial {
    /// Build from the array form; anything but exactly two entries is
    /// rejected.
    pub fn from_parts(parts: Vec<String>) -> NavResult<Self> {
        match <[String; 2]>::try_from(parts) {
            Ok([template, key]) => Ok(Partial::WithModel(template, key)),
            Err(parts) => Err(NavigationError::InvalidPartial(format!(
                "expected [template, key], got {} element(s)",
                parts.len()
            ))),
        }
    }

    pub fn template(&self) -> &str {
        match self {
            Partial::Template(template) | Partial::WithModel(template, _) => template,
        }
    }

    /// Variable name the container is exposed under.
    pub fn model_key(&self) -> &str {
        match self {
            Partial::Template(_) => "container",
            Partial::WithModel(_, key) => key,
        }
    }
}

impl From<&str> for Partial {
    fn from(template: &str) -> Self {
        Partial::Template(template.to_string())
    }
}

/// What a partial gets to see.
#[derive(Debug)]
pub struct PartialModel<'a> {
    pub container: &'a Container,
    /// Active chain for breadcrumbs, root first; empty for menus.
    pub pages: Vec<PageId>,
    pub params: Map<String, Value>,
}

impl<'a> PartialModel<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            container,
            pages: Vec::new(),
            params: Map::new(),
        }
    }

    pub fn with_pages(mut self, pages: Vec<PageId>) -> Self {
        self.pages = pages;
        self
    }

    pub fn with_params(mut self, params: Map<String, Value>) -> Self {
        self.params = params;
        self
    }
}

/// Serializable view of a page for templates.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub label: String,
    pub uri: Option<String>,
    pub title: Option<String>,
    pub class: String,
    pub active: bool,
    pub visible: bool,
    pub pages: Vec<PageView>,
}

impl PageView {
    pub fn new(container: &Container, id: PageId, with_children: bool) -> Self {
        let page = container.page(id);
        let pages = if with_children {
            container
                .children(id)
                .iter()
                .map(|child| PageView::new(container, *child, true))
                .collect()
        } else {
            Vec::new()
        };
        Self {
            label: page.label.clone(),
            uri: page.uri.clone(),
            title: page.title.clone(),
            class: page.class.as_str().to_string(),
            active: container.is_active(id, true),
            visible: page.visible,
            pages,
        }
    }

    pub fn tree(container: &Container) -> Vec<PageView> {
        container
            .roots()
            .iter()
            .map(|id| PageView::new(container, *id, true))
            .collect()
    }
}

/// Partial engine backed by Tera templates.
pub struct TeraPartials {
    tera: Tera,
}

impl TeraPartials {
    pub fn new(tera: Tera) -> Self {
        Self { tera }
    }

    /// Load every template matching a glob such as `templates/**/*.html`.
    pub fn from_glob(glob: &str) -> NavResult<Self> {
        let tera = Tera::new(glob).map_err(|e| NavigationError::Partial(e.to_string()))?;
        Ok(Self::new(tera))
    }

    pub fn add_template(&mut self, name: &str, content: &str) -> NavResult<()> {
        self.tera
            .add_raw_template(name, content)
            .map_err(|e| NavigationError::Partial(e.to_string()))
    }
}

impl PartialRenderer for TeraPartials {
    fn render(&self, partial: &Partial, model: &PartialModel<'_>) -> NavResult<String> {
        debug!(template = partial.template(), "rendering partial");
        let mut context = Context::new();
        context.insert(partial.model_key(), &PageView::tree(model.container));
        let pages: Vec<PageView> = model
            .pages
            .iter()
            .map(|id| PageView::new(model.container, *id, false))
            .collect();
        context.insert("pages", &pages);
        for (key, value) in &model.params {
            context.insert(key.as_str(), value);
        }
        self.tera
            .render(partial.template(), &context)
            .map_err(|e| NavigationError::Partial(format!("{}: {:?}", partial.template(), e.kind)))
    }
}
