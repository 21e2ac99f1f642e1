use serde::{Deserialize, Serialize};

/// Handle to a page stored in a [`Container`](super::Container).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PageId(pub(crate) usize);

/// CSS class storage for a page.
///
/// The menu renderer writes the computed link classes back into the page when
/// the page class is folded into the link; that value is kept as `Rendered` so
/// callers can tell it apart from what they set themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum PageClass {
    #[default]
    None,
    Authored(String),
    Rendered(String),
}

impl PageClass {
    pub fn as_str(&self) -> &str {
        match self {
            PageClass::None => "",
            PageClass::Authored(class) | PageClass::Rendered(class) => class,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().trim().is_empty()
    }

    /// True once a render has overwritten the class.
    pub fn is_rendered(&self) -> bool {
        matches!(self, PageClass::Rendered(_))
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.as_str().split_whitespace()
    }
}

impl From<Option<String>> for PageClass {
    fn from(class: Option<String>) -> Self {
        match class {
            Some(class) if !class.is_empty() => PageClass::Authored(class),
            _ => PageClass::None,
        }
    }
}

/// A single navigation entry.
#[derive(Debug, Clone)]
pub struct Page {
    pub label: String,
    pub uri: Option<String>,
    pub title: Option<String>,
    pub target: Option<String>,
    pub id: Option<String>,
    pub class: PageClass,
    pub li_class: Option<String>,
    pub active: bool,
    pub visible: bool,
    pub resource: Option<String>,
    pub privilege: Option<String>,
    pub(crate) parent: Option<PageId>,
    pub(crate) children: Vec<PageId>,
}

impl Page {
    pub(crate) fn from_spec(spec: &PageSpec, parent: Option<PageId>) -> Self {
        Self {
            label: spec.label.clone(),
            uri: spec.uri.clone(),
            title: spec.title.clone(),
            target: spec.target.clone(),
            id: spec.id.clone(),
            class: spec.class.clone().into(),
            li_class: spec.li_class.clone(),
            active: spec.active,
            visible: spec.visible,
            resource: spec.resource.clone(),
            privilege: spec.privilege.clone(),
            parent,
            children: Vec::new(),
        }
    }

    /// Parent page, `None` for pages on the container's root level.
    pub fn parent(&self) -> Option<PageId> {
        self.parent
    }

    pub fn children(&self) -> &[PageId] {
        &self.children
    }

    pub fn set_class(&mut self, class: impl Into<String>) {
        self.class = Some(class.into()).into();
    }

    pub(crate) fn set_rendered_class(&mut self, class: String) {
        self.class = PageClass::Rendered(class);
    }
}

/// Declarative page description, the unit a [`Container`](super::Container)
/// is built from. Deserializes from the JSON page-tree format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSpec {
    pub label: String,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub li_class: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default)]
    pub privilege: Option<String>,
    #[serde(default)]
    pub pages: Vec<PageSpec>,
}

fn default_true() -> bool {
    true
}

impl PageSpec {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            uri: None,
            title: None,
            target: None,
            id: None,
            class: None,
            li_class: None,
            active: false,
            visible: true,
            resource: None,
            privilege: None,
            pages: Vec::new(),
        }
    }

    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn li_class(mut self, class: impl Into<String>) -> Self {
        self.li_class = Some(class.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn privilege(mut self, privilege: impl Into<String>) -> Self {
        self.privilege = Some(privilege.into());
        self
    }

    pub fn child(mut self, child: PageSpec) -> Self {
        self.pages.push(child);
        self
    }
}
