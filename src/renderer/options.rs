use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{NavResult, NavigationError};
use crate::renderer::partial::Partial;

/// Leading whitespace for every rendered line: a literal string or a
/// number of columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Indent {
    Columns(usize),
    Literal(String),
}

impl Indent {
    pub fn whitespace(&self) -> String {
        match self {
            Indent::Columns(count) => " ".repeat(*count),
            Indent::Literal(indent) => indent.clone(),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Indent::Columns(0)
    }
}

impl From<usize> for Indent {
    fn from(count: usize) -> Self {
        Indent::Columns(count)
    }
}

impl From<&str> for Indent {
    fn from(indent: &str) -> Self {
        Indent::Literal(indent.to_string())
    }
}

/// `vertical` layout toggle: on/off, or vertical up to a breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Vertical {
    Toggle(bool),
    Breakpoint(String),
}

impl Default for Vertical {
    fn default() -> Self {
        Vertical::Toggle(false)
    }
}

/// Inclusive range of tree levels eligible for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DepthWindow {
    pub min: usize,
    pub max: Option<usize>,
}

impl DepthWindow {
    pub fn new(min: usize, max: Option<usize>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, depth: usize) -> bool {
        depth >= self.min && self.max.map_or(true, |max| depth <= max)
    }
}

fn clamp_min_depth(min_depth: Option<i64>) -> usize {
    min_depth.unwrap_or(0).max(0) as usize
}

fn default_true() -> bool {
    true
}

/// Options of the menu helper.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuOptions {
    pub indent: Indent,
    pub ul_class: String,
    pub li_class: String,
    pub li_active_class: String,
    pub min_depth: Option<i64>,
    pub max_depth: Option<usize>,
    pub only_active_branch: bool,
    #[serde(default = "default_true")]
    pub render_parents: bool,
    #[serde(default = "default_true")]
    pub escape_labels: bool,
    pub add_class_to_list_item: bool,
    pub role: Option<String>,
    pub partial: Option<Partial>,
    pub tabs: bool,
    pub pills: bool,
    pub fill: bool,
    pub justified: bool,
    pub centered: bool,
    #[serde(alias = "right_aligned")]
    pub right_aligned: bool,
    pub vertical: Vertical,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            indent: Indent::default(),
            ul_class: "navigation".to_string(),
            li_class: String::new(),
            li_active_class: "active".to_string(),
            min_depth: None,
            max_depth: None,
            only_active_branch: false,
            render_parents: true,
            escape_labels: true,
            add_class_to_list_item: false,
            role: None,
            partial: None,
            tabs: false,
            pills: false,
            fill: false,
            justified: false,
            centered: false,
            right_aligned: false,
            vertical: Vertical::default(),
        }
    }
}

impl MenuOptions {
    pub fn depth_window(&self) -> DepthWindow {
        DepthWindow::new(clamp_min_depth(self.min_depth), self.max_depth)
    }

    /// Apply per-call overrides on top of these defaults.
    pub fn merged(&self, overrides: &MenuOverrides) -> MenuOptions {
        let mut options = self.clone();
        if let Some(indent) = &overrides.indent {
            options.indent = indent.clone();
        }
        if let Some(ul_class) = &overrides.ul_class {
            options.ul_class = ul_class.clone();
        }
        if let Some(li_class) = &overrides.li_class {
            options.li_class = li_class.clone();
        }
        if let Some(li_active_class) = &overrides.li_active_class {
            options.li_active_class = li_active_class.clone();
        }
        if let Some(min_depth) = overrides.min_depth {
            options.min_depth = min_depth;
        }
        if let Some(max_depth) = overrides.max_depth {
            options.max_depth = max_depth;
        }
        if let Some(only_active_branch) = overrides.only_active_branch {
            options.only_active_branch = only_active_branch;
        }
        if let Some(render_parents) = overrides.render_parents {
            options.render_parents = render_parents;
        }
        if let Some(escape_labels) = overrides.escape_labels {
            options.escape_labels = escape_labels;
        }
        if let Some(add_class_to_list_item) = overrides.add_class_to_list_item {
            options.add_class_to_list_item = add_class_to_list_item;
        }
        if let Some(role) = &overrides.role {
            options.role = role.clone();
        }
        if let Some(vertical) = &overrides.vertical {
            options.vertical = vertical.clone();
        }
        for (flag, value) in [
            (&mut options.tabs, overrides.tabs),
            (&mut options.pills, overrides.pills),
            (&mut options.fill, overrides.fill),
            (&mut options.justified, overrides.justified),
            (&mut options.centered, overrides.centered),
            (&mut options.right_aligned, overrides.right_aligned),
        ] {
            if let Some(value) = value {
                *flag = value;
            }
        }
        options
    }
}

/// Per-call menu overrides; `None` keeps the helper default.
///
/// `min_depth` and `max_depth` are doubly optional so a call can reset a
/// configured bound with `Some(None)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuOverrides {
    pub indent: Option<Indent>,
    pub ul_class: Option<String>,
    pub li_class: Option<String>,
    pub li_active_class: Option<String>,
    pub min_depth: Option<Option<i64>>,
    pub max_depth: Option<Option<usize>>,
    pub only_active_branch: Option<bool>,
    pub render_parents: Option<bool>,
    pub escape_labels: Option<bool>,
    pub add_class_to_list_item: Option<bool>,
    pub role: Option<Option<String>>,
    pub tabs: Option<bool>,
    pub pills: Option<bool>,
    pub fill: Option<bool>,
    pub justified: Option<bool>,
    pub centered: Option<bool>,
    pub right_aligned: Option<bool>,
    pub vertical: Option<Vertical>,
}

impl MenuOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indent(mut self, indent: impl Into<Indent>) -> Self {
        self.indent = Some(indent.into());
        self
    }

    pub fn ul_class(mut self, ul_class: impl Into<String>) -> Self {
        self.ul_class = Some(ul_class.into());
        self
    }

    pub fn li_class(mut self, li_class: impl Into<String>) -> Self {
        self.li_class = Some(li_class.into());
        self
    }

    pub fn li_active_class(mut self, li_active_class: impl Into<String>) -> Self {
        self.li_active_class = Some(li_active_class.into());
        self
    }

    pub fn min_depth(mut self, min_depth: Option<i64>) -> Self {
        self.min_depth = Some(min_depth);
        self
    }

    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn only_active_branch(mut self, only_active_branch: bool) -> Self {
        self.only_active_branch = Some(only_active_branch);
        self
    }

    pub fn render_parents(mut self, render_parents: bool) -> Self {
        self.render_parents = Some(render_parents);
        self
    }

    pub fn escape_labels(mut self, escape_labels: bool) -> Self {
        self.escape_labels = Some(escape_labels);
        self
    }

    pub fn add_class_to_list_item(mut self, add_class_to_list_item: bool) -> Self {
        self.add_class_to_list_item = Some(add_class_to_list_item);
        self
    }

    pub fn role(mut self, role: Option<String>) -> Self {
        self.role = Some(role);
        self
    }

    pub fn tabs(mut self, tabs: bool) -> Self {
        self.tabs = Some(tabs);
        self
    }

    pub fn pills(mut self, pills: bool) -> Self {
        self.pills = Some(pills);
        self
    }

    pub fn fill(mut self, fill: bool) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn justified(mut self, justified: bool) -> Self {
        self.justified = Some(justified);
        self
    }

    pub fn centered(mut self, centered: bool) -> Self {
        self.centered = Some(centered);
        self
    }

    pub fn right_aligned(mut self, right_aligned: bool) -> Self {
        self.right_aligned = Some(right_aligned);
        self
    }

    pub fn vertical(mut self, vertical: Vertical) -> Self {
        self.vertical = Some(vertical);
        self
    }
}

/// Options of the breadcrumb helper.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BreadcrumbOptions {
    pub indent: Indent,
    pub separator: String,
    pub min_depth: Option<i64>,
    pub max_depth: Option<usize>,
    pub link_last: bool,
    #[serde(default = "default_true")]
    pub escape_labels: bool,
    pub ordered_list: bool,
    pub partial: Option<Partial>,
}

impl Default for BreadcrumbOptions {
    fn default() -> Self {
        Self {
            indent: Indent::default(),
            separator: "\n".to_string(),
            min_depth: Some(1),
            max_depth: None,
            link_last: false,
            escape_labels: true,
            ordered_list: false,
            partial: None,
        }
    }
}

impl BreadcrumbOptions {
    pub fn depth_window(&self) -> DepthWindow {
        DepthWindow::new(clamp_min_depth(self.min_depth), self.max_depth)
    }

    pub fn merged(&self, overrides: &BreadcrumbOverrides) -> BreadcrumbOptions {
        let mut options = self.clone();
        if let Some(indent) = &overrides.indent {
            options.indent = indent.clone();
        }
        if let Some(separator) = &overrides.separator {
            options.separator = separator.clone();
        }
        if let Some(min_depth) = overrides.min_depth {
            options.min_depth = min_depth;
        }
        if let Some(max_depth) = overrides.max_depth {
            options.max_depth = max_depth;
        }
        if let Some(link_last) = overrides.link_last {
            options.link_last = link_last;
        }
        if let Some(escape_labels) = overrides.escape_labels {
            options.escape_labels = escape_labels;
        }
        if let Some(ordered_list) = overrides.ordered_list {
            options.ordered_list = ordered_list;
        }
        options
    }
}

/// Per-call breadcrumb overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreadcrumbOverrides {
    pub indent: Option<Indent>,
    pub separator: Option<String>,
    pub min_depth: Option<Option<i64>>,
    pub max_depth: Option<Option<usize>>,
    pub link_last: Option<bool>,
    pub escape_labels: Option<bool>,
    pub ordered_list: Option<bool>,
}

impl BreadcrumbOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indent(mut self, indent: impl Into<Indent>) -> Self {
        self.indent = Some(indent.into());
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    pub fn min_depth(mut self, min_depth: Option<i64>) -> Self {
        self.min_depth = Some(min_depth);
        self
    }

    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn link_last(mut self, link_last: bool) -> Self {
        self.link_last = Some(link_last);
        self
    }

    pub fn escape_labels(mut self, escape_labels: bool) -> Self {
        self.escape_labels = Some(escape_labels);
        self
    }

    pub fn ordered_list(mut self, ordered_list: bool) -> Self {
        self.ordered_list = Some(ordered_list);
        self
    }
}

/// Helper-level defaults for both renderers, as read from a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub menu: MenuOptions,
    pub breadcrumbs: BreadcrumbOptions,
}

impl NavigationConfig {
    pub fn from_json(json: &str) -> NavResult<Self> {
        serde_json::from_str(json).map_err(|e| NavigationError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> NavResult<Self> {
        debug!(path = %path.display(), "loading navigation config");
        let json = fs::read_to_string(path)
            .map_err(|e| NavigationError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// `<config dir>/navrender/options.json`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("navrender").join("options.json"))
    }

    /// Load the file at `path`, else the default path if it exists, else
    /// built-in defaults.
    pub fn discover(path: Option<&Path>) -> NavResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}
