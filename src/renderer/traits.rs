use std::collections::BTreeMap;

use crate::error::NavResult;
use crate::navigation::Page;
use crate::renderer::partial::{Partial, PartialModel};

/// Indentation state for one line of menu markup.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub base: String,
    pub depth: usize,
}

impl RenderContext {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            depth: 0,
        }
    }

    pub fn with_depth(&self, depth: usize) -> Self {
        Self {
            base: self.base.clone(),
            depth,
        }
    }

    /// Indent of the `<ul>` at this depth; each level adds eight columns.
    pub fn indent(&self) -> String {
        format!("{}{}", self.base, "        ".repeat(self.depth))
    }

    /// Indent of the `<li>` lines at this depth.
    pub fn item_indent(&self) -> String {
        format!("{}    ", self.indent())
    }

    /// Indent of the link inside an `<li>`.
    pub fn link_indent(&self) -> String {
        format!("{}        ", self.indent())
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new("")
    }
}

/// Decides whether a single page may be shown.
///
/// The renderers apply it to a page and its ancestors where a recursive
/// check is needed.
pub trait PageFilter {
    fn accept(&self, page: &Page) -> bool;
}

impl<F> PageFilter for F
where
    F: Fn(&Page) -> bool,
{
    fn accept(&self, page: &Page) -> bool {
        self(page)
    }
}

/// Escapes text for use in HTML attribute values and content.
pub trait Escaper {
    fn escape(&self, value: &str) -> String;
}

/// Optional label translation applied before escaping.
pub trait Translator {
    fn translate(&self, text: &str) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, text: &str) -> String {
        self(text)
    }
}

/// Produces the link markup for a page.
pub trait LabelRenderer {
    /// `class_on_anchor` asks for the page's own class on the link element;
    /// `attributes` are extra attributes appended to it.
    fn to_html(
        &self,
        page: &Page,
        escape_label: bool,
        class_on_anchor: bool,
        attributes: &BTreeMap<String, String>,
    ) -> String;

    /// Text as this renderer shows it, before escaping. Used for labels
    /// rendered without a link so both paths read the same.
    fn translate(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Renders a container through an external template instead of the built-in
/// traversal.
pub trait PartialRenderer {
    fn render(&self, partial: &Partial, model: &PartialModel<'_>) -> NavResult<String>;
}
