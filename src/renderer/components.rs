use std::collections::BTreeMap;
use std::fmt;

use crate::navigation::Page;
use crate::renderer::traits::*;

/// Ordered set of CSS classes. Pushing a string splits it on whitespace and
/// drops tokens already present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, classes: &str) -> &mut Self {
        for token in classes.split_whitespace() {
            if !self.0.iter().any(|existing| existing == token) {
                self.0.push(token.to_string());
            }
        }
        self
    }

    pub fn push_if(&mut self, condition: bool, classes: &str) -> &mut Self {
        if condition {
            self.push(classes);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|existing| existing == class)
    }

    /// ` class="..."`, or nothing when the list is empty.
    pub fn to_attribute(&self, escaper: &dyn Escaper) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!(" class=\"{}\"", escaper.escape(&self.to_string()))
        }
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

impl<'a> FromIterator<&'a str> for ClassList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = ClassList::new();
        for classes in iter {
            list.push(classes);
        }
        list
    }
}

/// Renders `name="value"` pairs with a leading space each.
pub fn render_attributes<'a, I>(attributes: I, escaper: &dyn Escaper) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    attributes
        .into_iter()
        .map(|(name, value)| format!(" {}=\"{}\"", name, escaper.escape(value)))
        .collect()
}

/// Escapes the five HTML special characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEscaper;

impl Escaper for HtmlEscaper {
    fn escape(&self, value: &str) -> String {
        let mut escaped = String::with_capacity(value.len());
        for c in value.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(c),
            }
        }
        escaped
    }
}

/// Accepts pages by their visibility flag only.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisibilityFilter {
    pub render_invisible: bool,
}

impl VisibilityFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_invisible(mut self, render_invisible: bool) -> Self {
        self.render_invisible = render_invisible;
        self
    }
}

impl PageFilter for VisibilityFilter {
    fn accept(&self, page: &Page) -> bool {
        self.render_invisible || page.visible
    }
}

/// Default link markup: `<a>` for pages with a uri, `<span>` otherwise.
pub struct AnchorRenderer<'a> {
    escaper: &'a dyn Escaper,
    translator: Option<&'a dyn Translator>,
}

impl<'a> AnchorRenderer<'a> {
    pub fn new(escaper: &'a dyn Escaper) -> Self {
        Self {
            escaper,
            translator: None,
        }
    }

    pub fn with_translator(mut self, translator: &'a dyn Translator) -> Self {
        self.translator = Some(translator);
        self
    }
}

impl LabelRenderer for AnchorRenderer<'_> {
    fn to_html(
        &self,
        page: &Page,
        escape_label: bool,
        class_on_anchor: bool,
        attributes: &BTreeMap<String, String>,
    ) -> String {
        let mut label = self.translate(&page.label);
        if escape_label {
            label = self.escaper.escape(&label);
        }

        let mut attrs: Vec<(String, String)> = Vec::new();
        if let Some(id) = &page.id {
            attrs.push(("id".to_string(), id.clone()));
        }
        if let Some(title) = &page.title {
            attrs.push(("title".to_string(), self.translate(title)));
        }
        if class_on_anchor && !page.class.is_empty() {
            attrs.push(("class".to_string(), page.class.as_str().to_string()));
        }

        let element = match &page.uri {
            Some(uri) => {
                attrs.push(("href".to_string(), uri.clone()));
                if let Some(target) = &page.target {
                    attrs.push(("target".to_string(), target.clone()));
                }
                "a"
            }
            None => "span",
        };

        for (name, value) in attributes {
            match attrs.iter_mut().find(|(existing, _)| existing == name) {
                Some(slot) => slot.1 = value.clone(),
                None => attrs.push((name.clone(), value.clone())),
            }
        }

        let rendered = render_attributes(
            attrs.iter().map(|(name, value)| (name.as_str(), value.as_str())),
            self.escaper,
        );
        format!("<{element}{rendered}>{label}</{element}>")
    }

    fn translate(&self, text: &str) -> String {
        match self.translator {
            Some(translator) => translator.translate(text),
            None => text.to_string(),
        }
    }
}
