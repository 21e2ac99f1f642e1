use std::collections::BTreeMap;

use crate::navigation::{Container, PageId};
use crate::renderer::components::ClassList;
use crate::renderer::traits::*;

/// Collaborators shared by the menu and breadcrumb helpers.
#[derive(Clone, Copy)]
pub struct Navigation<'a> {
    pub filter: &'a dyn PageFilter,
    pub labels: &'a dyn LabelRenderer,
    pub escaper: &'a dyn Escaper,
    pub partials: Option<&'a dyn PartialRenderer>,
}

impl<'a> Navigation<'a> {
    pub fn new(
        filter: &'a dyn PageFilter,
        labels: &'a dyn LabelRenderer,
        escaper: &'a dyn Escaper,
    ) -> Self {
        Self {
            filter,
            labels,
            escaper,
            partials: None,
        }
    }

    pub fn with_partials(mut self, partials: &'a dyn PartialRenderer) -> Self {
        self.partials = Some(partials);
        self
    }

    /// Label as plain text, translated the way the label renderer translates
    /// links, then escaped when asked to.
    pub fn label_text(&self, label: &str, escape: bool) -> String {
        let label = self.labels.translate(label);
        if escape {
            self.escaper.escape(&label)
        } else {
            label
        }
    }

    /// Link markup for a menu entry.
    ///
    /// With `add_class_to_list_item` the link classes travel as an extra
    /// `class` attribute. Otherwise they are merged in front of the page's own
    /// class and written back into the page, which is then rendered with its
    /// class on the anchor.
    pub fn menu_link(
        &self,
        container: &mut Container,
        id: PageId,
        escape_labels: bool,
        add_class_to_list_item: bool,
        mut link_classes: ClassList,
        mut attributes: BTreeMap<String, String>,
    ) -> String {
        if add_class_to_list_item {
            if !link_classes.is_empty() {
                attributes.insert("class".to_string(), link_classes.to_string());
            }
            return self
                .labels
                .to_html(container.page(id), escape_labels, false, &attributes);
        }

        let page = container.page_mut(id);
        link_classes.push(page.class.as_str());
        if !link_classes.is_empty() {
            page.set_rendered_class(link_classes.to_string());
        }
        self.labels
            .to_html(container.page(id), escape_labels, true, &attributes)
    }
}
