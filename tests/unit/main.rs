//! Library-level tests for the menu and breadcrumb helpers.

mod test_deepest_menu;
mod test_menu_options;

use navrender::*;

/// Home, Docs (Intro*, API), About (Team (People), Contact); `*` is active.
pub fn site_tree() -> Container {
    Container::from_specs(vec![
        PageSpec::new("Home").uri("/"),
        PageSpec::new("Docs")
            .uri("/docs")
            .child(PageSpec::new("Intro").uri("/docs/intro").active(true))
            .child(PageSpec::new("API").uri("/docs/api")),
        PageSpec::new("About")
            .uri("/about")
            .child(
                PageSpec::new("Team")
                    .uri("/about/team")
                    .child(PageSpec::new("People").uri("/about/team/people")),
            )
            .child(PageSpec::new("Contact").uri("/about/contact")),
    ])
}

pub fn render_menu(container: &mut Container, overrides: MenuOverrides) -> String {
    let escaper = HtmlEscaper;
    let labels = AnchorRenderer::new(&escaper);
    let filter = VisibilityFilter::new();
    let mut menu = Menu::new(Navigation::new(&filter, &labels, &escaper));
    menu.render_menu(ContainerSource::Instance(container), &overrides)
        .expect("menu renders")
}

pub fn render_breadcrumbs(container: &mut Container, overrides: BreadcrumbOverrides) -> String {
    let escaper = HtmlEscaper;
    let labels = AnchorRenderer::new(&escaper);
    let filter = VisibilityFilter::new();
    let mut breadcrumbs = Breadcrumbs::new(Navigation::new(&filter, &labels, &escaper));
    breadcrumbs
        .render_straight(ContainerSource::Instance(container), &overrides)
        .expect("breadcrumbs render")
}

/// Labels of rendered links, in output order.
pub fn rendered_labels(html: &str) -> Vec<String> {
    html.lines()
        .map(str::trim)
        .filter(|line| line.starts_with("<a") || line.starts_with("<span"))
        .filter_map(|line| {
            let start = line.find('>')? + 1;
            let end = line.rfind("</")?;
            Some(line[start..end].to_string())
        })
        .collect()
}

/// Checks that every `<ul>`/`<li>` line is closed in order.
pub fn assert_well_nested(html: &str) {
    let mut stack: Vec<&str> = Vec::new();
    for line in html.lines().map(str::trim) {
        if line.starts_with("<ul") {
            stack.push("ul");
        } else if line.starts_with("<li") {
            stack.push("li");
        } else if line == "</li>" {
            assert_eq!(stack.pop(), Some("li"), "unbalanced </li> in\n{}", html);
        } else if line == "</ul>" {
            assert_eq!(stack.pop(), Some("ul"), "unbalanced </ul> in\n{}", html);
        }
    }
    assert!(stack.is_empty(), "unclosed tags {:?} in\n{}", stack, html);
}
