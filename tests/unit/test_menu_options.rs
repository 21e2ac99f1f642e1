#[cfg(test)]
mod tests {
    use crate::{assert_well_nested, render_menu, rendered_labels, site_tree};
    use anyhow::Result;
    use navrender::*;

    // maxDepth = 0 keeps only the root level
    #[test]
    fn test_max_depth_zero_renders_root_level_only() {
        let mut container = Container::from_specs(vec![PageSpec::new("Root")
            .uri("/root")
            .child(PageSpec::new("C1").uri("/c1"))
            .child(PageSpec::new("C2").uri("/c2"))]);

        let html = render_menu(&mut container, MenuOverrides::new().max_depth(Some(0)));

        let expected = r#"<ul class="nav navigation">
    <li class="nav-item dropdown">
        <a class="nav-link dropdown-toggle" href="/root" aria-expanded="false" data-bs-toggle="dropdown" role="button">Root</a>
    </li>
</ul>"#;
        assert_eq!(html, expected);
        assert_eq!(html.matches("<ul").count(), 1);
        assert!(!html.contains("C1"));
    }

    #[test]
    fn test_max_depth_one_stops_below_second_level() {
        let mut container = site_tree();
        let html = render_menu(&mut container, MenuOverrides::new().max_depth(Some(1)));

        assert_eq!(
            rendered_labels(&html),
            vec!["Home", "Docs", "Intro", "API", "About", "Team", "Contact"]
        );
        assert_well_nested(&html);
    }

    #[test]
    fn test_min_depth_beyond_tree_is_empty() {
        let mut container = site_tree();
        let html = render_menu(&mut container, MenuOverrides::new().min_depth(Some(3)));
        assert_eq!(html, "");
    }

    #[test]
    fn test_negative_min_depth_is_clamped() {
        let mut container = site_tree();
        let clamped = render_menu(&mut container, MenuOverrides::new().min_depth(Some(-2)));
        let default = render_menu(&mut container, MenuOverrides::new());
        assert_eq!(clamped, default);
    }

    #[test]
    fn test_min_and_max_depth_window() {
        let mut container = site_tree();
        let html = render_menu(
            &mut container,
            MenuOverrides::new().min_depth(Some(1)).max_depth(Some(1)),
        );
        assert_eq!(
            rendered_labels(&html),
            vec!["Intro", "API", "Team", "Contact"]
        );
        // all on the top level of the output
        assert_eq!(html.matches("<ul").count(), 1);
    }

    // A rejected page takes its whole subtree with it
    #[test]
    fn test_filtered_page_hides_subtree_but_not_siblings() {
        let mut container = site_tree();
        let escaper = HtmlEscaper;
        let labels = AnchorRenderer::new(&escaper);
        let no_team = |page: &Page| page.label != "Team";
        let mut menu = Menu::new(Navigation::new(&no_team, &labels, &escaper));

        let html = menu
            .render_menu((&mut container).into(), &MenuOverrides::new())
            .unwrap();

        let labels = rendered_labels(&html);
        assert!(!labels.contains(&"Team".to_string()));
        assert!(!labels.contains(&"People".to_string()));
        assert!(labels.contains(&"Contact".to_string()));
        assert_well_nested(&html);
    }

    // Known boundary: the dropdown toggle is decided on raw child existence,
    // so a page whose only child is hidden still looks expandable.
    #[test]
    fn test_dropdown_classes_ignore_child_filtering() {
        let mut container = Container::from_specs(vec![PageSpec::new("Parent")
            .uri("/parent")
            .child(PageSpec::new("Hidden").uri("/hidden").visible(false))]);

        let html = render_menu(&mut container, MenuOverrides::new());

        assert!(html.contains(r#"<li class="nav-item dropdown">"#));
        assert!(html.contains("dropdown-toggle"));
        assert!(!html.contains("Hidden"));
        assert!(!html.contains("dropdown-menu"));
    }

    #[test]
    fn test_invisible_pages_are_hidden_by_default() {
        let mut container = Container::from_specs(vec![
            PageSpec::new("Shown").uri("/shown"),
            PageSpec::new("Hidden").uri("/hidden").visible(false),
        ]);
        let html = render_menu(&mut container, MenuOverrides::new());
        assert_eq!(rendered_labels(&html), vec!["Shown"]);
    }

    #[test]
    fn test_invalid_vertical_breakpoint_is_an_error() {
        let mut container = site_tree();
        let escaper = HtmlEscaper;
        let labels = AnchorRenderer::new(&escaper);
        let filter = VisibilityFilter::new();
        let mut menu = Menu::new(Navigation::new(&filter, &labels, &escaper));

        let result = menu.render_menu(
            (&mut container).into(),
            &MenuOverrides::new().vertical(Vertical::Breakpoint("wide".to_string())),
        );
        assert!(matches!(
            result,
            Err(NavigationError::InvalidBreakpoint { ref token }) if token == "wide"
        ));
    }

    #[test]
    fn test_vertical_breakpoint_classes() -> Result<()> {
        let mut container = site_tree();
        let html = render_menu(
            &mut container,
            MenuOverrides::new()
                .vertical(Vertical::Breakpoint("lg".to_string()))
                .pills(true)
                .centered(true),
        );
        assert!(html.starts_with(
            r#"<ul class="nav nav-pills justify-content-center flex-column flex-lg-row navigation">"#
        ));
        Ok(())
    }

    #[test]
    fn test_default_and_named_containers() -> Result<()> {
        let escaper = HtmlEscaper;
        let labels = AnchorRenderer::new(&escaper);
        let filter = VisibilityFilter::new();
        let mut menu = Menu::new(Navigation::new(&filter, &labels, &escaper))
            .with_container(Container::from_specs(vec![PageSpec::new("Main").uri("/")]));
        menu.containers_mut().register(
            "footer",
            Container::from_specs(vec![PageSpec::new("Imprint").uri("/imprint")]),
        );

        let main = menu.render_menu(ContainerSource::Default, &MenuOverrides::new())?;
        assert_eq!(rendered_labels(&main), vec!["Main"]);

        let none: Option<&mut Container> = None;
        let fallback = menu.render_menu(none.into(), &MenuOverrides::new())?;
        assert_eq!(fallback, main);

        let footer = menu.render_menu(ContainerSource::Named("footer"), &MenuOverrides::new())?;
        assert_eq!(rendered_labels(&footer), vec!["Imprint"]);

        let missing = menu.render_menu(ContainerSource::Named("nope"), &MenuOverrides::new());
        assert!(matches!(missing, Err(NavigationError::UnknownContainer(_))));
        Ok(())
    }

    #[test]
    fn test_helper_defaults_apply_to_every_call() -> Result<()> {
        let mut container = site_tree();
        let escaper = HtmlEscaper;
        let labels = AnchorRenderer::new(&escaper);
        let filter = VisibilityFilter::new();
        let mut menu = Menu::new(Navigation::new(&filter, &labels, &escaper)).with_options(
            MenuOptions {
                max_depth: Some(0),
                ul_class: "main-nav".to_string(),
                ..MenuOptions::default()
            },
        );

        let html = menu.render(ContainerSource::Instance(&mut container))?;
        assert!(html.starts_with(r#"<ul class="nav main-nav">"#));
        assert_eq!(rendered_labels(&html), vec!["Home", "Docs", "About"]);

        // a per-call override lifts the helper's bound
        let html = menu.render_menu(
            ContainerSource::Instance(&mut container),
            &MenuOverrides::new().max_depth(None),
        )?;
        assert!(rendered_labels(&html).contains(&"People".to_string()));
        assert_eq!(menu.options().max_depth, Some(0));
        Ok(())
    }

    #[test]
    fn test_custom_active_class() {
        let mut container = site_tree();
        let html = render_menu(&mut container, MenuOverrides::new().li_active_class("current"));
        assert!(html.contains(r#"<li class="nav-item dropdown current">"#));
        assert!(html.contains(r#"<li class="current">"#));
    }

    #[test]
    fn test_htmlify_single_page() {
        let container = Container::from_specs(vec![PageSpec::new("Home").uri("/").class("brand")]);
        let escaper = HtmlEscaper;
        let labels = AnchorRenderer::new(&escaper);
        let filter = VisibilityFilter::new();
        let menu = Menu::new(Navigation::new(&filter, &labels, &escaper));
        let page = container.page(container.roots()[0]);

        assert_eq!(
            menu.htmlify(page, true, false),
            r#"<a class="brand" href="/">Home</a>"#
        );
        assert_eq!(menu.htmlify(page, true, true), r#"<a href="/">Home</a>"#);
    }
}
