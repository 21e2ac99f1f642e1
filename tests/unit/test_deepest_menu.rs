#[cfg(test)]
mod tests {
    use crate::{render_menu, rendered_labels, site_tree};
    use anyhow::Result;
    use navrender::*;

    fn deepest() -> MenuOverrides {
        MenuOverrides::new()
            .only_active_branch(true)
            .render_parents(false)
    }

    #[test]
    fn test_children_of_active_page() {
        let mut container = site_tree();
        container.activate_uri("/docs");

        let html = render_menu(&mut container, deepest());
        let expected = r#"<ul class="nav navigation">
    <li class="nav-item">
        <a class="nav-link" href="/docs/intro">Intro</a>
    </li>
    <li class="nav-item">
        <a class="nav-link" href="/docs/api">API</a>
    </li>
</ul>"#;
        assert_eq!(html, expected);
    }

    #[test]
    fn test_siblings_when_children_exceed_max_depth() {
        let mut container = site_tree();
        container.activate_uri("/about/team");

        let html = render_menu(&mut container, deepest().max_depth(Some(1)));
        let expected = r#"<ul class="nav navigation">
    <li class="nav-item active">
        <a class="nav-link active" href="/about/team" aria-current="page">Team</a>
    </li>
    <li class="nav-item">
        <a class="nav-link" href="/about/contact">Contact</a>
    </li>
</ul>"#;
        assert_eq!(html, expected);
    }

    #[test]
    fn test_active_page_one_above_min_depth() {
        let mut container = site_tree();
        container.activate_uri("/about/team");

        let html = render_menu(&mut container, deepest().min_depth(Some(2)));
        assert_eq!(rendered_labels(&html), vec!["People"]);
    }

    #[test]
    fn test_childless_active_page_above_min_depth_is_empty() {
        let mut container = site_tree();
        // Intro sits at depth 1 and has no children
        let html = render_menu(&mut container, deepest().min_depth(Some(2)));
        assert_eq!(html, "");
    }

    #[test]
    fn test_no_active_page_is_empty() {
        let mut container = site_tree();
        container.activate_uri("/nowhere");
        assert_eq!(render_menu(&mut container, deepest()), "");
    }

    #[test]
    fn test_root_level_leaf_lists_root_level() {
        let mut container = site_tree();
        container.activate_uri("/");

        let html = render_menu(&mut container, deepest());
        assert_eq!(rendered_labels(&html), vec!["Home", "Docs", "About"]);
        assert!(html.contains(r#"<li class="nav-item active">"#));
    }

    #[test]
    fn test_hidden_entries_are_skipped() {
        let mut container = Container::from_specs(vec![PageSpec::new("Parent")
            .uri("/p")
            .active(true)
            .child(PageSpec::new("Visible").uri("/p/v"))
            .child(PageSpec::new("Hidden").uri("/p/h").visible(false))]);

        let html = render_menu(&mut container, deepest());
        assert_eq!(rendered_labels(&html), vec!["Visible"]);
    }

    #[test]
    fn test_hidden_active_page_is_not_found() {
        let mut container = Container::from_specs(vec![PageSpec::new("Parent")
            .uri("/p")
            .child(PageSpec::new("Secret").uri("/p/s").visible(false).active(true))]);

        assert_eq!(render_menu(&mut container, deepest()), "");
    }

    // Deepest-branch output is always contained in the render-parents output
    #[test]
    fn test_deepest_is_subset_of_active_branch() {
        for uri in ["/", "/docs", "/docs/intro", "/about", "/about/team", "/about/team/people"] {
            for min_depth in [None, Some(1), Some(2)] {
                for max_depth in [None, Some(0), Some(1), Some(2)] {
                    let mut container = site_tree();
                    container.activate_uri(uri);

                    let narrow = render_menu(
                        &mut container,
                        deepest().min_depth(min_depth).max_depth(max_depth),
                    );
                    let wide = render_menu(
                        &mut container,
                        MenuOverrides::new()
                            .only_active_branch(true)
                            .min_depth(min_depth)
                            .max_depth(max_depth),
                    );

                    let wide_labels = rendered_labels(&wide);
                    for label in rendered_labels(&narrow) {
                        assert!(
                            wide_labels.contains(&label),
                            "{} missing for {} / {:?}..{:?}:\n{}\n---\n{}",
                            label,
                            uri,
                            min_depth,
                            max_depth,
                            narrow,
                            wide
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_active_page_above_min_depth_lists_children_in_both_modes() {
        let mut container = site_tree();
        container.activate_uri("/about");

        let narrow = render_menu(&mut container, deepest().min_depth(Some(1)));
        let wide = render_menu(
            &mut container,
            MenuOverrides::new()
                .only_active_branch(true)
                .min_depth(Some(1)),
        );
        assert_eq!(rendered_labels(&narrow), vec!["Team", "Contact"]);
        assert_eq!(rendered_labels(&wide), vec!["Team", "Contact"]);
    }

    #[test]
    fn test_max_depth_below_min_depth_is_empty() {
        let mut container = site_tree();
        container.activate_uri("/about");
        let html = render_menu(&mut container, deepest().min_depth(Some(1)).max_depth(Some(0)));
        assert_eq!(html, "");
    }

    #[test]
    fn test_render_sub_menu() -> Result<()> {
        let mut container = site_tree();
        container.activate_uri("/about");
        let escaper = HtmlEscaper;
        let labels = AnchorRenderer::new(&escaper);
        let filter = VisibilityFilter::new();
        let mut menu = Menu::new(Navigation::new(&filter, &labels, &escaper))
            .with_options(MenuOptions {
                max_depth: Some(0),
                ..MenuOptions::default()
            });

        let html = menu.render_sub_menu(
            ContainerSource::Instance(&mut container),
            Some("sub"),
            Some(Indent::Columns(2)),
            None,
        )?;
        assert!(html.starts_with(r#"  <ul class="nav sub">"#));
        assert!(html.ends_with("  </ul>"));
        // the helper's max depth does not apply to sub menus
        assert_eq!(rendered_labels(&html), vec!["Team", "Contact"]);
        Ok(())
    }
}
