use crate::error::{NavResult, NavigationError};
use crate::renderer::components::ClassList;
use crate::renderer::options::{MenuOptions, Vertical};

/// Bootstrap breakpoints, smallest first.
pub const BREAKPOINTS: [&str; 5] = ["sm", "md", "lg", "xl", "xxl"];

/// Substitute a validated breakpoint into a class template such as
/// `flex-%s-row`.
pub fn size_class(token: &str, template: &str) -> NavResult<String> {
    if !BREAKPOINTS.contains(&token) {
        return Err(NavigationError::InvalidBreakpoint {
            token: token.to_string(),
        });
    }
    Ok(template.replace("%s", token))
}

/// Classes of the top-level `<ul>` for the given layout toggles.
pub fn list_classes(options: &MenuOptions) -> NavResult<ClassList> {
    let mut classes = ClassList::new();
    classes
        .push("nav")
        .push_if(options.tabs, "nav-tabs")
        .push_if(options.pills, "nav-pills")
        .push_if(options.fill, "nav-fill")
        .push_if(options.justified, "nav-justified")
        .push_if(options.centered, "justify-content-center")
        .push_if(options.right_aligned, "justify-content-end");

    match &options.vertical {
        Vertical::Toggle(false) => {}
        Vertical::Toggle(true) => {
            classes.push("flex-column");
        }
        Vertical::Breakpoint(token) => {
            let row = size_class(token, "flex-%s-row")?;
            classes.push("flex-column").push(&row);
        }
    }

    classes.push(&options.ul_class);
    Ok(classes)
}
