//! # navrender
//!
//! Renders navigation page trees as Bootstrap menus and breadcrumbs.
//!
//! A [`Container`] holds the page tree. The [`Menu`] and [`Breadcrumbs`]
//! helpers walk it and produce nested HTML, calling out to a
//! [`PageFilter`], [`LabelRenderer`], [`Escaper`] and optionally a
//! [`PartialRenderer`] bundled in a [`Navigation`]. Label translation is
//! the label renderer's job; [`AnchorRenderer`] takes a [`Translator`].
//!
//! ```
//! use navrender::*;
//!
//! let mut container = Container::from_specs(vec![
//!     PageSpec::new("Home").uri("/"),
//!     PageSpec::new("Docs").uri("/docs").active(true),
//! ]);
//! let escaper = HtmlEscaper;
//! let labels = AnchorRenderer::new(&escaper);
//! let filter = VisibilityFilter::new();
//! let mut menu = Menu::new(Navigation::new(&filter, &labels, &escaper));
//!
//! let html = menu
//!     .render_menu((&mut container).into(), &MenuOverrides::new())
//!     .unwrap();
//! assert!(html.starts_with("<ul class=\"nav navigation\">"));
//! ```

pub mod error;
pub mod navigation;
pub mod renderer;


pub use error::*;
pub use navigation::*;
pub use renderer::*;
