pub mod bootstrap;
pub mod breadcrumbs;
pub mod components;
pub mod menu;
pub mod options;
pub mod partial;
pub mod renderer;
pub mod traits;
pub mod traversal;

pub use breadcrumbs::*;
pub use components::*;
pub use menu::*;
pub use options::*;
pub use partial::*;
pub use renderer::*;
pub use traits::*;
pub use traversal::*;
