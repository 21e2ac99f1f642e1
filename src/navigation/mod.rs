pub mod container;
pub mod types;

pub use container::*;
pub use types::*;
