pub mod config;
pub mod constants;
pub mod layout;
pub mod rating;
pub mod scene;
pub mod store;
pub mod svg;

pub use config::*;
pub use constants::*;
pub use layout::*;
pub use rating::*;
pub use scene::*;
pub use store::*;
pub use svg::*;
