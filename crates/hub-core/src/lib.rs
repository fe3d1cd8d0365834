pub mod compact;
pub mod constants;
pub mod geometry;
pub mod node;
pub mod parallax;
pub mod params;
pub mod scene;
pub mod view;

pub use compact::*;
pub use geometry::*;
pub use node::*;
pub use params::*;
pub use scene::*;
