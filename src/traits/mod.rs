pub mod frame;
pub mod scene;
pub mod viewer;

pub use frame::*;
pub use scene::*;
pub use viewer::*;
