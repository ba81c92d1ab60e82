pub mod assets;
pub mod background;
pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod frame;
pub mod headless;
pub mod loaders;
pub mod material;
pub mod math;
pub mod mesh;
pub mod scene;
pub mod scenes;
pub mod traits;
pub mod types;

pub use assets::{AssetLibrary, ShaderHandle, TextureHandle};
pub use config::SceneConfig;
pub use driver::{Driver, RunSummary};
pub use error::{AssetError, GeometryError, MaterialError};
pub use frame::{FixedStepFrames, FrameInfo, FrameIterator};
pub use headless::HeadlessViewer;
pub use mesh::{create_building, create_cylinder, create_ground_plane, create_sphere, Mesh, PlacedMesh};
pub use scene::{ObjectId, Scene, SceneObject};
pub use scenes::CityScene;
