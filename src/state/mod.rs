pub mod camera;
pub mod settings;

pub use camera::{CameraState, CameraUpdate, PointerInput};
pub use settings::EditorSettings;
