pub mod camera;
#[cfg(feature = "gui")]
pub mod painter;
pub mod scene;
pub mod view;

// Re-export the pieces the shell and the load pipeline use
pub use camera::{Camera, CameraCommand};
pub use scene::{build_scene, Scene, SceneOptions, ScenePrimitive, Viewport};
pub use view::SceneViewport;
