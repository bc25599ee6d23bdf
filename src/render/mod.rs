pub mod diagram;
pub mod icons;
pub mod scene;
pub mod svg;

pub use diagram::build_scene;
pub use scene::{Scene, SceneItem};
pub use svg::render_svg;
