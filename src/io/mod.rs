pub mod json;
pub mod scene;
pub mod svg;

pub use json::{outlines_to_json, write_json};
pub use scene::{Scene, SceneFormat, SceneObject};
pub use svg::{render_svg, write_svg};
