#![allow(clippy::many_single_char_names)]

pub mod camera;
pub mod error;
pub mod lighting;
pub mod material;
pub mod math;
pub mod object;
pub mod output;
pub mod scene;

pub use error::TraceError;
pub use scene::{RenderStats, Scene, SceneOptions};
