pub mod constants;
pub mod keyboard;
pub mod note;
pub mod pick;
pub mod scene;
pub mod tween;
pub static PIANO_WGSL: &str = include_str!("../shaders/piano.wgsl");

pub use constants::*;
pub use keyboard::*;
pub use note::*;
pub use pick::*;
pub use scene::*;
pub use tween::*;
