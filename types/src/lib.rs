pub mod action;
pub mod coord;
pub mod pattern;
pub mod player;

pub use action::*;
pub use coord::*;
pub use pattern::*;
pub use player::*;
