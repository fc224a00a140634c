pub mod collision;
pub mod control;
pub mod gc;
pub mod movement;
pub mod scoring;
pub mod spawning;
pub mod wrap;

pub use collision::*;
pub use control::*;
pub use gc::*;
pub use movement::*;
pub use scoring::*;
pub use spawning::*;
pub use wrap::*;
