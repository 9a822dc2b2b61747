pub mod collision;
pub mod intents;
pub mod movement;
pub mod walls;

pub use collision::*;
pub use intents::*;
pub use movement::*;
pub use walls::*;
