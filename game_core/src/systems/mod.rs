pub mod collision;
pub mod combat;
pub mod input;
pub mod outcome;
pub mod physics;
pub mod projectiles;

pub use collision::*;
pub use combat::*;
pub use input::*;
pub use outcome::*;
pub use physics::*;
pub use projectiles::*;
