pub mod direction;
pub mod gamemode;
pub mod math;

pub use direction::BlockDirection;
pub use gamemode::GameMode;
