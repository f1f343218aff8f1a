pub mod odds;
pub mod play;
pub mod verify;
