pub mod actions;
pub mod battle;
pub mod events;
pub mod factory;
pub mod replay;
pub mod state;
pub mod utils;
