pub mod robots;
pub mod roster;
pub mod weapons;
