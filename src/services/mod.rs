pub mod catalog;
pub mod refresher;
pub mod world_clock;
