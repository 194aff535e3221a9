pub mod timezone;

pub use timezone::*;
