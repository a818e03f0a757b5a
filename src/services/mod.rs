pub mod display;
pub mod exchange;
