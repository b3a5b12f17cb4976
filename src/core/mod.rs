pub mod del;
pub mod display;
pub mod log;
pub mod sort;
pub mod tracker;
