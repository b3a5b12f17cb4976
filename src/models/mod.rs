pub mod event;
pub mod filter;
