pub mod handlers;
pub mod stats;
pub mod tracker;
