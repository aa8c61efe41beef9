pub mod handlers;
pub mod sample;
pub mod search;
pub mod source;
