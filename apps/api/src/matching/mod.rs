pub mod handlers;
pub mod keywords;
pub mod matcher;
pub mod scoring;
pub mod selector;
