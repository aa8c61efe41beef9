pub mod editing;
pub mod handlers;
pub mod scan;
pub mod store;
