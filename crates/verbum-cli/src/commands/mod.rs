pub mod schema;
pub mod study;
