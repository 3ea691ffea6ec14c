pub mod definition;
pub mod types;
