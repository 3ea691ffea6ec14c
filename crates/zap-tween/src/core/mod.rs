pub mod instance;
pub mod target;
pub mod time;
