//! Command implementations

mod dir;
mod file;

pub use dir::dir;
pub use file::file;
