pub mod args;
mod catalog;
pub mod commands;
mod error;
pub mod extract;
pub mod model;
pub mod render;
#[cfg(test)]
mod test;
mod utils;

pub use catalog::{Catalog, CourseType};
pub use error::Error;
pub use error::Result;
