pub mod error;
pub mod geometry;
pub mod layout;
pub mod math;
pub mod operations;
pub mod plate;

pub use error::{KeyplateError, Result};
