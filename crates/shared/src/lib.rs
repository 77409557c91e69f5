mod dish;
mod error;

pub use dish::*;
pub use error::*;
