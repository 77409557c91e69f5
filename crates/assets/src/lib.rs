mod download;
mod error;
mod manifest;

pub use download::*;
pub use error::*;
pub use manifest::*;
