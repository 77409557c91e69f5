pub mod assets;
pub mod dishes;
pub mod plan;
