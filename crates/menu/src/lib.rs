mod builtin;
pub mod catalog;
pub mod error;
pub mod planner;

pub use catalog::MenuCatalog;
pub use error::MenuError;
pub use planner::{DayPlan, PlanRequest, RepeatPolicy, WeekPlan};
