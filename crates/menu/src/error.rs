use chrono::Weekday;
use foodplan_shared::MealSlot;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error(
        "Insufficient candidates for {slot}: requested {requested} dishes, but only {available} available"
    )]
    InsufficientCandidates {
        slot: MealSlot,
        requested: usize,
        available: usize,
    },

    #[error("Duplicate dish slug in catalog: {0}")]
    DuplicateSlug(String),

    #[error("Dish name must not be empty")]
    EmptyName,

    #[error("Invalid dish slug {0:?}: use lowercase letters, digits and single dashes")]
    InvalidSlug(String),

    #[error("Failed to parse catalog: {0}")]
    CatalogParse(#[from] toml::de::Error),

    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dish not found: {0}")]
    DishNotFound(String),

    #[error("Dish {dish} cannot be served for {slot}")]
    NotAllowedForSlot { dish: String, slot: MealSlot },

    #[error("No {slot} #{index} planned for {day}")]
    MealNotFound {
        day: Weekday,
        slot: MealSlot,
        index: usize,
    },

    #[error("Invalid plan request: {0}")]
    InvalidRequest(String),
}

impl From<MenuError> for foodplan_shared::Error {
    fn from(value: MenuError) -> Self {
        match value {
            MenuError::InsufficientCandidates { .. }
            | MenuError::DishNotFound(_)
            | MenuError::NotAllowedForSlot { .. }
            | MenuError::MealNotFound { .. }
            | MenuError::InvalidRequest(_) => Self::User(value.to_string()),
            MenuError::DuplicateSlug(_)
            | MenuError::EmptyName
            | MenuError::InvalidSlug(_)
            | MenuError::CatalogParse(_)
            | MenuError::Io(_) => Self::Server(value.to_string()),
        }
    }
}
