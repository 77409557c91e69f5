use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Serialize, Deserialize, EnumString, Display, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MealSlot {
    Lunch,
    Dinner,
}

/// Which meal slots a dish may be served in.
#[derive(Serialize, Deserialize, EnumString, Display, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DishCategory {
    /// Served at lunch or dinner
    Light,
    /// Too heavy for lunch
    DinnerOnly,
}

impl DishCategory {
    pub fn allows(&self, slot: MealSlot) -> bool {
        match self {
            DishCategory::Light => true,
            DishCategory::DinnerOnly => slot == MealSlot::Dinner,
        }
    }
}

/// Whether random generation may pick a dish.
#[derive(Serialize, Deserialize, EnumString, Display, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EligibilityClass {
    #[serde(rename = "random")]
    #[strum(to_string = "random")]
    RandomEligible,
    /// Only reachable through explicit selection
    #[serde(rename = "manual")]
    #[strum(to_string = "manual")]
    ManualOnly,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dish {
    pub slug: String,
    pub name: String,
    pub category: DishCategory,
    pub eligibility: EligibilityClass,
}

impl Dish {
    /// Creates a dish whose slug is derived from its name.
    pub fn new(
        name: impl AsRef<str>,
        category: DishCategory,
        eligibility: EligibilityClass,
    ) -> Self {
        let name = name.as_ref().trim().to_owned();

        Self {
            slug: slugify(&name),
            name,
            category,
            eligibility,
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn is_valid_for(&self, slot: MealSlot) -> bool {
        self.category.allows(slot)
    }

    pub fn is_random_eligible(&self) -> bool {
        self.eligibility == EligibilityClass::RandomEligible
    }
}

/// Lowercases ASCII alphanumerics and collapses every other run of
/// characters into a single `-`.
///
/// ```
/// assert_eq!(
///     foodplan_shared::slugify("Soup + Grilled Chicken/Paneer "),
///     "soup-grilled-chicken-paneer"
/// );
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}
