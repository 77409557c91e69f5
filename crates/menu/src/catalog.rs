use foodplan_shared::{Dish, DishCategory, EligibilityClass, MealSlot, slugify};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::LazyLock;

use crate::error::MenuError;

static BUILTIN: LazyLock<MenuCatalog> = LazyLock::new(|| {
    MenuCatalog::new(crate::builtin::dishes()).expect("built-in catalog has unique slugs")
});

/// The static dish catalog and the queries derived from it.
///
/// A catalog is immutable once built. Every view is computed from the single
/// dish list, so lunch/dinner membership can never drift apart:
/// - lunch: light dishes
/// - dinner: light and dinner-only dishes
///
/// Random-eligible views additionally drop manual-only dishes.
#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    dishes: Vec<Dish>,
    by_slug: HashMap<String, usize>,
}

/// One `[[dishes]]` entry of a catalog file.
#[derive(Debug, Deserialize)]
struct DishEntry {
    name: String,
    slug: Option<String>,
    category: DishCategory,
    eligibility: EligibilityClass,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    dishes: Vec<DishEntry>,
}

impl MenuCatalog {
    /// Process-wide catalog shipped with the binary.
    pub fn builtin() -> &'static MenuCatalog {
        &BUILTIN
    }

    /// Builds a catalog, keeping the given order as definition order.
    ///
    /// Returns an error if a dish has an empty name, a slug that is not in
    /// canonical form (lowercase ASCII words joined by single dashes), or a
    /// slug shared with another dish.
    pub fn new(dishes: impl IntoIterator<Item = Dish>) -> Result<Self, MenuError> {
        let mut catalog = MenuCatalog::default();

        for dish in dishes {
            if dish.name.trim().is_empty() {
                return Err(MenuError::EmptyName);
            }

            // slugs become file names, so they must never carry path syntax
            if dish.slug.is_empty() || dish.slug != slugify(&dish.slug) {
                return Err(MenuError::InvalidSlug(dish.slug));
            }

            if catalog.by_slug.contains_key(&dish.slug) {
                return Err(MenuError::DuplicateSlug(dish.slug));
            }

            catalog
                .by_slug
                .insert(dish.slug.clone(), catalog.dishes.len());
            catalog.dishes.push(dish);
        }

        Ok(catalog)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, MenuError> {
        let file: CatalogFile = toml::from_str(content)?;

        Self::new(file.dishes.into_iter().map(|entry| {
            let dish = Dish::new(&entry.name, entry.category, entry.eligibility);
            match entry.slug {
                Some(slug) => dish.with_slug(slug),
                None => dish,
            }
        }))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, MenuError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;

        tracing::debug!(
            path = %path.display(),
            dishes = catalog.len(),
            "Loaded dish catalog"
        );

        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// All dishes in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Dish> {
        self.dishes.iter()
    }

    /// Every dish valid for the slot, random-eligible and manual-only alike.
    pub fn dishes_for(&self, slot: MealSlot) -> Vec<&Dish> {
        self.dishes.iter().filter(|d| d.is_valid_for(slot)).collect()
    }

    pub fn random_eligible_for(&self, slot: MealSlot) -> Vec<&Dish> {
        self.dishes
            .iter()
            .filter(|d| d.is_valid_for(slot) && d.is_random_eligible())
            .collect()
    }

    pub fn light_dishes(&self) -> Vec<&Dish> {
        self.by_category(DishCategory::Light)
    }

    pub fn dinner_only_dishes(&self) -> Vec<&Dish> {
        self.by_category(DishCategory::DinnerOnly)
    }

    fn by_category(&self, category: DishCategory) -> Vec<&Dish> {
        self.dishes
            .iter()
            .filter(|d| d.category == category)
            .collect()
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&Dish> {
        self.by_slug.get(slug).map(|&i| &self.dishes[i])
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Dish> {
        let name = name.trim();
        self.dishes.iter().find(|d| d.name == name)
    }

    /// Display name for an asset slug.
    pub fn display_name(&self, slug: &str) -> Option<&str> {
        self.find_by_slug(slug).map(|d| d.name.as_str())
    }

    /// `(slug, display name)` pairs in definition order.
    pub fn slugs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.dishes
            .iter()
            .map(|d| (d.slug.as_str(), d.name.as_str()))
    }

    /// Picks `count` distinct random-eligible dishes for the slot, none of
    /// which appear in `excluding` (a set of slugs).
    ///
    /// The exclusion set is applied before sampling, so an undersized pool is
    /// always reported as [`MenuError::InsufficientCandidates`] rather than
    /// depending on the random draw.
    pub fn pick_random<R: Rng + ?Sized>(
        &self,
        slot: MealSlot,
        count: usize,
        excluding: &HashSet<String>,
        rng: &mut R,
    ) -> Result<Vec<&Dish>, MenuError> {
        let mut candidates: Vec<&Dish> = self
            .random_eligible_for(slot)
            .into_iter()
            .filter(|d| !excluding.contains(&d.slug))
            .collect();

        if candidates.len() < count {
            return Err(MenuError::InsufficientCandidates {
                slot,
                requested: count,
                available: candidates.len(),
            });
        }

        candidates.shuffle(rng);
        candidates.truncate(count);

        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn light(name: &str) -> Dish {
        Dish::new(name, DishCategory::Light, EligibilityClass::RandomEligible)
    }

    #[test]
    fn test_builtin_catalog_builds() {
        let catalog = MenuCatalog::builtin();

        assert_eq!(catalog.len(), 42);
        assert_eq!(catalog.dishes_for(MealSlot::Lunch).len(), 31);
        assert_eq!(catalog.dishes_for(MealSlot::Dinner).len(), 42);
        assert_eq!(catalog.random_eligible_for(MealSlot::Lunch).len(), 18);
        assert_eq!(catalog.random_eligible_for(MealSlot::Dinner).len(), 23);
    }

    #[test]
    fn test_builtin_dinner_order_lists_light_first() {
        let catalog = MenuCatalog::builtin();
        let dinner = catalog.dishes_for(MealSlot::Dinner);

        assert_eq!(dinner.first().unwrap().name, "Couscous Chana Salad");
        assert_eq!(dinner.last().unwrap().name, "Aloo Gobhi & Roti & Raita");

        let first_dinner_only = dinner
            .iter()
            .position(|d| d.category == DishCategory::DinnerOnly)
            .unwrap();
        assert!(
            dinner[first_dinner_only..]
                .iter()
                .all(|d| d.category == DishCategory::DinnerOnly)
        );
    }

    #[test]
    fn test_new_rejects_duplicate_slug() {
        let result = MenuCatalog::new(vec![light("Pasta Salad"), light("pasta  salad")]);

        assert!(matches!(result, Err(MenuError::DuplicateSlug(slug)) if slug == "pasta-salad"));
    }

    #[test]
    fn test_new_rejects_empty_name() {
        let result = MenuCatalog::new(vec![light("   ")]);

        assert!(matches!(result, Err(MenuError::EmptyName)));
    }

    #[test]
    fn test_new_rejects_non_canonical_slug() {
        let result = MenuCatalog::new(vec![light("Upma").with_slug("../upma")]);

        assert!(matches!(result, Err(MenuError::InvalidSlug(slug)) if slug == "../upma"));
    }

    #[test]
    fn test_display_name_lookup() {
        let catalog = MenuCatalog::builtin();

        assert_eq!(catalog.display_name("vermicelli"), Some("Vermicelli with Veggies"));
        assert_eq!(catalog.display_name("tacos"), None);
        assert_eq!(
            catalog.find_by_name(" Upma ").map(|d| d.slug.as_str()),
            Some("upma")
        );
    }

    #[test]
    fn test_pick_random_zero_count() {
        let catalog = MenuCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(1);

        let picked = catalog
            .pick_random(MealSlot::Lunch, 0, &HashSet::new(), &mut rng)
            .unwrap();

        assert!(picked.is_empty());
    }

    #[test]
    fn test_pick_random_empty_catalog() {
        let catalog = MenuCatalog::default();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(catalog.dishes_for(MealSlot::Dinner).is_empty());
        assert!(matches!(
            catalog.pick_random(MealSlot::Dinner, 1, &HashSet::new(), &mut rng),
            Err(MenuError::InsufficientCandidates {
                requested: 1,
                available: 0,
                ..
            })
        ));
    }
}
