use chrono::Weekday;
use foodplan_shared::{Dish, MealSlot};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::catalog::MenuCatalog;
use crate::error::MenuError;

/// What happens once every eligible dish has been used in the plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatPolicy {
    /// Fail with [`MenuError::InsufficientCandidates`]
    #[default]
    Never,
    /// Start a new rotation cycle: every dish becomes available again,
    /// except those already planned for the same day
    AfterExhaustion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    pub days: u8,
    pub lunches_per_day: usize,
    pub dinners_per_day: usize,
    pub repeat_policy: RepeatPolicy,
}

impl Default for PlanRequest {
    fn default() -> Self {
        PlanRequest {
            days: 7,
            lunches_per_day: 1,
            dinners_per_day: 1,
            repeat_policy: RepeatPolicy::Never,
        }
    }
}

impl PlanRequest {
    pub fn validate(&self) -> Result<(), MenuError> {
        if !(1..=7).contains(&self.days) {
            return Err(MenuError::InvalidRequest(format!(
                "days must be between 1 and 7, got {}",
                self.days
            )));
        }

        if self.lunches_per_day == 0 && self.dinners_per_day == 0 {
            return Err(MenuError::InvalidRequest(
                "at least one meal per day is required".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: Weekday,
    pub lunch: Vec<Dish>,
    pub dinner: Vec<Dish>,
}

impl DayPlan {
    pub fn meals(&self, slot: MealSlot) -> &[Dish] {
        match slot {
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    fn meals_mut(&mut self, slot: MealSlot) -> &mut Vec<Dish> {
        match slot {
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
        }
    }
}

/// Lunches and dinners for consecutive days starting on Monday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
    pub days: Vec<DayPlan>,
    /// Number of rotation cycles the generation went through (1 when no
    /// dish repeats)
    pub cycles: u32,
}

impl WeekPlan {
    /// Generates a plan by repeated random picks, excluding every dish that
    /// is already planned.
    #[tracing::instrument(skip(catalog, rng), fields(dishes = catalog.len()))]
    pub fn generate<R: Rng + ?Sized>(
        catalog: &MenuCatalog,
        request: &PlanRequest,
        rng: &mut R,
    ) -> Result<WeekPlan, MenuError> {
        request.validate()?;

        let mut rotation = Rotation {
            used: HashSet::new(),
            cycle: 1,
            policy: request.repeat_policy,
        };
        let mut days = Vec::with_capacity(request.days as usize);
        let mut day = Weekday::Mon;

        for _ in 0..request.days {
            let mut today = HashSet::new();
            let lunch = rotation.pick(
                catalog,
                MealSlot::Lunch,
                request.lunches_per_day,
                &mut today,
                rng,
            )?;
            let dinner = rotation.pick(
                catalog,
                MealSlot::Dinner,
                request.dinners_per_day,
                &mut today,
                rng,
            )?;

            days.push(DayPlan { day, lunch, dinner });
            day = day.succ();
        }

        tracing::debug!(
            days = days.len(),
            cycles = rotation.cycle,
            "Week plan generated"
        );

        Ok(WeekPlan {
            days,
            cycles: rotation.cycle,
        })
    }

    pub fn day(&self, day: Weekday) -> Option<&DayPlan> {
        self.days.iter().find(|d| d.day == day)
    }

    /// Slugs of every planned dish, suitable as an exclusion set.
    pub fn used_dishes(&self) -> HashSet<String> {
        self.days
            .iter()
            .flat_map(|d| d.lunch.iter().chain(d.dinner.iter()))
            .map(|d| d.slug.clone())
            .collect()
    }

    /// Replaces one planned meal with a manually chosen dish and returns the
    /// dish it replaced.
    ///
    /// Manual-only dishes are accepted; the dish only has to be valid for the
    /// slot.
    pub fn replace(
        &mut self,
        catalog: &MenuCatalog,
        day: Weekday,
        slot: MealSlot,
        index: usize,
        slug: &str,
    ) -> Result<Dish, MenuError> {
        let dish = catalog
            .find_by_slug(slug)
            .ok_or_else(|| MenuError::DishNotFound(slug.to_string()))?;

        if !dish.is_valid_for(slot) {
            return Err(MenuError::NotAllowedForSlot {
                dish: dish.name.clone(),
                slot,
            });
        }

        let meal = self
            .days
            .iter_mut()
            .find(|d| d.day == day)
            .and_then(|d| d.meals_mut(slot).get_mut(index))
            .ok_or(MenuError::MealNotFound { day, slot, index })?;

        let old = std::mem::replace(meal, dish.clone());

        tracing::debug!(%day, %slot, old = %old.slug, new = %slug, "Meal replaced");

        Ok(old)
    }
}

struct Rotation {
    used: HashSet<String>,
    cycle: u32,
    policy: RepeatPolicy,
}

impl Rotation {
    fn pick<R: Rng + ?Sized>(
        &mut self,
        catalog: &MenuCatalog,
        slot: MealSlot,
        count: usize,
        today: &mut HashSet<String>,
        rng: &mut R,
    ) -> Result<Vec<Dish>, MenuError> {
        let picked = match catalog.pick_random(slot, count, &self.used, rng) {
            Ok(picked) => picked,
            Err(MenuError::InsufficientCandidates { .. })
                if self.policy == RepeatPolicy::AfterExhaustion =>
            {
                self.cycle = self.cycle.saturating_add(1);
                self.used.clone_from(today);

                tracing::debug!(
                    %slot,
                    cycle = self.cycle,
                    "Candidate pool exhausted, starting a new rotation cycle"
                );

                catalog.pick_random(slot, count, &self.used, rng)?
            }
            Err(e) => return Err(e),
        };

        let picked: Vec<Dish> = picked.into_iter().cloned().collect();

        for dish in &picked {
            self.used.insert(dish.slug.clone());
            today.insert(dish.slug.clone());
        }

        Ok(picked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodplan_shared::{DishCategory, EligibilityClass};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small_catalog() -> MenuCatalog {
        MenuCatalog::new(vec![
            Dish::new("A", DishCategory::Light, EligibilityClass::RandomEligible),
            Dish::new("B", DishCategory::Light, EligibilityClass::RandomEligible),
            Dish::new("C", DishCategory::DinnerOnly, EligibilityClass::RandomEligible),
            Dish::new("M", DishCategory::DinnerOnly, EligibilityClass::ManualOnly),
        ])
        .unwrap()
    }

    #[test]
    fn test_validate_rejects_out_of_range_days() {
        for days in [0, 8] {
            let request = PlanRequest {
                days,
                ..Default::default()
            };
            assert!(matches!(
                request.validate(),
                Err(MenuError::InvalidRequest(_))
            ));
        }
    }

    #[test]
    fn test_validate_rejects_no_meals() {
        let request = PlanRequest {
            lunches_per_day: 0,
            dinners_per_day: 0,
            ..Default::default()
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_rotation_resets_but_not_within_a_day() {
        let catalog = small_catalog();
        let mut rng = StdRng::seed_from_u64(3);
        let request = PlanRequest {
            days: 3,
            repeat_policy: RepeatPolicy::AfterExhaustion,
            ..Default::default()
        };

        let plan = WeekPlan::generate(&catalog, &request, &mut rng).unwrap();

        assert_eq!(plan.days.len(), 3);
        assert!(plan.cycles > 1);
        for day in &plan.days {
            assert_ne!(day.lunch[0].slug, day.dinner[0].slug);
            assert_ne!(day.dinner[0].slug, "m");
        }
    }

    #[test]
    fn test_never_policy_fails_when_exhausted() {
        let catalog = small_catalog();
        let mut rng = StdRng::seed_from_u64(3);
        let request = PlanRequest {
            days: 3,
            ..Default::default()
        };

        let result = WeekPlan::generate(&catalog, &request, &mut rng);

        assert!(matches!(
            result,
            Err(MenuError::InsufficientCandidates { .. })
        ));
    }
}
