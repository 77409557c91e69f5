use foodplan_shared::{Dish, MealSlot};
use std::collections::HashSet;

pub fn list(
    config: foodplan::Config,
    slot: MealSlot,
    random_only: bool,
) -> foodplan_shared::Result<()> {
    let catalog = foodplan::load_catalog(&config)?;

    let dishes = if random_only {
        catalog.random_eligible_for(slot)
    } else {
        catalog.dishes_for(slot)
    };

    tracing::debug!(%slot, random_only, count = dishes.len(), "Listing dishes");

    for dish in dishes {
        println!("{}", format_dish(dish));
    }

    Ok(())
}

pub fn pick(
    config: foodplan::Config,
    slot: MealSlot,
    count: usize,
    exclude: Vec<String>,
    seed: Option<u64>,
) -> foodplan_shared::Result<()> {
    let catalog = foodplan::load_catalog(&config)?;

    for slug in &exclude {
        if catalog.find_by_slug(slug).is_none() {
            foodplan_shared::user!("unknown dish slug: {slug}");
        }
    }

    let excluding: HashSet<String> = exclude.into_iter().collect();
    let mut rng = foodplan::rng(seed);
    let picked = catalog.pick_random(slot, count, &excluding, &mut rng)?;

    for dish in picked {
        println!("{}", format_dish(dish));
    }

    Ok(())
}

fn format_dish(dish: &Dish) -> String {
    if dish.is_random_eligible() {
        format!("{:<30} {}", dish.slug, dish.name)
    } else {
        format!("{:<30} {} [{}]", dish.slug, dish.name, dish.eligibility)
    }
}
