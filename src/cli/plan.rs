use foodplan_menu::{PlanRequest, RepeatPolicy, WeekPlan};
use foodplan_shared::Dish;

/// Command-line values that win over the config file.
pub struct Overrides {
    pub days: Option<u8>,
    pub lunches: Option<usize>,
    pub dinners: Option<usize>,
    pub allow_repeats: bool,
}

#[tracing::instrument(skip(config, overrides))]
pub fn generate(
    config: foodplan::Config,
    overrides: Overrides,
    seed: Option<u64>,
    json: bool,
) -> foodplan_shared::Result<()> {
    let catalog = foodplan::load_catalog(&config)?;

    let request = PlanRequest {
        days: overrides.days.unwrap_or(config.plan.days),
        lunches_per_day: overrides.lunches.unwrap_or(config.plan.lunches_per_day),
        dinners_per_day: overrides.dinners.unwrap_or(config.plan.dinners_per_day),
        repeat_policy: if overrides.allow_repeats || config.plan.allow_repeats {
            RepeatPolicy::AfterExhaustion
        } else {
            RepeatPolicy::Never
        },
    };

    let mut rng = foodplan::rng(seed);
    let plan = WeekPlan::generate(&catalog, &request, &mut rng)?;

    if json {
        let out = serde_json::to_string_pretty(&plan).map_err(anyhow::Error::from)?;
        println!("{out}");
        return Ok(());
    }

    for day in &plan.days {
        println!(
            "{}  lunch: {:<32} dinner: {}",
            day.day,
            names(&day.lunch),
            names(&day.dinner)
        );
    }

    if plan.cycles > 1 {
        tracing::info!(cycles = plan.cycles, "Dishes repeat across rotation cycles");
    }

    Ok(())
}

fn names(dishes: &[Dish]) -> String {
    if dishes.is_empty() {
        return "-".to_string();
    }

    dishes
        .iter()
        .map(|d| d.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
