mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use foodplan_shared::MealSlot;
use std::path::PathBuf;

/// foodplan - lunch and dinner picker
#[derive(Parser)]
#[command(name = "foodplan")]
#[command(about = "Pick lunches and dinners from the dish catalog", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the dishes available for a meal slot
    Dishes {
        /// lunch or dinner
        #[arg(long)]
        slot: MealSlot,

        /// Only show dishes random generation may pick
        #[arg(long)]
        random_only: bool,
    },
    /// Pick random dishes for a meal slot
    Pick {
        /// lunch or dinner
        #[arg(long)]
        slot: MealSlot,

        /// Number of distinct dishes to pick
        #[arg(long, default_value_t = 1)]
        count: usize,

        /// Dish slug to leave out (repeatable)
        #[arg(long = "exclude")]
        exclude: Vec<String>,

        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Generate a meal plan starting on Monday
    Plan {
        /// Number of days (overrides config file)
        #[arg(long)]
        days: Option<u8>,

        /// Lunches per day (overrides config file)
        #[arg(long)]
        lunches: Option<usize>,

        /// Dinners per day (overrides config file)
        #[arg(long)]
        dinners: Option<usize>,

        /// Reuse dishes once every eligible dish has been planned
        #[arg(long)]
        allow_repeats: bool,

        /// Seed for a reproducible plan
        #[arg(long)]
        seed: Option<u64>,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Download one image per dish
    FetchImages {
        /// Output directory (overrides config file)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Maximum parallel downloads (overrides config file)
        #[arg(long)]
        concurrency: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = foodplan::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    foodplan::observability::init_observability(
        "foodplan",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let result = match cli.command {
        Commands::Dishes { slot, random_only } => cli::dishes::list(config, slot, random_only),
        Commands::Pick {
            slot,
            count,
            exclude,
            seed,
        } => cli::dishes::pick(config, slot, count, exclude, seed),
        Commands::Plan {
            days,
            lunches,
            dinners,
            allow_repeats,
            seed,
            json,
        } => cli::plan::generate(
            config,
            cli::plan::Overrides {
                days,
                lunches,
                dinners,
                allow_repeats,
            },
            seed,
            json,
        ),
        Commands::FetchImages { out, concurrency } => {
            cli::assets::fetch_images(config, out, concurrency).await
        }
    };

    if let Err(e) = &result {
        tracing::error!("{e}");
    }

    Ok(result?)
}
