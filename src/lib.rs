pub mod config;
pub mod observability;

pub use config::Config;

use foodplan_menu::MenuCatalog;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Catalog selected by the configuration: the file at `catalog.path`, or the
/// built-in one.
pub fn load_catalog(config: &Config) -> foodplan_shared::Result<MenuCatalog> {
    match &config.catalog.path {
        Some(path) => Ok(MenuCatalog::load(path)?),
        None => Ok(MenuCatalog::builtin().clone()),
    }
}

/// Seeded generator for reproducible output, entropy-seeded otherwise.
pub fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}
