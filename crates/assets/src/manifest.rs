use foodplan_menu::MenuCatalog;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::download::DownloadJob;
use crate::error::AssetError;

/// Slug used for the fallback image file.
pub const DEFAULT_SLUG: &str = "default";

const UNSPLASH_PARAMS: &str = "?q=80&w=300&auto=format&fit=crop";

const BUILTIN_DEFAULT: &str = "photo-1546069901-d5bfd2cbfb1f";

const BUILTIN_IMAGES: &[(&str, &str)] = &[
    ("couscous-chana-salad", "photo-1512621776951-a57141f2eefd"),
    ("spinach-corn-sandwich", "photo-1554433607-66b5efe9d304"),
    ("moong-dal-cheela", "photo-1635321593217-40050ad13c74"),
    ("vermicelli", "photo-1473093295043-cdd812d0e601"),
    ("uttapam", "photo-1563379091339-03b21ab4a4f8"),
    ("masala-idli", "photo-1589301760014-d929f3979dbc"),
    ("minestrone-soup", "photo-1578020190125-d7f00887c079"),
    ("broccoli-soup", "photo-1476718406336-bb5a9690ee2a"),
    ("caesar-salad", "photo-1550304943-4f24f54ddde9"),
    ("pasta-salad", "photo-1473093226795-af9932fe5856"),
    ("orzo-salad", "photo-1512621776951-a57141f2eefd"),
    ("smashed-potatoes-salad", "photo-1510130387422-82bed34b37e9"),
    ("brussels-sprouts-salad", "photo-1507565524853-a6d38cfdbec1"),
    ("egg-curry", "photo-1596797038530-2c107229654b"),
    ("grilled-chicken-veggies", "photo-1432139509613-5c4255815697"),
    ("spinach-thecha-rice", "photo-1536304993881-ff6e9eefa2a6"),
    ("paneer-kulcha", "photo-1565557623262-b51c2513a641"),
    ("aglio-e-olio", "photo-1608219992759-8d74ed8d76eb"),
    ("noodles", "photo-1626804475297-41608ea09aeb"),
    ("noodles-veg", "photo-1626804475297-41608ea09aeb"),
    ("khichdi", "photo-1621263764928-df1444c5e859"),
    ("paneer-bhurji-roti", "photo-1567188040759-fb8a883dc6d6"),
    ("peri-peri-chicken-rice-bowl", "photo-1604908176997-125f25cc6f3d"),
    ("sabudana-khichdi", "photo-1567337710282-00832b415979"),
    ("upma", "photo-1473093295043-cdd812d0e601"),
    ("soya-pulao", "photo-1603133872878-684f208fb84b"),
    ("shakshouka", "photo-1590412200988-a436970781fa"),
    ("chicken-curry-roti", "photo-1604152135912-04a022e23696"),
    ("egg-curry-roti", "photo-1596797038530-2c107229654b"),
    ("katsu-curry-rice", "photo-1574484284002-952d92456975"),
    ("palak-paneer", "photo-1565557623262-b51c2513a641"),
    ("lasagna", "photo-1574894709920-11b28e7367e3"),
    ("bhindi-roti-raita", "photo-1631452180519-c014fe946bc7"),
    ("rajma-rice", "photo-1585937421612-70a008356ae4"),
    ("mushroom-white-sauce-pasta", "photo-1645112411341-6c4fd023882c"),
    ("aloo-gobhi-roti-raita", "photo-1631452180519-c014fe946bc7"),
    ("chole-rice", "photo-1585937421612-70a008356ae4"),
];

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}{UNSPLASH_PARAMS}")
}

/// Image URL per dish slug, with a fallback for dishes without one.
///
/// A manifest file has the form:
///
/// ```toml
/// default = "https://example.com/plate.jpg"
///
/// [images]
/// upma = "https://example.com/upma.jpg"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ImageManifest {
    default: String,
    #[serde(default)]
    images: BTreeMap<String, String>,
}

impl ImageManifest {
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            images: BTreeMap::new(),
        }
    }

    pub fn builtin() -> Self {
        Self {
            default: unsplash(BUILTIN_DEFAULT),
            images: BUILTIN_IMAGES
                .iter()
                .map(|(slug, photo)| (slug.to_string(), unsplash(photo)))
                .collect(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, AssetError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn with_image(mut self, slug: impl Into<String>, url: impl Into<String>) -> Self {
        self.images.insert(slug.into(), url.into());
        self
    }

    pub fn default_url(&self) -> &str {
        &self.default
    }

    /// URL registered for the slug, if any.
    pub fn get(&self, slug: &str) -> Option<&str> {
        self.images.get(slug).map(String::as_str)
    }

    /// URL for the slug, falling back to the default image.
    pub fn resolve(&self, slug: &str) -> &str {
        self.get(slug).unwrap_or(&self.default)
    }

    /// One download per catalog dish plus the fallback image.
    pub fn jobs_for(&self, catalog: &MenuCatalog) -> Vec<DownloadJob> {
        catalog
            .slugs()
            .map(|(slug, _)| DownloadJob::new(slug, self.resolve(slug)))
            .chain(std::iter::once(DownloadJob::new(DEFAULT_SLUG, &self.default)))
            .collect()
    }
}
