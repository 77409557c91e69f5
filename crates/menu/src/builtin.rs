use foodplan_shared::{Dish, DishCategory, EligibilityClass};

/// `(name, slug)`; a missing slug is derived from the name.
type Entry = (&'static str, Option<&'static str>);

const LIGHT_RANDOM: &[Entry] = &[
    ("Couscous Chana Salad", None),
    ("Spinach Corn Sandwich", None),
    ("Moong Dal Cheela", None),
    ("Vermicelli with Veggies", Some("vermicelli")),
    ("Soup + Grilled Chicken/Paneer", None),
    ("Chicken Caesar Salad", Some("caesar-salad")),
    ("Pasta Salad", None),
    ("Orzo Salad", None),
    ("Chicken burrito roll", None),
    ("Egg Curry & Roti", Some("egg-curry")),
    ("Grilled Chicken & Veggies", None),
    ("Soya/Panner Cholle Pulao", Some("soya-pulao")),
    ("Noodles - Chicken", Some("noodles")),
    ("Paneer Bhurji & Roti", None),
    ("Rice Bowl - Peri Peri Chicken", Some("peri-peri-chicken-rice-bowl")),
    ("Rice Bowl - Kung Pao Chicken", Some("kung-pao-chicken-rice-bowl")),
    ("Rice Bowl - Peri Peri Paneer", Some("peri-peri-paneer-rice-bowl")),
    ("Upma", None),
];

const LIGHT_MANUAL: &[Entry] = &[
    ("Masala Idli", None),
    ("Smashed Potatoes Salad", None),
    ("Brussels Sprouts Salad", None),
    ("Minestrone Soup", None),
    ("Broccoli Soup", None),
    ("Uttapam", None),
    ("Paneer Kulcha", None),
    ("Spinach Thecha & Rice", None),
    ("Noodles - Veg", None),
    ("Khichdi", None),
    ("Sabudana Khichdi", None),
    ("Soya Salad Bowl", None),
    ("Aglio E Olio", None),
];

const DINNER_RANDOM: &[Entry] = &[
    ("Shakshouka + Bread", Some("shakshouka")),
    ("Chicken Curry & Rice/Roti", Some("chicken-curry-roti")),
    ("Egg Curry & Rice/Roti", Some("egg-curry-roti")),
    ("Katsu Curry & Rice", Some("katsu-curry-rice")),
    ("Palak Paneer & Roti", Some("palak-paneer")),
];

const DINNER_MANUAL: &[Entry] = &[
    ("Chole & Rice", None),
    ("Lasagna", None),
    ("Bhindi, Roti & Raita", None),
    ("Rajma & Rice", None),
    ("Mushroom / White Sauce Pasta", None),
    ("Aloo Gobhi & Roti & Raita", None),
];

/// Built-in dishes in definition order: light dishes first, random-eligible
/// before manual-only within each category.
pub(crate) fn dishes() -> Vec<Dish> {
    [
        (LIGHT_RANDOM, DishCategory::Light, EligibilityClass::RandomEligible),
        (LIGHT_MANUAL, DishCategory::Light, EligibilityClass::ManualOnly),
        (
            DINNER_RANDOM,
            DishCategory::DinnerOnly,
            EligibilityClass::RandomEligible,
        ),
        (
            DINNER_MANUAL,
            DishCategory::DinnerOnly,
            EligibilityClass::ManualOnly,
        ),
    ]
    .into_iter()
    .flat_map(|(entries, category, eligibility)| {
        entries.iter().map(move |(name, slug)| {
            let dish = Dish::new(name, category, eligibility);
            match slug {
                Some(slug) => dish.with_slug(*slug),
                None => dish,
            }
        })
    })
    .collect()
}
