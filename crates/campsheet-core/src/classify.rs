//! Category, region and camp-type classifiers.
//!
//! Categories come from a fixed set of spreadsheet labels and are mapped with
//! a static table. Regions are guessed from the free-text `City/Area` column
//! with a substring gazetteer: the sheet's place names are too loose
//! ("Round Rock / Georgetown", "Hill Country (Kerrville)") for anything
//! stricter.

use phf::phf_map;

use crate::types::{CampType, Category, Region};

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Source category label → [`Category`]. Keys are matched exactly.
pub static CATEGORY_MAP: phf::Map<&'static str, Category> = phf_map! {
    "General / Day Camp" => Category::MultiActivity,
    "STEM / Tech" => Category::AcademicStem,
    "Arts / Music" => Category::ArtsMusic,
    "Theatre / Dance / Performing Arts" => Category::PerformingArts,
    "Sports / Fitness" => Category::Sports,
    "Outdoor / Nature" => Category::NatureOutdoor,
    "Faith-Based" => Category::FaithVbs,
    "Overnight" => Category::Overnight,
    "Academic / Writing" => Category::AcademicWriting,
    "Special Needs / Inclusive" => Category::SpecialNeeds,
    "Specialty" => Category::Specialty,
};

pub const DEFAULT_CATEGORY: Category = Category::MultiActivity;

pub fn classify_category(source: Option<&str>) -> Category {
    source
        .and_then(|label| CATEGORY_MAP.get(label))
        .copied()
        .unwrap_or(DEFAULT_CATEGORY)
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// Ordered place-name groups. The first group with any substring hit wins.
pub static GAZETTEER: &[(Region, &[&str])] = &[
    (
        Region::HillCountry,
        &[
            "marble falls",
            "hill country",
            "la grange",
            "rocksprings",
            "bastrop",
            "lockhart",
            "dripping springs",
            "bee cave",
            "bandera",
            "kerrville",
            "blanco",
            "barksdale",
        ],
    ),
    (
        Region::NorthSuburbs,
        &[
            "round rock",
            "georgetown",
            "cedar park",
            "pflugerville",
            "leander",
            "hutto",
        ],
    ),
    (
        Region::SouthSuburbs,
        &["buda", "kyle", "san marcos", "wimberley", "sunset valley"],
    ),
    (Region::AustinMetro, &["lakeway", "west lake", "westlake"]),
];

pub const DEFAULT_REGION: Region = Region::AustinMetro;

pub fn classify_region(city_area: Option<&str>) -> Region {
    let lower = city_area.unwrap_or_default().to_lowercase();
    GAZETTEER
        .iter()
        .find(|(_, places)| places.iter().any(|place| lower.contains(place)))
        .map(|(region, _)| *region)
        .unwrap_or(DEFAULT_REGION)
}

// ---------------------------------------------------------------------------
// Camp type
// ---------------------------------------------------------------------------

/// Overnight-category camps are overnight; day camps whose notes mention an
/// overnight option are both.
pub fn classify_camp_type(category: Category, notes: Option<&str>) -> CampType {
    if category == Category::Overnight {
        return CampType::Overnight;
    }
    let notes = notes.unwrap_or_default().to_lowercase();
    if notes.contains("overnight option") || notes.contains("& overnight") {
        CampType::Both
    } else {
        CampType::Day
    }
}
