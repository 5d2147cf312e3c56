use crate::domain::geo::FeatureCategory;

pub const SEP_RIGHT: &str = "\u{e0b0}";
pub const PROMPT: &str = "$";
pub const SELECTED: &str = "\u{25c9}";
pub const LEGEND: &str = "\u{2261}";

#[must_use]
pub fn category(category: FeatureCategory) -> &'static str {
    match category {
        FeatureCategory::Disputed => "\u{25bc}",
        FeatureCategory::Militarized => "\u{25b2}",
        FeatureCategory::Resource => "\u{25c6}",
        FeatureCategory::Outpost => "\u{25a0}",
    }
}
