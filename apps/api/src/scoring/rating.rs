use crate::models::{CategoryType, PlaceRecord};
use crate::scoring::keywords::{
    contains_any, RuleField, BASE_RATING, CATEGORY_GROUPS, MAX_RATING, RATING_RULES,
};

/// Heuristic 5–10 rating from name and category keywords.
pub fn calc_rating(place: &PlaceRecord) -> u8 {
    let name = place.name.to_lowercase();
    let category = place.category.to_lowercase();

    let score = RATING_RULES
        .iter()
        .filter(|rule| {
            let text = match rule.field {
                RuleField::Name => &name,
                RuleField::Category => &category,
            };
            contains_any(text, rule.keywords)
        })
        .fold(BASE_RATING, |acc, rule| acc + rule.bonus);

    score.min(MAX_RATING)
}

/// Classifies a category label into a niche. Groups are checked in priority
/// order and the first match wins; no match is `Standard`.
pub fn detect_category(label: &str) -> CategoryType {
    let label = label.to_lowercase();
    CATEGORY_GROUPS
        .iter()
        .find(|(_, keywords)| contains_any(&label, keywords))
        .map(|(category, _)| *category)
        .unwrap_or(CategoryType::Standard)
}
