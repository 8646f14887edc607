//! Keyword tables behind the theme filter, the rating rules and the niche
//! classifier. All matching is case-insensitive substring matching against
//! lower-cased text, so every keyword here is stored lower-case.

use crate::models::CategoryType;

/// A place is on-theme if its name contains any of these.
pub const THEME_KEYWORDS: &[&str] = &[
    "глэмпинг", "кемпинг", "турбаза", "отдых", "camp", "glamp", "resort",
];

pub const BASE_RATING: u8 = 5;
pub const MAX_RATING: u8 = 10;

/// Which text of a place a rating rule looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleField {
    Name,
    Category,
}

/// Adds `bonus` to the rating when `field` contains any of `keywords`.
#[derive(Debug, Clone, Copy)]
pub struct RatingRule {
    pub field: RuleField,
    pub keywords: &'static [&'static str],
    pub bonus: u8,
}

pub const RATING_RULES: &[RatingRule] = &[
    RatingRule {
        field: RuleField::Name,
        keywords: &["глэмпинг", "camp", "glamp", "кемпинг", "турбаза"],
        bonus: 3,
    },
    RatingRule {
        field: RuleField::Name,
        keywords: &["eco", "эко"],
        bonus: 1,
    },
    RatingRule {
        field: RuleField::Name,
        keywords: &["mountain", "гора", "altai", "shymbulak"],
        bonus: 1,
    },
    RatingRule {
        field: RuleField::Name,
        keywords: &["lux", "люкс", "премиум"],
        bonus: 2,
    },
    RatingRule {
        field: RuleField::Category,
        keywords: &["resort", "отель", "гостиница"],
        bonus: 1,
    },
];

/// Niche keyword groups in priority order: the first group that matches wins.
pub const CATEGORY_GROUPS: &[(CategoryType, &[&str])] = &[
    (CategoryType::Eco, &["эко", "eco"]),
    (CategoryType::Ethno, &["юрта", "этно"]),
    (CategoryType::Luxury, &["глэмпинг", "lux", "люкс", "премиум"]),
    (CategoryType::Family, &["гостевой", "семейный"]),
    (CategoryType::Mountain, &["гора", "mountain"]),
];

/// Marks of an online presence in the social/website fields.
pub const ACTIVITY_MARKERS: &[&str] = &["instagram", "facebook", "vk", "site"];

pub fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}
