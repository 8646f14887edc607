use crate::models::{CategoryType, Metrics, PlaceRecord, Urgency};
use crate::scoring::keywords::{contains_any, ACTIVITY_MARKERS};

const DEFAULT_RATING_VALUE: f64 = 3.5;
const DEFAULT_REVIEWS_COUNT: f64 = 5.0;
const MAX_FINAL_RATING: f64 = 10.0;

/// Rounds the exact binary value to `decimals` places, ties to even. A value
/// written as 2.15 is stored just below it and rounds down to 2.1.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

pub fn round1(value: f64) -> f64 {
    round_to(value, 1)
}

/// Computes the lead-quality metrics for one place.
///
/// `urgency` is derived from the unclamped metric total while `final_rating`
/// is capped at 10, so a hot lead can carry a final rating of exactly 10.
pub fn calc_metrics(place: &PlaceRecord, category_type: CategoryType) -> Metrics {
    let activity_score = activity_score(place);
    let completeness_score = completeness_score(place);
    let popularity_score = popularity_score(place);
    let capacity_score = capacity_score(place);
    let target_score = if category_type.is_target_niche() {
        2.0
    } else {
        1.5
    };
    let commercial_score = round1((completeness_score + target_score + popularity_score) / 3.0);

    let total = activity_score
        + completeness_score
        + popularity_score
        + capacity_score
        + target_score
        + commercial_score;

    let urgency = if total >= 8.0 {
        Urgency::Hot
    } else if total >= 6.0 {
        Urgency::Warm
    } else {
        Urgency::Cold
    };

    Metrics {
        activity_score,
        completeness_score,
        popularity_score,
        capacity_score,
        target_score,
        commercial_score,
        final_rating: round1(total).min(MAX_FINAL_RATING),
        urgency,
    }
}

fn activity_score(place: &PlaceRecord) -> f64 {
    let presence = format!("{} {}", place.social, place.website);
    if contains_any(&presence, ACTIVITY_MARKERS) {
        2.0
    } else {
        1.0
    }
}

fn completeness_score(place: &PlaceRecord) -> f64 {
    let fields = [
        &place.contacts,
        &place.address,
        &place.description,
        &place.photos,
    ];
    let filled = fields.iter().filter(|f| !f.trim().is_empty()).count();
    let score = round1(filled as f64 / fields.len() as f64 * 3.0);
    if score == 0.0 {
        1.0
    } else {
        score
    }
}

/// Zero counts as missing, like a blank cell.
fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && v.is_finite())
}

fn popularity_score(place: &PlaceRecord) -> f64 {
    let rating = present(place.rating_value).unwrap_or(DEFAULT_RATING_VALUE);
    let reviews = present(place.reviews_count).unwrap_or(DEFAULT_REVIEWS_COUNT);
    let review_bonus = if reviews >= 5.0 { 1.0 } else { 0.0 };
    (rating / 5.0 * 2.0 + review_bonus).min(3.0)
}

fn capacity_score(place: &PlaceRecord) -> f64 {
    let rooms = present(place.rooms).unwrap_or(0.0);
    let price = present(place.price_avg).unwrap_or(0.0);
    if rooms >= 20.0 || price >= 20000.0 {
        2.0
    } else if rooms >= 10.0 || price >= 10000.0 {
        1.5
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_round1_ties_to_even() {
        assert!(approx(round1(0.75), 0.8));
        assert!(approx(round1(2.25), 2.2));
        assert!(approx(round1(1.4), 1.4));
        assert!(approx(round1(7.96), 8.0));
    }

    #[test]
    fn test_round1_uses_stored_value() {
        assert_eq!(round1(1.85), 1.9);
        assert_eq!(round1(2.15), 2.1);
        assert_eq!(round_to(2.675, 2), 2.67);
    }

    #[test]
    fn test_commercial_score_rounds_stored_value() {
        // (3 + 2 + 1.45) / 3 is stored just below 2.15
        let place = PlaceRecord {
            contacts: "+7".to_string(),
            address: "Road".to_string(),
            description: "Text".to_string(),
            photos: "p.jpg".to_string(),
            rating_value: Some(3.625),
            reviews_count: Some(2.0),
            ..Default::default()
        };
        let m = calc_metrics(&place, CategoryType::Eco);
        assert_eq!(m.commercial_score, 2.1);
    }

    #[test]
    fn test_completeness_floor_and_full() {
        let empty = PlaceRecord::default();
        assert_eq!(completeness_score(&empty), 1.0);

        let full = PlaceRecord {
            contacts: "+7 700".to_string(),
            address: "Road 1".to_string(),
            description: "Nice".to_string(),
            photos: "a.jpg".to_string(),
            ..Default::default()
        };
        assert_eq!(completeness_score(&full), 3.0);

        let whitespace_only = PlaceRecord {
            address: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(completeness_score(&whitespace_only), 1.0);
    }

    #[test]
    fn test_completeness_partial_values() {
        let two = PlaceRecord {
            contacts: "+7 700".to_string(),
            address: "Road 1".to_string(),
            ..Default::default()
        };
        assert_eq!(completeness_score(&two), 1.5);

        let three = PlaceRecord {
            description: "x".to_string(),
            ..two
        };
        assert!(approx(completeness_score(&three), 2.2));
    }

    #[test]
    fn test_popularity_defaults_and_cap() {
        let defaults = PlaceRecord::default();
        assert!(approx(popularity_score(&defaults), 2.4));

        let top = PlaceRecord {
            rating_value: Some(5.0),
            reviews_count: Some(120.0),
            ..Default::default()
        };
        assert_eq!(popularity_score(&top), 3.0);

        let few_reviews = PlaceRecord {
            rating_value: Some(4.0),
            reviews_count: Some(2.0),
            ..Default::default()
        };
        assert!(approx(popularity_score(&few_reviews), 1.6));
    }

    #[test]
    fn test_capacity_tiers() {
        let big = PlaceRecord {
            rooms: Some(25.0),
            ..Default::default()
        };
        let pricey = PlaceRecord {
            price_avg: Some(12000.0),
            ..Default::default()
        };
        assert_eq!(capacity_score(&big), 2.0);
        assert_eq!(capacity_score(&pricey), 1.5);
        assert_eq!(capacity_score(&PlaceRecord::default()), 1.0);
    }

    #[test]
    fn test_activity_markers() {
        let social = PlaceRecord {
            social: "instagram.com/camp".to_string(),
            ..Default::default()
        };
        assert_eq!(activity_score(&social), 2.0);
        assert_eq!(activity_score(&PlaceRecord::default()), 1.0);
    }

    #[test]
    fn test_bare_place_is_hot() {
        // 1 + 1 + 2.4 + 1 + 1.5 + round1(4.9 / 3) = 8.5
        let m = calc_metrics(&PlaceRecord::default(), CategoryType::Standard);
        assert_eq!(m.completeness_score, 1.0);
        assert_eq!(m.target_score, 1.5);
        assert!(approx(m.commercial_score, 1.6));
        assert!(approx(m.final_rating, 8.5));
        assert_eq!(m.urgency, Urgency::Hot);
    }

    #[test]
    fn test_final_rating_clamped_but_urgency_uses_raw_total() {
        let rich = PlaceRecord {
            contacts: "+7".to_string(),
            address: "Road".to_string(),
            description: "Text".to_string(),
            photos: "p.jpg".to_string(),
            social: "instagram".to_string(),
            rating_value: Some(5.0),
            reviews_count: Some(50.0),
            rooms: Some(30.0),
            ..Default::default()
        };
        let m = calc_metrics(&rich, CategoryType::Luxury);
        // 2 + 3 + 3 + 2 + 2 + round1(8 / 3) = 14.7
        assert!(approx(m.commercial_score, 2.7));
        assert_eq!(m.final_rating, 10.0);
        assert_eq!(m.urgency, Urgency::Hot);
    }

    #[test]
    fn test_urgency_reads_unrounded_total() {
        // 1 + 1 + 1.96 + 1 + 1.5 + 1.5 = 7.96: rounds to 8.0 but stays warm
        let place = PlaceRecord {
            rating_value: Some(4.9),
            reviews_count: Some(2.0),
            ..Default::default()
        };
        let m = calc_metrics(&place, CategoryType::Standard);
        assert!(approx(m.commercial_score, 1.5));
        assert!(approx(m.final_rating, 8.0));
        assert_eq!(m.urgency, Urgency::Warm);
    }
}
