use std::collections::HashSet;

use crate::models::{PlaceRecord, ScoredPlace};
use crate::scoring::keywords::{contains_any, THEME_KEYWORDS};
use crate::scoring::metrics::calc_metrics;
use crate::scoring::rating::{calc_rating, detect_category};
use crate::storage::{SearchContext, Table};

/// Number of places kept after ranking.
pub const TOP_N: usize = 5;

/// Filters, scores and ranks the accumulated table.
///
/// Steps, in order: last-query filter → theme filter → rating, niche and
/// metrics → drop duplicate keys and blank names → last-city filter →
/// top `TOP_N` by rating.
pub fn analyze(table: Table<PlaceRecord>, ctx: &SearchContext) -> Vec<ScoredPlace> {
    let filter_query = table.has_column("query") && !ctx.query.is_empty();
    let filter_city = table.has_column("city") && !ctx.city.is_empty();

    let mut theme: Vec<&str> = THEME_KEYWORDS.to_vec();
    if !ctx.query.is_empty() {
        theme.push(ctx.query.as_str());
    }

    let scored: Vec<ScoredPlace> = table
        .rows
        .into_iter()
        .filter(|p| !filter_query || matches_ignore_case(&p.query, &ctx.query))
        .filter(|p| contains_any(&p.name.to_lowercase(), &theme))
        .map(score_place)
        .collect();

    let cleaned = dedup_first(scored)
        .into_iter()
        .filter(|p| !p.name.trim().is_empty())
        .filter(|p| !filter_city || matches_ignore_case(&p.city, &ctx.city));

    rank_top(cleaned.collect(), TOP_N)
}

pub fn score_place(place: PlaceRecord) -> ScoredPlace {
    let rating = calc_rating(&place);
    let category_type = detect_category(&place.category);
    let metrics = calc_metrics(&place, category_type);
    ScoredPlace::new(place, rating, category_type, metrics)
}

/// Highest rating first. Ties keep their table order.
pub fn rank_top(mut places: Vec<ScoredPlace>, limit: usize) -> Vec<ScoredPlace> {
    places.sort_by(|a, b| b.rating.cmp(&a.rating));
    places.truncate(limit);
    places
}

/// Keeps the first row of each (name, address) key.
fn dedup_first(places: Vec<ScoredPlace>) -> Vec<ScoredPlace> {
    let mut seen = HashSet::new();
    places
        .into_iter()
        .filter(|p| {
            let (name, address) = p.key();
            seen.insert((name.to_string(), address.to_string()))
        })
        .collect()
}

/// `expected` is already lower-cased.
fn matches_ignore_case(value: &str, expected: &str) -> bool {
    value.trim().to_lowercase() == expected
}
