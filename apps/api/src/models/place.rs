use serde::{Deserialize, Serialize};

use crate::storage::Columns;

/// A flat place row as it sits in the accumulated table.
///
/// The first ten columns are produced by the collector. The listing attributes
/// after them are optional: the collector writes them blank and they are only
/// populated when the CSV is enriched by hand. Unparseable numeric cells read
/// back as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub contacts: String,
    #[serde(default)]
    pub coords: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub lon: Option<f64>,
    #[serde(default)]
    pub schedule: String,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub city: String,

    // Listing attributes
    #[serde(default)]
    pub social: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub photos: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub rating_value: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub reviews_count: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub rooms: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub price_avg: Option<f64>,
}

impl PlaceRecord {
    /// Composite identity used for deduplication.
    pub fn key(&self) -> (&str, &str) {
        (&self.name, &self.address)
    }
}

impl Columns for PlaceRecord {
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "address",
        "contacts",
        "coords",
        "category",
        "lat",
        "lon",
        "schedule",
        "query",
        "city",
        "social",
        "website",
        "description",
        "photos",
        "rating_value",
        "reviews_count",
        "rooms",
        "price_avg",
    ];
}

/// Niche classification of a place, derived from its category label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryType {
    Eco,
    Ethno,
    Luxury,
    Family,
    Mountain,
    Standard,
}

impl CategoryType {
    pub fn label(self) -> &'static str {
        match self {
            CategoryType::Eco => "Eco",
            CategoryType::Ethno => "Ethno",
            CategoryType::Luxury => "Luxury",
            CategoryType::Family => "Family",
            CategoryType::Mountain => "Mountain",
            CategoryType::Standard => "Standard",
        }
    }

    /// Niches the business targets directly.
    pub fn is_target_niche(self) -> bool {
        matches!(
            self,
            CategoryType::Luxury | CategoryType::Eco | CategoryType::Family | CategoryType::Mountain
        )
    }
}

impl std::fmt::Display for CategoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Lead-priority tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Hot,
    Warm,
    Cold,
}

impl Urgency {
    pub fn label(self) -> &'static str {
        match self {
            Urgency::Hot => "hot",
            Urgency::Warm => "warm",
            Urgency::Cold => "cold",
        }
    }
}

/// Per-row quality metrics computed by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub activity_score: f64,
    pub completeness_score: f64,
    pub popularity_score: f64,
    pub capacity_score: f64,
    pub target_score: f64,
    pub commercial_score: f64,
    pub final_rating: f64,
    pub urgency: Urgency,
}

/// A place row after scoring. Same columns as [`PlaceRecord`] plus the derived
/// rating, niche and metrics. The describer fills `description` in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPlace {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub contacts: String,
    #[serde(default)]
    pub coords: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub lon: Option<f64>,
    #[serde(default)]
    pub schedule: String,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub social: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub photos: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub rating_value: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub reviews_count: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub rooms: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub price_avg: Option<f64>,

    pub rating: u8,
    pub category_type: CategoryType,
    pub activity_score: f64,
    pub completeness_score: f64,
    pub popularity_score: f64,
    pub capacity_score: f64,
    pub target_score: f64,
    pub commercial_score: f64,
    pub final_rating: f64,
    pub urgency: Urgency,
}

impl ScoredPlace {
    /// Same identity as [`PlaceRecord::key`].
    pub fn key(&self) -> (&str, &str) {
        (&self.name, &self.address)
    }

    pub fn new(place: PlaceRecord, rating: u8, category_type: CategoryType, m: Metrics) -> Self {
        Self {
            name: place.name,
            address: place.address,
            contacts: place.contacts,
            coords: place.coords,
            category: place.category,
            lat: place.lat,
            lon: place.lon,
            schedule: place.schedule,
            query: place.query,
            city: place.city,
            social: place.social,
            website: place.website,
            description: place.description,
            photos: place.photos,
            rating_value: place.rating_value,
            reviews_count: place.reviews_count,
            rooms: place.rooms,
            price_avg: place.price_avg,
            rating,
            category_type,
            activity_score: m.activity_score,
            completeness_score: m.completeness_score,
            popularity_score: m.popularity_score,
            capacity_score: m.capacity_score,
            target_score: m.target_score,
            commercial_score: m.commercial_score,
            final_rating: m.final_rating,
            urgency: m.urgency,
        }
    }
}

impl Columns for ScoredPlace {
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "address",
        "contacts",
        "coords",
        "category",
        "lat",
        "lon",
        "schedule",
        "query",
        "city",
        "social",
        "website",
        "description",
        "photos",
        "rating_value",
        "reviews_count",
        "rooms",
        "price_avg",
        "rating",
        "category_type",
        "activity_score",
        "completeness_score",
        "popularity_score",
        "capacity_score",
        "target_score",
        "commercial_score",
        "final_rating",
        "urgency",
    ];
}
