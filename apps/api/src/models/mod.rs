pub mod place;

pub use place::{CategoryType, Metrics, PlaceRecord, ScoredPlace, Urgency};
