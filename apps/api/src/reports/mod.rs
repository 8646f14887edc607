//! Read-only views over the processed tables: summary statistics of the
//! shortlist and a JSON export of the described rows.

pub mod handlers;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::errors::AppError;
use crate::models::{ScoredPlace, Urgency};
use crate::scoring::metrics::round_to;
use crate::scoring::pipeline::rank_top;
use crate::storage::{read_table, TableStore};

const TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopPlace {
    pub name: String,
    pub city: String,
    pub rating: u8,
    pub urgency: Urgency,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortlistStats {
    pub total_objects: usize,
    pub avg_rating: f64,
    pub urgency_distribution: BTreeMap<String, usize>,
    pub category_distribution: BTreeMap<String, usize>,
    pub top5: Vec<TopPlace>,
}

/// Summarizes a non-empty shortlist.
pub fn summarize(rows: &[ScoredPlace]) -> ShortlistStats {
    let mut urgency_distribution = BTreeMap::new();
    let mut category_distribution = BTreeMap::new();
    for row in rows {
        *urgency_distribution
            .entry(row.urgency.label().to_string())
            .or_insert(0) += 1;
        *category_distribution
            .entry(row.category_type.label().to_string())
            .or_insert(0) += 1;
    }

    let sum: f64 = rows.iter().map(|r| f64::from(r.rating)).sum();
    let mean = sum / rows.len().max(1) as f64;

    ShortlistStats {
        total_objects: rows.len(),
        avg_rating: round_to(mean, 2),
        urgency_distribution,
        category_distribution,
        top5: rank_top(rows.to_vec(), TOP_N)
            .into_iter()
            .map(|r| TopPlace {
                name: r.name,
                city: r.city,
                rating: r.rating,
                urgency: r.urgency,
            })
            .collect(),
    }
}

/// Statistics over the scored table.
pub fn shortlist_stats(tables: &TableStore) -> Result<ShortlistStats, AppError> {
    let path = tables.scored_path();
    let table = read_table::<ScoredPlace>(&path)?.ok_or_else(|| AppError::MissingInput {
        path: path.display().to_string(),
        hint: "/api/analyze",
    })?;
    if table.is_empty() {
        return Err(AppError::EmptyData("The analyzed table is empty.".to_string()));
    }
    Ok(summarize(&table.rows))
}

/// Every row of the described table.
pub fn export_final(tables: &TableStore) -> Result<Vec<ScoredPlace>, AppError> {
    let path = tables.final_path();
    let table = read_table::<ScoredPlace>(&path)?.ok_or_else(|| AppError::MissingInput {
        path: path.display().to_string(),
        hint: "/api/generate",
    })?;
    Ok(table.rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryType, PlaceRecord};
    use crate::scoring::pipeline::score_place;
    use crate::storage::write_table;
    use tempfile::tempdir;

    fn scored(name: &str, category: &str) -> ScoredPlace {
        score_place(PlaceRecord {
            name: name.to_string(),
            category: category.to_string(),
            city: "Алматы".to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_summarize_counts_and_top() {
        let rows = vec![
            scored("Lake house", "Гостевой дом"),
            scored("Glamp camp", "Эко отель"),
            scored("Lux glamp", "Глэмпинг"),
        ];
        let stats = summarize(&rows);

        assert_eq!(stats.total_objects, 3);
        assert_eq!(stats.category_distribution["Family"], 1);
        assert_eq!(stats.category_distribution["Eco"], 1);
        assert_eq!(stats.category_distribution["Luxury"], 1);
        assert_eq!(stats.urgency_distribution.values().sum::<usize>(), 3);

        // ratings 5, 9 and 10
        assert_eq!(stats.avg_rating, 8.0);
        assert_eq!(stats.top5[0].name, "Lux glamp");
        assert_eq!(stats.top5[2].name, "Lake house");
    }

    #[test]
    fn test_stats_missing_and_empty() {
        let temp = tempdir().unwrap();
        let tables = TableStore::new(temp.path());
        assert!(matches!(
            shortlist_stats(&tables),
            Err(AppError::MissingInput { hint: "/api/analyze", .. })
        ));

        std::fs::create_dir_all(temp.path().join("processed")).unwrap();
        std::fs::write(tables.scored_path(), "").unwrap();
        assert!(matches!(shortlist_stats(&tables), Err(AppError::EmptyData(_))));
    }

    #[test]
    fn test_export_returns_all_rows() {
        let temp = tempdir().unwrap();
        let tables = TableStore::new(temp.path());
        assert!(export_final(&tables).is_err());

        let mut row = scored("Glamp camp", "Эко отель");
        row.description = "Quiet tents by the river.".to_string();
        write_table(&tables.final_path(), &[row.clone(), scored("Other", "")]).unwrap();

        let rows = export_final(&tables).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], row);
        assert_eq!(rows[1].category_type, CategoryType::Standard);
    }
}
