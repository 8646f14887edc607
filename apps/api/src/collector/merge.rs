use std::collections::HashMap;

use crate::models::PlaceRecord;

/// Appends `incoming` to `existing` and drops earlier duplicates of each
/// (name, address) key. Surviving rows keep their relative order, so the
/// latest write for a key sits where that write landed.
pub fn merge_last_wins(existing: Vec<PlaceRecord>, incoming: Vec<PlaceRecord>) -> Vec<PlaceRecord> {
    let combined: Vec<PlaceRecord> = existing.into_iter().chain(incoming).collect();

    let keep: Vec<bool> = {
        let mut last_index: HashMap<(&str, &str), usize> = HashMap::new();
        for (i, row) in combined.iter().enumerate() {
            last_index.insert(row.key(), i);
        }
        combined
            .iter()
            .enumerate()
            .map(|(i, row)| last_index.get(&row.key()) == Some(&i))
            .collect()
    };

    combined
        .into_iter()
        .zip(keep)
        .filter_map(|(row, keep)| keep.then_some(row))
        .collect()
}
