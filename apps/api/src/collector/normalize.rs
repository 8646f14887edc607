//! Flattens directory items into accumulated-table rows.

use serde_json::Value;

use crate::directory::{ContactGroup, DirectoryItem, Point};
use crate::models::PlaceRecord;

pub fn normalize_item(item: &DirectoryItem, query: &str, city: &str) -> PlaceRecord {
    let (coords, lat, lon) = extract_coords(item.point.as_ref());

    PlaceRecord {
        name: item.name.clone().unwrap_or_default(),
        address: item.address_name.clone().unwrap_or_default(),
        contacts: extract_contacts(item.contact_groups.as_deref()),
        coords,
        category: first_rubric(item),
        lat,
        lon,
        schedule: extract_schedule(item.schedule.as_ref()),
        query: query.to_string(),
        city: city.to_string(),
        ..Default::default()
    }
}

/// Comma-joined phones, taking the first phone of each contact group.
pub fn extract_contacts(groups: Option<&[ContactGroup]>) -> String {
    groups
        .unwrap_or_default()
        .iter()
        .filter_map(|group| {
            group
                .contacts
                .iter()
                .find(|c| c.contact_type.as_deref() == Some("phone"))
                .and_then(|c| c.value.as_deref())
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Returns the "lat, lon" label plus the parsed coordinates. Non-finite values
/// count as missing, and the label is blank unless both are present.
pub fn extract_coords(point: Option<&Point>) -> (String, Option<f64>, Option<f64>) {
    let Some(point) = point else {
        return (String::new(), None, None);
    };
    let lat = point.lat.filter(|v| v.is_finite());
    let lon = point.lon.filter(|v| v.is_finite());
    let coords = match (lat, lon) {
        (Some(lat), Some(lon)) => format!("{lat}, {lon}"),
        _ => String::new(),
    };
    (coords, lat, lon)
}

/// Serializes the schedule payload as compact JSON; blank when absent or empty.
pub fn extract_schedule(schedule: Option<&Value>) -> String {
    match schedule {
        None | Some(Value::Null) => String::new(),
        Some(Value::Object(map)) if map.is_empty() => String::new(),
        Some(Value::Array(list)) if list.is_empty() => String::new(),
        Some(Value::String(s)) if s.is_empty() => String::new(),
        Some(value) => value.to_string(),
    }
}

fn first_rubric(item: &DirectoryItem) -> String {
    item.rubrics
        .as_ref()
        .and_then(|rubrics| rubrics.first())
        .and_then(|r| r.name.clone())
        .unwrap_or_default()
}
