//! Question categories

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Server-assigned category identifier
pub type CategoryId = i32;

/// Category names seeded into a fresh store
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Render categories as the `{id: type}` object clients expect.
pub fn category_map(categories: &[Category]) -> BTreeMap<CategoryId, String> {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}
