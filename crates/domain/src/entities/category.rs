//! Category entity - Seed data that questions are grouped under
//!
//! Categories are owned by the store and are read-only for the service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::CategoryId;

/// A question category (e.g. "Science", "Art")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Display name, stored in the `type` column
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: CategoryId, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Builds the id-keyed mapping handed to clients alongside question lists.
pub fn categories_by_id(categories: &[Category]) -> BTreeMap<CategoryId, String> {
    categories
        .iter()
        .map(|category| (category.id, category.kind.clone()))
        .collect()
}
