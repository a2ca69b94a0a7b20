//! Category record and the id-to-type map the API exposes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type CategoryId = i64;

/// A question category, e.g. "Science".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: CategoryId, kind: impl Into<String>) -> Self {
        Category {
            id,
            kind: kind.into(),
        }
    }

    /// Lower-cased type as rendered in API responses.
    pub fn display_type(&self) -> String {
        self.kind.to_lowercase()
    }
}

/// Build the `{id: type}` object used by the category and question listings.
///
/// Keys serialize as JSON strings; ordering follows the category id.
pub fn categories_map<'a, I>(categories: I) -> BTreeMap<CategoryId, String>
where
    I: IntoIterator<Item = &'a Category>,
{
    categories
        .into_iter()
        .map(|c| (c.id, c.display_type()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_map_lowercases_and_keys_by_id() {
        let categories = vec![Category::new(2, "Art"), Category::new(1, "Science")];
        let map = categories_map(&categories);

        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({"1": "science", "2": "art"}));
    }

    #[test]
    fn test_category_serializes_kind_as_type() {
        let json = serde_json::to_value(Category::new(3, "Geography")).unwrap();
        assert_eq!(json["type"], "Geography");
        assert!(json.get("kind").is_none());
    }
}
