//! Page arithmetic shared by the list routes.

use serde::{Deserialize, Deserializer};

/// `?page=N` query string. Anything that is not an integer falls back to page 1.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default, deserialize_with = "lenient_page")]
    pub page: Option<i64>,
}

fn lenient_page<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse::<i64>().ok()))
}

/// A 1-based page of `per_page` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: i64,
    pub per_page: u32,
}

impl Page {
    pub fn new(number: i64, per_page: u32) -> Self {
        Page { number, per_page }
    }

    pub fn from_query(query: &PageQuery, per_page: u32) -> Self {
        Page::new(query.page.unwrap_or(1), per_page)
    }

    /// Pages below 1 select nothing.
    pub fn is_valid(&self) -> bool {
        self.number >= 1
    }

    pub fn offset(&self) -> i64 {
        (self.number.max(1) - 1).saturating_mul(i64::from(self.per_page))
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }

    /// The items of `collection` that fall on this page.
    pub fn slice<'a, T>(&self, collection: &'a [T]) -> &'a [T] {
        if !self.is_valid() {
            return &[];
        }
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        if start >= collection.len() {
            return &[];
        }
        let end = start
            .saturating_add(self.per_page as usize)
            .min(collection.len());
        &collection[start..end]
    }
}
