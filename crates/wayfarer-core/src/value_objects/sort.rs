//! Post listing order

use serde::{Deserialize, Serialize};

/// Sort order for post listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostSort {
    /// Most recently created first
    #[default]
    Newest,
    /// Highest like count first, newest breaking ties
    MostLiked,
}

impl PostSort {
    /// Parse a query-string value; unknown values fall back to `Newest`
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "most_liked" => Self::MostLiked,
            _ => Self::Newest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient() {
        assert_eq!(PostSort::parse_lenient("most_liked"), PostSort::MostLiked);
        assert_eq!(PostSort::parse_lenient("newest"), PostSort::Newest);
        assert_eq!(PostSort::parse_lenient("bogus"), PostSort::Newest);
    }

    #[test]
    fn test_deserialize() {
        let sort: PostSort = serde_json::from_str("\"most_liked\"").unwrap();
        assert_eq!(sort, PostSort::MostLiked);
    }
}
