//! The in-memory clip catalog.

use clipsift_models::ClipRecord;
use std::collections::HashSet;

/// The full set of clip records for one run.
///
/// Loaded once at process start and never mutated afterwards, so it can
/// be shared freely across the query engine and the export pipeline.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<ClipRecord>,
}

impl Catalog {
    /// Build a catalog from already-validated records (see the loader).
    pub fn new(records: Vec<ClipRecord>) -> Self {
        Self { records }
    }

    /// All records in catalog order.
    pub fn records(&self) -> &[ClipRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct tag values in first-appearance order.
    pub fn distinct_tags(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.tag.as_str()))
            .map(|r| r.tag.as_str())
            .collect()
    }

    /// The name vocabulary in first-appearance order, one entry per
    /// distinct name.
    pub fn names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.name.as_str()))
            .map(|r| r.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, tag: &str) -> ClipRecord {
        ClipRecord {
            name: name.to_string(),
            tag: tag.to_string(),
            nclip: 1,
            rating: 5,
            duration: 30.0,
            t1: "1:00".parse().unwrap(),
            t2: "1:30".parse().unwrap(),
            link: "https://example.com/vod/123".to_string(),
        }
    }

    #[test]
    fn test_distinct_tags_keep_first_appearance_order() {
        let catalog = Catalog::new(vec![
            record("a", "raid"),
            record("b", "chat"),
            record("c", "raid"),
            record("d", "pvp"),
        ]);
        assert_eq!(catalog.distinct_tags(), vec!["raid", "chat", "pvp"]);
    }

    #[test]
    fn test_names_deduplicate() {
        let catalog = Catalog::new(vec![
            record("Opener", "raid"),
            record("Opener", "chat"),
            record("Wipe", "raid"),
        ]);
        assert_eq!(catalog.names(), vec!["Opener", "Wipe"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.distinct_tags().is_empty());
    }
}
