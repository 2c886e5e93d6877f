//! The query filter engine.
//!
//! A [`ClipQuery`] is a set of independent, individually optional
//! predicates combined by logical AND into one selection mask over the
//! catalog. Every parameter has an "unset" sentinel (no name, rating
//! bounds 1/10, numeric bounds 0/+inf) whose predicate is simply not
//! evaluated, so unset filters never narrow the selection.

use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult};
use crate::suggest::{close_matches, SUGGESTION_CUTOFF, SUGGESTION_LIMIT};
use clipsift_models::ClipRecord;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

/// Sentinel meaning "no rating lower bound".
pub const UNSET_MIN_RATING: u8 = 1;

/// Sentinel meaning "no rating upper bound".
pub const UNSET_MAX_RATING: u8 = 10;

/// Query parameters. `Default` leaves every predicate unset, which
/// selects everything except placeholder records.
#[derive(Debug, Clone)]
pub struct ClipQuery {
    /// Exact name to match, case-sensitive.
    pub name: Option<String>,
    /// Inclusive rating lower bound; [`UNSET_MIN_RATING`] means unset.
    pub min_rating: u8,
    /// Inclusive rating upper bound; [`UNSET_MAX_RATING`] means unset.
    pub max_rating: u8,
    /// Inclusive duration lower bound in seconds; 0 means unset.
    pub min_duration: f64,
    /// Inclusive duration upper bound in seconds; +inf means unset.
    pub max_duration: f64,
    /// Tag pattern with substring-search semantics.
    pub tag_pattern: Option<String>,
    /// Inclusive lower bound on `t1` in seconds; 0 means unset.
    pub min_t1: f64,
    /// Inclusive upper bound on `t1` in seconds; +inf means unset.
    pub max_t1: f64,
    /// Inclusive lower bound on `t2` in seconds; 0 means unset.
    pub min_t2: f64,
    /// Inclusive upper bound on `t2` in seconds; +inf means unset.
    pub max_t2: f64,
    /// Keep records whose name is "placeholder" in any casing; they are
    /// excluded by default.
    pub include_placeholder: bool,
}

impl Default for ClipQuery {
    fn default() -> Self {
        Self {
            name: None,
            min_rating: UNSET_MIN_RATING,
            max_rating: UNSET_MAX_RATING,
            min_duration: 0.0,
            max_duration: f64::INFINITY,
            tag_pattern: None,
            min_t1: 0.0,
            max_t1: f64::INFINITY,
            min_t2: 0.0,
            max_t2: f64::INFINITY,
            include_placeholder: false,
        }
    }
}

impl ClipQuery {
    /// Evaluate every active predicate and AND the masks together.
    ///
    /// Fails only on an invalid tag pattern; an empty result is a normal
    /// outcome, classified separately by [`ClipQuery::diagnose_empty`].
    pub fn evaluate(&self, catalog: &Catalog) -> CatalogResult<Selection> {
        let mut mask = vec![true; catalog.len()];
        for predicate in self.predicate_masks(catalog)? {
            for (bit, hit) in mask.iter_mut().zip(predicate) {
                *bit &= hit;
            }
        }
        debug!(
            selected = mask.iter().filter(|b| **b).count(),
            total = catalog.len(),
            "query evaluated"
        );
        Ok(Selection { mask })
    }

    /// Classify an empty selection: a name predicate that matched nothing
    /// gets a dedicated diagnosis with fuzzy suggestions, anything else is
    /// a generic miss.
    pub fn diagnose_empty(&self, catalog: &Catalog) -> EmptyReason {
        if let Some(name) = &self.name {
            if !catalog.records().iter().any(|r| r.name == *name) {
                let vocabulary = catalog.names();
                let suggestions =
                    close_matches(name, &vocabulary, SUGGESTION_LIMIT, SUGGESTION_CUTOFF);
                return EmptyReason::NameNotFound {
                    name: name.clone(),
                    suggestions,
                };
            }
        }
        EmptyReason::NoMatch
    }

    /// One mask per active predicate; unset predicates contribute nothing.
    fn predicate_masks(&self, catalog: &Catalog) -> CatalogResult<Vec<Vec<bool>>> {
        let records = catalog.records();
        let mut masks: Vec<Vec<bool>> = Vec::new();

        if let Some(name) = &self.name {
            masks.push(records.iter().map(|r| r.name == *name).collect());
        }
        if self.min_rating != UNSET_MIN_RATING {
            masks.push(records.iter().map(|r| r.rating >= self.min_rating).collect());
        }
        if self.max_rating != UNSET_MAX_RATING {
            masks.push(records.iter().map(|r| r.rating <= self.max_rating).collect());
        }
        if self.min_duration != 0.0 {
            masks.push(
                records
                    .iter()
                    .map(|r| r.duration >= self.min_duration)
                    .collect(),
            );
        }
        if self.max_duration.is_finite() {
            masks.push(
                records
                    .iter()
                    .map(|r| r.duration <= self.max_duration)
                    .collect(),
            );
        }
        if let Some(pattern) = &self.tag_pattern {
            masks.push(tag_mask(catalog, pattern)?);
        }
        if self.min_t1 != 0.0 {
            masks.push(
                records
                    .iter()
                    .map(|r| r.t1.seconds() >= self.min_t1)
                    .collect(),
            );
        }
        if self.max_t1.is_finite() {
            masks.push(
                records
                    .iter()
                    .map(|r| r.t1.seconds() <= self.max_t1)
                    .collect(),
            );
        }
        if self.min_t2 != 0.0 {
            masks.push(
                records
                    .iter()
                    .map(|r| r.t2.seconds() >= self.min_t2)
                    .collect(),
            );
        }
        if self.max_t2.is_finite() {
            masks.push(
                records
                    .iter()
                    .map(|r| r.t2.seconds() <= self.max_t2)
                    .collect(),
            );
        }
        if !self.include_placeholder {
            masks.push(records.iter().map(|r| !r.is_placeholder()).collect());
        }

        Ok(masks)
    }
}

/// Two-step tag filter: run the pattern over the distinct tag set once
/// (substring search, not anchored), then select records whose tag landed
/// in the matching set. One regex pass per distinct tag instead of one
/// per record, and duplicate tag frequency cannot change the outcome.
fn tag_mask(catalog: &Catalog, pattern: &str) -> CatalogResult<Vec<bool>> {
    let re =
        Regex::new(pattern).map_err(|source| CatalogError::invalid_tag_pattern(pattern, source))?;
    let matching: HashSet<&str> = catalog
        .distinct_tags()
        .into_iter()
        .filter(|tag| re.is_match(tag))
        .collect();
    debug!(pattern, matched = matching.len(), "tag pattern evaluated");
    Ok(catalog
        .records()
        .iter()
        .map(|r| matching.contains(r.tag.as_str()))
        .collect())
}

/// Result of evaluating a query: one mask entry per catalog record.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    mask: Vec<bool>,
}

impl Selection {
    /// The raw selection mask, catalog length.
    pub fn mask(&self) -> &[bool] {
        &self.mask
    }

    /// Number of selected records.
    pub fn selected_count(&self) -> usize {
        self.mask.iter().filter(|b| **b).count()
    }

    /// Whether nothing was selected.
    pub fn is_empty(&self) -> bool {
        !self.mask.iter().any(|b| *b)
    }

    /// Catalog indices of the selected records, in catalog order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.mask
            .iter()
            .enumerate()
            .filter_map(|(i, b)| b.then_some(i))
    }

    /// Selected records, in catalog order.
    pub fn records<'a>(&self, catalog: &'a Catalog) -> Vec<&'a ClipRecord> {
        self.indices().map(|i| &catalog.records()[i]).collect()
    }
}

/// Why a selection came back empty.
#[derive(Debug, Clone, PartialEq)]
pub enum EmptyReason {
    /// The name predicate matched nothing; suggestions come from the
    /// name vocabulary, best first.
    NameNotFound {
        name: String,
        suggestions: Vec<String>,
    },
    /// Some other combination of predicates excluded every record.
    NoMatch,
}
