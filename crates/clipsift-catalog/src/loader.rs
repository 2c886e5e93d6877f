//! CSV catalog ingestion.
//!
//! Expects a header row of `name,tag,nclip,rating,duration,t1,t2,link`.
//! Each row is deserialized (timestamps validate and normalize during
//! deserialization), semantically checked, and exact duplicate rows are
//! dropped keeping the first occurrence.

use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult};
use clipsift_models::ClipRecord;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Load and validate a catalog from a CSV file.
pub fn load_catalog(path: impl AsRef<Path>) -> CatalogResult<Catalog> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CatalogError::FileNotFound(path.to_path_buf()));
    }
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;
    let catalog = collect(reader)?;
    info!(
        path = %path.display(),
        records = catalog.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

fn collect<R: Read>(mut reader: csv::Reader<R>) -> CatalogResult<Catalog> {
    let mut records: Vec<ClipRecord> = Vec::new();
    let mut seen = HashSet::new();

    for (index, row) in reader.deserialize::<ClipRecord>().enumerate() {
        let record = row?;
        record
            .validate()
            .map_err(|source| CatalogError::invalid_record(index + 1, source))?;
        if !seen.insert(record.dedup_key()) {
            debug!(name = %record.name, tag = %record.tag, "dropping duplicate catalog row");
            continue;
        }
        records.push(record);
    }

    Ok(Catalog::new(records))
}
