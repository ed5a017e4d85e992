//! Tolerant molecule-summary aggregation
//!
//! The external spectroscopy archive returns either JSON or CSV, with no
//! schema guarantee beyond "records with string-ish fields". This module
//! scans whatever it is handed for mentions of a fixed molecule vocabulary
//! and aggregates per-molecule hit counts. Every failure stays inside this
//! boundary: parse errors come back as `SummaryError`, and the catalog-based
//! fallback is always available.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use catalog::PlanetRecord;

/// Molecules recognized in archive payloads, in reporting order
pub const MOLECULE_VOCABULARY: [&str; 9] =
    ["H2O", "CO2", "CH4", "O2", "NH3", "CO", "H2", "He", "N2"];

/// Per-molecule hit count aggregated from a payload or the local catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoleculeCount {
    pub molecule: &'static str,
    pub count: u32,
}

/// Failure inside the summary boundary; never escapes as a panic
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("payload is not valid CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("payload contained no recognizable records")]
    Empty,
}

/// Count vocabulary mentions across a set of stringified field values.
///
/// Substring matching on uppercased text, like the archive's own field
/// conventions ("H2O absorption", "CO2_DETECTED", ...). Only molecules
/// with at least one hit are reported.
fn count_mentions<'a>(values: impl Iterator<Item = &'a str>) -> Vec<MoleculeCount> {
    let mut counts: BTreeMap<&'static str, u32> = BTreeMap::new();
    for value in values {
        let upper = value.to_ascii_uppercase();
        for molecule in MOLECULE_VOCABULARY {
            if upper.contains(molecule.to_ascii_uppercase().as_str()) {
                *counts.entry(molecule).or_insert(0) += 1;
            }
        }
    }

    MOLECULE_VOCABULARY
        .iter()
        .filter_map(|&molecule| {
            counts.get(molecule).map(|&count| MoleculeCount { molecule, count })
        })
        .collect()
}

/// Render a leaf JSON value as scannable text; containers are skipped.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Aggregate a JSON payload: either a bare array of records or an object
/// wrapping one under `data` or `table`.
fn summarize_json(payload: &str) -> Result<Vec<MoleculeCount>, SummaryError> {
    let parsed: Value = serde_json::from_str(payload)?;
    let records = match &parsed {
        Value::Array(records) => records.as_slice(),
        Value::Object(map) => map
            .get("data")
            .or_else(|| map.get("table"))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]),
        _ => &[],
    };
    if records.is_empty() {
        return Err(SummaryError::Empty);
    }

    let mut texts = Vec::new();
    for record in records {
        match record {
            Value::Object(fields) => {
                texts.extend(fields.values().filter_map(scalar_text));
            }
            other => texts.extend(scalar_text(other)),
        }
    }

    let counts = count_mentions(texts.iter().map(String::as_str));
    if counts.is_empty() {
        return Err(SummaryError::Empty);
    }
    Ok(counts)
}

/// Aggregate a CSV payload with a header row.
fn summarize_csv(payload: &str) -> Result<Vec<MoleculeCount>, SummaryError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(payload.as_bytes());

    let mut texts = Vec::new();
    for row in reader.records() {
        let row = row?;
        texts.extend(row.iter().map(str::to_string));
    }
    if texts.is_empty() {
        return Err(SummaryError::Empty);
    }

    let counts = count_mentions(texts.iter().map(String::as_str));
    if counts.is_empty() {
        return Err(SummaryError::Empty);
    }
    Ok(counts)
}

/// Aggregate an archive payload of unknown shape: JSON first, CSV second.
pub fn summarize_payload(payload: &str) -> Result<Vec<MoleculeCount>, SummaryError> {
    match summarize_json(payload) {
        Ok(counts) => Ok(counts),
        Err(json_error) => summarize_csv(payload).map_err(|csv_error| {
            // Prefer reporting the earlier failure unless CSV got further
            match csv_error {
                SummaryError::Empty => json_error,
                other => other,
            }
        }),
    }
}

/// Aggregate the payload when one is available, falling back to locally
/// computed catalog statistics. Never fails and never panics: a bad payload
/// is logged and replaced by the fallback.
pub fn summarize_or_local(payload: Option<&str>, records: &[PlanetRecord]) -> Vec<MoleculeCount> {
    if let Some(payload) = payload {
        match summarize_payload(payload) {
            Ok(counts) => return counts,
            Err(error) => log::warn!("external spectroscopy summary unavailable: {error}"),
        }
    }
    local_summary(records)
}

/// Per-molecule counts over the catalog's own atmosphere labels.
pub fn local_summary(records: &[PlanetRecord]) -> Vec<MoleculeCount> {
    count_mentions(records.iter().map(|record| record.atmosphere.label()))
}
