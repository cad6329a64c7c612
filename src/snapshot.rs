// ABOUTME: Reads snapshot documents (profile, categories, logs) from JSON files or strings
// ABOUTME: Rejects logs that reference unknown categories or carry unusable values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

use cadence_core::errors::{AppError, AppResult, ErrorCode};
use cadence_core::models::Snapshot;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Read and validate a snapshot document from disk
///
/// # Errors
///
/// Returns a storage error when the file cannot be read, a serialization error
/// when it is not a snapshot document, and a validation error from
/// [`validate_snapshot`]
pub fn load_snapshot(path: impl AsRef<Path>) -> AppResult<Snapshot> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::new(
            ErrorCode::StorageError,
            format!("Failed to read snapshot {}: {e}", path.display()),
        )
        .with_source(e)
    })?;

    let snapshot = parse_snapshot(&contents)?;
    info!(
        path = %path.display(),
        categories = snapshot.categories.len(),
        logs = snapshot.logs.len(),
        has_profile = snapshot.profile.is_some(),
        "Loaded snapshot"
    );
    Ok(snapshot)
}

/// Parse and validate a snapshot document
///
/// # Errors
///
/// Returns a serialization error for malformed JSON and a validation error
/// from [`validate_snapshot`]
pub fn parse_snapshot(json: &str) -> AppResult<Snapshot> {
    let snapshot: Snapshot = serde_json::from_str(json)?;
    validate_snapshot(&snapshot)?;
    Ok(snapshot)
}

/// Check referential integrity and value ranges
///
/// Non-finite log values are left in place: the engines report them through
/// their own fallbacks.
///
/// # Errors
///
/// Returns an error when category ids repeat, a category target is not
/// positive, a log references an unknown category, or a log value is negative
pub fn validate_snapshot(snapshot: &Snapshot) -> AppResult<()> {
    let mut ids = HashSet::with_capacity(snapshot.categories.len());
    for category in &snapshot.categories {
        if !ids.insert(category.id.as_str()) {
            return Err(AppError::invalid_input(format!(
                "Duplicate category id '{}'",
                category.id
            ))
            .with_resource_id(category.id.clone()));
        }
        if category.daily_target.is_nan() || category.daily_target <= 0.0 {
            return Err(AppError::out_of_range(format!(
                "Category '{}' must have a positive daily target",
                category.name
            ))
            .with_resource_id(category.id.clone()));
        }
    }

    for log in &snapshot.logs {
        if !ids.contains(log.category_id.as_str()) {
            return Err(AppError::not_found(format!("Category '{}'", log.category_id))
                .with_resource_id(log.id.clone()));
        }
        if log.value < 0.0 {
            return Err(AppError::out_of_range(format!(
                "Log value must not be negative, got {}",
                log.value
            ))
            .with_resource_id(log.id.clone()));
        }
    }

    debug!(
        categories = snapshot.categories.len(),
        logs = snapshot.logs.len(),
        "Snapshot validated"
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_is_rejected() {
        let json = r#"{
            "categories": [{"id": "c1", "name": "Water", "unit": "glasses", "dailyTarget": 8}],
            "logs": [{"id": "l1", "categoryId": "c2", "date": "2025-03-10", "value": 3}]
        }"#;

        let error = parse_snapshot(json).unwrap_err();
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert_eq!(error.resource_id.as_deref(), Some("l1"));
    }

    #[test]
    fn test_zero_target_is_rejected() {
        let json = r#"{"categories": [{"id": "c1", "name": "Water", "unit": "glasses", "dailyTarget": 0}]}"#;
        assert_eq!(
            parse_snapshot(json).unwrap_err().code,
            ErrorCode::ValueOutOfRange
        );
    }

    #[test]
    fn test_empty_document_is_valid() {
        let snapshot = parse_snapshot("{}").unwrap();
        assert!(snapshot.is_empty());
        assert!(snapshot.profile.is_none());
    }
}
