use std::path::Path;

use thiserror::Error;

use crate::models::UniversityRecord;

/// Errors that can occur while loading the university catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog integrity error in \"{name}\": {reason}")]
    Integrity { name: String, reason: String },

    #[error("catalog is empty")]
    Empty,
}

/// Immutable, in-memory university catalog
///
/// Loaded once at startup and shared read-only across request handlers.
/// A load failure is fatal to startup, never a per-request error.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    universities: Vec<UniversityRecord>,
}

impl CatalogStore {
    /// Load the catalog from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parse a catalog from a JSON array of university records
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let universities: Vec<UniversityRecord> = serde_json::from_str(raw)?;
        Self::from_records(universities)
    }

    /// Build a catalog from already-deserialized records, enforcing the
    /// integrity invariants the scoring engine relies on
    pub fn from_records(universities: Vec<UniversityRecord>) -> Result<Self, CatalogError> {
        if universities.is_empty() {
            return Err(CatalogError::Empty);
        }

        for uni in &universities {
            // tuition is a divisor in the ROI computation
            if !(uni.tuition > 0.0) {
                return Err(CatalogError::Integrity {
                    name: uni.name.clone(),
                    reason: format!("tuition must be positive, got {}", uni.tuition),
                });
            }

            for (field, value) in [
                ("avg_gmat", uni.avg_gmat),
                ("avg_gpa", uni.avg_gpa),
                ("avg_exp", uni.avg_exp),
                ("tuition", uni.tuition),
                ("avg_salary", uni.avg_salary),
            ] {
                if !value.is_finite() {
                    return Err(CatalogError::Integrity {
                        name: uni.name.clone(),
                        reason: format!("{} is not a finite number", field),
                    });
                }
            }
        }

        Ok(Self { universities })
    }

    /// The full ordered catalog, in load order
    pub fn universities(&self) -> &[UniversityRecord] {
        &self.universities
    }

    pub fn len(&self) -> usize {
        self.universities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.universities.is_empty()
    }
}
