//! Startup loading of the hospital knowledge base

use std::path::Path;

use hospital_core::HospitalRecord;

/// Load the knowledge base, falling back to an empty record on any failure.
///
/// A missing or corrupt file degrades answers to placeholder text instead of
/// stopping the server.
pub fn load_or_empty(path: impl AsRef<Path>) -> HospitalRecord {
    let path = path.as_ref();
    match HospitalRecord::from_path(path) {
        Ok(record) => {
            tracing::info!(
                path = %path.display(),
                departments = record.departments.len(),
                "Loaded hospital knowledge base"
            );
            record
        }
        Err(e) => {
            tracing::error!(
                path = %path.display(),
                error = %e,
                "Failed to load hospital knowledge base, continuing with empty data"
            );
            HospitalRecord::default()
        }
    }
}
