use std::fs;
use std::path::{Path, PathBuf};

use crate::results::error::ReportError;
use crate::results::results_model::{ReportDocument, Suite};

/// Outcome of loading one results file. Batch loads keep going past
/// failures, so each file carries its own result.
#[derive(Debug)]
pub struct LoadOutcome {
    pub path: PathBuf,
    pub result: Result<ReportDocument, ReportError>,
}

/// Load and validate a single results JSON file.
pub fn load_document(path: &Path) -> Result<ReportDocument, ReportError> {
    if !path.extension().map_or(false, |e| e == "json") {
        return Err(ReportError::NotJson { path: path.to_path_buf() });
    }
    let content = fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document: ReportDocument =
        serde_json::from_str(&content).map_err(|source| ReportError::JsonParse {
            path: path.to_path_buf(),
            source,
        })?;
    validate_document(path, &document)?;
    Ok(document)
}

/// Load results from a single JSON file or a directory of JSON files.
///
/// Directory scans skip non-JSON entries and sort by path for
/// deterministic order. A failed file becomes a failed outcome, never a
/// failed batch.
pub fn load_documents(path: &Path) -> Vec<LoadOutcome> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(source) => {
            return vec![LoadOutcome {
                path: path.to_path_buf(),
                result: Err(ReportError::Io { path: path.to_path_buf(), source }),
            }];
        }
    };

    if !metadata.is_dir() {
        return vec![LoadOutcome {
            path: path.to_path_buf(),
            result: load_document(path),
        }];
    }

    let mut files = Vec::new();
    match fs::read_dir(path) {
        Ok(entries) => {
            for entry in entries.flatten() {
                let p = entry.path();
                if p.extension().map_or(false, |e| e == "json") {
                    files.push(p);
                }
            }
        }
        Err(source) => {
            return vec![LoadOutcome {
                path: path.to_path_buf(),
                result: Err(ReportError::Io { path: path.to_path_buf(), source }),
            }];
        }
    }
    files.sort();

    files
        .into_iter()
        .map(|p| {
            let result = load_document(&p);
            LoadOutcome { path: p, result }
        })
        .collect()
}

/// Structural checks beyond what deserialization enforces. The uuid is
/// the stable identity every view keys on, so a suite without one is
/// rejected here rather than surfacing as a broken report.
fn validate_document(path: &Path, document: &ReportDocument) -> Result<(), ReportError> {
    let missing = count_missing_uuids(&document.suites);
    if missing > 0 {
        return Err(ReportError::InvalidDocument {
            path: path.to_path_buf(),
            reason: format!("{} suite(s) have an empty uuid", missing),
        });
    }
    Ok(())
}

fn count_missing_uuids(suite: &Suite) -> usize {
    let own = usize::from(suite.uuid.is_empty());
    own + suite.suites.iter().map(count_missing_uuids).sum::<usize>()
}
