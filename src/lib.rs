use std::path::Path;

use crate::results::error::ReportError;
use crate::results::loader::load_document;
use crate::view::config::ReportConfig;
use crate::view::session::ReportSession;

pub mod cli;
pub mod diag;
pub mod report;
pub mod results;
pub mod view;

/// Load a results file and build a ready-to-render session for it.
///
/// Convenience wrapper over the loader and `ReportSession::new` for hosts
/// that embed the viewer directly.
pub fn open_report(path: &Path, config: &ReportConfig) -> Result<ReportSession, ReportError> {
    let document = load_document(path)?;
    Ok(ReportSession::new(document, config))
}
