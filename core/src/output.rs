//! JSON file output for the dashboard documents.

use crate::{
    config::ReportKind,
    error::{ReportError, ReportResult},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrittenFile {
    pub kind: ReportKind,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Create the output directory and any missing parents.
pub fn ensure_output_dir(dir: &Path) -> ReportResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| ReportError::io(dir, e))
}

/// Serialize `report` pretty-printed (2-space indent) to `dir/<kind file name>`,
/// replacing any previous file.
pub fn write_report<T: Serialize>(
    dir: &Path,
    kind: ReportKind,
    report: &T,
) -> ReportResult<WrittenFile> {
    let path = dir.join(kind.file_name());
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(&path, json.as_bytes()).map_err(|e| ReportError::io(&path, e))?;
    log::info!("output: wrote {} ({} bytes)", path.display(), json.len());
    Ok(WrittenFile {
        kind,
        path,
        bytes: json.len(),
    })
}
