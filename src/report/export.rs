//! Writing rendered documents to the output directory.
//!
//! The directory must already exist. Same-named files are overwritten,
//! nothing else is touched. Writes are not transactional: when one file
//! fails, the files written before it stay in place.

use super::STATISTICS_FILE;
use super::types::RenderedDocument;
use crate::error::ReportError;
use crate::stats::Statistics;
use log::debug;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write `docs` under `output_dir`, in order.
///
/// # Arguments
/// * `output_dir` - Existing directory to write into
/// * `document` - Identity of the result document, for error reporting
/// * `docs` - Rendered documents
///
/// # Returns
/// Paths of the written files.
pub fn write_documents(output_dir: &Path, document: &str, docs: &[RenderedDocument]) -> Result<Vec<PathBuf>, ReportError> {
    let mut written = Vec::with_capacity(docs.len());
    for doc in docs {
        let path = output_dir.join(&doc.file_name);
        fs::write(&path, &doc.contents)
            .map_err(|source| ReportError::Io { document: document.to_string(), path: path.clone(), source })?;
        debug!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// Dump the aggregated statistics as pretty JSON next to the reports
pub fn write_statistics_json(output_dir: &Path, document: &str, stats: &Statistics) -> Result<PathBuf, ReportError> {
    let path = output_dir.join(STATISTICS_FILE);
    let io_error = |source| ReportError::Io { document: document.to_string(), path: path.clone(), source };

    let file = File::create(&path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, stats).map_err(|e| io_error(e.into()))?;
    writer.flush().map_err(io_error)?;

    Ok(path)
}
