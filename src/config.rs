/// Configuration resolution module
///
/// This module handles:
/// - Building a ReportJob from CLI arguments
/// - Discovering the JSON result files to publish
/// - Reading result files into documents
/// - Resolving the output directory
use crate::cli::CliArgs;
use cuke_reports::ResultDocument;
use cuke_reports::report::STATISTICS_FILE;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Fully resolved, immutable description of one reporting run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportJob {
    pub json_dir: PathBuf,
    /// Result files in publishing order
    pub json_files: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub project: String,
    pub build: String,
    pub copy_json: bool,
    pub per_document: bool,
    pub dump_json: bool,
}

/// Build a complete ReportJob from CLI arguments
///
/// All result files are discovered upfront so the publisher receives a
/// fixed list. An empty list is not an error here; it is reported as
/// "no results found" by the caller.
pub fn build_report_job(args: &CliArgs) -> Result<ReportJob, String> {
    debug!("Building report job from CLI args");

    let json_files = discover_json_files(&args.json_dir)?;
    debug!("Found {} JSON result files in {}", json_files.len(), args.json_dir.display());

    Ok(ReportJob {
        json_dir: args.json_dir.clone(),
        json_files,
        output_dir: args.get_output_dir(),
        project: args.project.clone(),
        build: args.build.clone(),
        copy_json: args.copy_json,
        per_document: args.per_document,
        dump_json: args.dump_json,
    })
}

/// List `*.json` files directly inside `dir`, sorted by path.
///
/// A statistics dump left by an earlier run is not a result file and is skipped.
pub fn discover_json_files(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let pattern = format!("{}/*.json", glob::Pattern::escape(&dir.display().to_string()));
    let entries = glob::glob(&pattern).map_err(|e| format!("Invalid result file pattern {}: {}", pattern, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| format!("Failed to read {}: {}", dir.display(), e))?;
        if path.is_file() && path.file_name().is_none_or(|n| n != STATISTICS_FILE) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Document identity for a result file: its file name
pub fn document_id(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_else(|| path.display().to_string())
}

/// Read result files into documents.
///
/// Files that cannot be read are returned separately with the error text,
/// so one unreadable file does not stop the others.
pub fn read_documents(files: &[PathBuf]) -> (Vec<ResultDocument>, Vec<(String, String)>) {
    let mut documents = Vec::new();
    let mut failures = Vec::new();

    for path in files {
        match fs::read_to_string(path) {
            Ok(contents) => documents.push(ResultDocument::new(document_id(path), contents)),
            Err(e) => failures.push((document_id(path), e.to_string())),
        }
    }

    (documents, failures)
}

/// Sub-directory used for a document in per-document mode
pub fn document_output_dir(output_dir: &Path, document_id: &str) -> PathBuf {
    let stem = Path::new(document_id).file_stem().map(|s| s.to_string_lossy().into_owned());
    output_dir.join(stem.unwrap_or_else(|| document_id.to_string()))
}

/// Create the output directory and optionally copy the raw results into it
pub fn prepare_output_dir(job: &ReportJob) -> Result<(), String> {
    fs::create_dir_all(&job.output_dir)
        .map_err(|e| format!("Failed to create output directory {}: {}", job.output_dir.display(), e))?;

    if job.copy_json {
        for file in &job.json_files {
            let target = job.output_dir.join(document_id(file));
            debug!("Copying {} to {}", file.display(), target.display());
            fs::copy(file, &target).map_err(|e| format!("Failed to copy {}: {}", file.display(), e))?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
