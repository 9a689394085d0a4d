// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod config;
mod console_format;
mod ui;

use config::ReportJob;
use cuke_reports::{DocumentOutcome, PublishTarget, ReportError, ResultDocument, publish};
use std::fs;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    if let Some(width) = args.console_width {
        console_format::set_console_width(width);
    }

    let job = match config::build_report_job(&args) {
        Ok(job) => job,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    // No results is an expected condition, not a failure
    if job.json_files.is_empty() {
        ui::print_error(&format!("There were no json results found in: {}", job.json_dir.display()));
        std::process::exit(0);
    }

    ui::status("Compiling Cucumber Html Reports");

    if let Err(e) = config::prepare_output_dir(&job) {
        ui::print_error(&e);
        std::process::exit(1);
    }

    let (documents, read_failures) = config::read_documents(&job.json_files);
    for (document, error) in &read_failures {
        ui::document_status(document, false, &format!("(could not be read: {})", error));
    }

    let outcomes = match run_job(&job, &documents) {
        Ok(outcomes) => outcomes,
        Err(ReportError::MissingInput) => {
            ui::print_error(&format!("There were no readable json results in: {}", job.json_dir.display()));
            std::process::exit(if read_failures.is_empty() { 0 } else { 1 });
        }
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if !args.quiet {
        println!();
        console_format::print_summary_table(&outcomes);
    }

    println!("\nReports written to: {}", job.output_dir.display());

    let failed = outcomes.iter().filter(|o| !o.is_success()).count() + read_failures.len();
    std::process::exit(if failed > 0 { 1 } else { 0 });
}

/// Publish every document, either all into the output directory or each
/// into its own sub-directory
fn run_job(job: &ReportJob, documents: &[ResultDocument]) -> Result<Vec<DocumentOutcome>, ReportError> {
    let report_line = |outcome: &DocumentOutcome| match &outcome.result {
        Ok(report) => ui::document_status(
            &outcome.document,
            true,
            &format!(
                "({} features, {} passed, {} failed, {} skipped)",
                report.totals.features, report.totals.passed, report.totals.failed, report.totals.skipped
            ),
        ),
        Err(e) => ui::document_status(&outcome.document, false, &format!("({})", e)),
    };

    if !job.per_document {
        if documents.len() > 1 {
            ui::warning(&format!(
                "{} result files share {}; the overview shows the last one (use --per-document to keep each)",
                documents.len(),
                job.output_dir.display()
            ));
        }
        let mut target = PublishTarget::new(&job.output_dir, &job.project, &job.build);
        target.dump_statistics = job.dump_json;
        return publish(documents, &target, report_line);
    }

    if documents.is_empty() {
        return Err(ReportError::MissingInput);
    }

    let mut outcomes = Vec::with_capacity(documents.len());
    for document in documents {
        let dir = config::document_output_dir(&job.output_dir, &document.id);
        if let Err(source) = fs::create_dir_all(&dir) {
            let outcome = DocumentOutcome {
                document: document.id.clone(),
                result: Err(ReportError::Io { document: document.id.clone(), path: dir, source }),
            };
            report_line(&outcome);
            outcomes.push(outcome);
            continue;
        }

        let mut target = PublishTarget::new(&dir, &job.project, &job.build);
        target.dump_statistics = job.dump_json;
        outcomes.extend(publish(std::slice::from_ref(document), &target, report_line)?);
    }

    Ok(outcomes)
}
