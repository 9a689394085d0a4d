//! Cucumber HTML reports.
//!
//! Turns cucumber JSON result documents into one HTML page per feature, an
//! overview page with aggregate counts, and an XML chart data document.
//!
//! The pipeline is strictly one-directional: `loader` builds the feature
//! tree, `stats` computes every count and status once, and `report` renders
//! from those two without re-deriving anything. `publisher::publish` is the
//! entry point that runs the pipeline per document.

pub mod error;
pub mod fragment;
pub mod loader;
pub mod publisher;
pub mod report;
pub mod stats;
pub mod types;

pub use error::{ErrorKind, ReportError};
pub use publisher::{DocumentOutcome, DocumentReport, PublishTarget, ResultDocument, publish};
