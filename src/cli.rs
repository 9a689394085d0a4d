use clap::Parser;
use std::path::PathBuf;

/// Name of the report directory created under the JSON directory by default
pub const DEFAULT_REPORT_DIR: &str = "cucumber-html-reports";

#[derive(Parser, Debug, Clone)]
#[command(name = "cuke-reports")]
#[command(about = "Render cucumber JSON results as HTML feature reports")]
#[command(version)]
pub struct CliArgs {
    /// Directory containing the cucumber JSON result files (*.json)
    #[arg(long, short = 'j', value_name = "DIR")]
    pub json_dir: PathBuf,

    /// Directory to write the reports into (created if missing)
    /// Default: <json-dir>/cucumber-html-reports
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Project name used in generated links
    #[arg(long, default_value = "default")]
    pub project: String,

    /// Build identifier used in generated links and page headings
    #[arg(long, default_value = "0")]
    pub build: String,

    /// Copy the JSON result files into the output directory
    #[arg(long)]
    pub copy_json: bool,

    /// Give each result file its own sub-directory of the output directory
    /// Without this, all result files write into the same directory and the
    /// overview reflects the last one processed
    #[arg(long)]
    pub per_document: bool,

    /// Also write the aggregated statistics as feature-statistics.json
    #[arg(long)]
    pub dump_json: bool,

    /// Skip the console summary table
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Override console width for the summary table (default: auto-detect)
    #[arg(long, value_name = "COLUMNS")]
    pub console_width: Option<usize>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if !self.json_dir.exists() {
            return Err(format!("JSON directory does not exist: {}", self.json_dir.display()));
        }
        if !self.json_dir.is_dir() {
            return Err(format!("JSON path is not a directory: {}", self.json_dir.display()));
        }
        if let Some(ref output) = self.output_dir
            && output.exists()
            && !output.is_dir()
        {
            return Err(format!("Output path exists and is not a directory: {}", output.display()));
        }
        if self.project.trim().is_empty() {
            return Err("--project must not be empty".to_string());
        }
        Ok(())
    }

    /// Get the output directory, defaulting to a report directory next to the JSON
    pub fn get_output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| self.json_dir.join(DEFAULT_REPORT_DIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(json_dir: PathBuf) -> CliArgs {
        CliArgs {
            json_dir,
            output_dir: None,
            project: "web".to_string(),
            build: "3".to_string(),
            copy_json: false,
            per_document: false,
            dump_json: false,
            quiet: false,
            console_width: None,
        }
    }

    #[test]
    fn test_validate_missing_json_dir_fails() {
        let args = args(PathBuf::from("/definitely/not/here/cuke-json"));
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_file_as_json_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("result.json");
        std::fs::write(&file, "[]").unwrap();
        assert!(args(file).validate().unwrap_err().contains("not a directory"));
    }

    #[test]
    fn test_validate_valid_config_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        assert!(args(dir.path().to_path_buf()).validate().is_ok());
    }

    #[test]
    fn test_default_output_dir() {
        let a = args(PathBuf::from("target/cucumber"));
        assert_eq!(a.get_output_dir(), PathBuf::from("target/cucumber").join(DEFAULT_REPORT_DIR));

        let mut b = args(PathBuf::from("target/cucumber"));
        b.output_dir = Some(PathBuf::from("out"));
        assert_eq!(b.get_output_dir(), PathBuf::from("out"));
    }

    #[test]
    fn test_parse_from_flags() {
        let a = CliArgs::parse_from(["cuke-reports", "--json-dir", "results", "--build", "77", "--per-document"]);
        assert_eq!(a.json_dir, PathBuf::from("results"));
        assert_eq!(a.build, "77");
        assert_eq!(a.project, "default");
        assert!(a.per_document);
        assert!(!a.copy_json);
    }
}
