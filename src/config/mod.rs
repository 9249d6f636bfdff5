pub mod interactive;

use crate::domain::ports::ReportConfig;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Extensions the output writer can target from the command line. The
/// consuming system expects the modern compressed-XML format, so the
/// front-ends enforce .xlsx before the core runs.
pub const OUTPUT_EXTENSIONS: [&str; 1] = ["xlsx"];

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "report-gen")]
#[command(about = "Consolidates assigned and closed work item spreadsheets into one report")]
pub struct CliConfig {
    /// Spreadsheet of assigned work items
    pub assigned: PathBuf,

    /// Spreadsheet of closed work items
    pub closed: PathBuf,

    /// Destination for the consolidated report (.xlsx)
    pub output: PathBuf,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ReportConfig for CliConfig {
    fn assigned_path(&self) -> &Path {
        &self.assigned
    }

    fn closed_path(&self) -> &Path {
        &self.closed
    }

    fn output_path(&self) -> &Path {
        &self.output
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("assigned", &self.assigned)?;
        validation::validate_path("closed", &self.closed)?;
        validation::validate_path("output", &self.output)?;
        validation::validate_file_extension("output", &self.output, &OUTPUT_EXTENSIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(output: &str) -> CliConfig {
        CliConfig {
            assigned: PathBuf::from("assigned.xls"),
            closed: PathBuf::from("closed.xls"),
            output: PathBuf::from(output),
            verbose: false,
        }
    }

    #[test]
    fn test_xlsx_output_is_accepted() {
        assert!(config("report.xlsx").validate().is_ok());
    }

    #[test]
    fn test_other_output_extensions_are_rejected() {
        assert!(config("report.xls").validate().is_err());
        assert!(config("report.csv").validate().is_err());
        assert!(config("report").validate().is_err());
    }
}
