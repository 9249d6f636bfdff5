use crate::config::OUTPUT_EXTENSIONS;
use crate::domain::ports::ReportConfig;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Paths collected from an interactive session. Front-end counterpart of
/// `CliConfig` for runs started without command-line arguments.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub assigned: PathBuf,
    pub closed: PathBuf,
    pub output: PathBuf,
}

impl ReportConfig for ReportRequest {
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

impl Validate for ReportRequest {
    fn validate(&self) -> Result<()> {
        validation::validate_path("assigned", &self.assigned)?;
        validation::validate_path("closed", &self.closed)?;
        validation::validate_path("output", &self.output)?;
        validation::validate_file_extension("output", &self.output, &OUTPUT_EXTENSIONS)
    }
}

/// Prompts for the three report paths on stdin.
pub fn collect_request() -> io::Result<ReportRequest> {
    let assigned = prompt_path("Path to the assigned work items file")?;
    let closed = prompt_path("Path to the closed work items file")?;
    let output = prompt_path("Path for the consolidated report (.xlsx)")?;

    Ok(ReportRequest {
        assigned,
        closed,
        output,
    })
}

fn prompt_path(label: &str) -> io::Result<PathBuf> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "no path entered",
        ));
    }

    Ok(PathBuf::from(line.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_validates_output_extension() {
        let request = ReportRequest {
            assigned: PathBuf::from("assigned.xls"),
            closed: PathBuf::from("closed.xls"),
            output: PathBuf::from("report.pdf"),
        };
        assert!(request.validate().is_err());
    }
}
