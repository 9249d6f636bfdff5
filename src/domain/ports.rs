use crate::domain::model::OutputRow;
use crate::utils::error::Result;
use std::path::Path;

/// A front-end supplies the three paths of one report run and receives a
/// single success/failure result back.
pub trait ReportConfig {
    fn assigned_path(&self) -> &Path;
    fn closed_path(&self) -> &Path;
    fn output_path(&self) -> &Path;
}

/// Serializes the joined report to a tabular file, overwriting any
/// existing file at `path`.
pub trait TableWriter {
    fn write_table(&self, path: &Path, rows: &[OutputRow]) -> Result<()>;
}
