use crate::domain::model::OutputRow;
use crate::domain::ports::TableWriter;
use crate::utils::error::{ReportError, Result};
use rust_xlsxwriter::Workbook;
use std::path::Path;

pub const SHEET_NAME: &str = "parameds consolidated";
pub const HEADER: [&str; 3] = ["name", "assigned", "closed"];

/// Picks a writer backend from the output path's extension.
pub fn writer_for(path: &Path) -> Result<Box<dyn TableWriter>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("xlsx") => Ok(Box::new(XlsxWriter)),
        Some("csv") => Ok(Box::new(CsvWriter)),
        Some(other) => Err(ReportError::WriteFailed {
            path: path.to_path_buf(),
            reason: format!("unsupported output extension '{}'", other),
        }),
        None => Err(ReportError::WriteFailed {
            path: path.to_path_buf(),
            reason: "output path has no extension".to_string(),
        }),
    }
}

pub struct XlsxWriter;

impl TableWriter for XlsxWriter {
    fn write_table(&self, path: &Path, rows: &[OutputRow]) -> Result<()> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME).map_err(|e| write_failed(path, e))?;

        for (col, title) in HEADER.iter().enumerate() {
            sheet
                .write_string(0, col as u16, *title)
                .map_err(|e| write_failed(path, e))?;
        }

        for (i, row) in rows.iter().enumerate() {
            let at = (i + 1) as u32;
            sheet
                .write_string(at, 0, row.name.as_str())
                .map_err(|e| write_failed(path, e))?;
            sheet
                .write_number(at, 1, row.assigned as f64)
                .map_err(|e| write_failed(path, e))?;
            sheet
                .write_number(at, 2, row.closed as f64)
                .map_err(|e| write_failed(path, e))?;
        }

        workbook.save(path).map_err(|e| write_failed(path, e))
    }
}

pub struct CsvWriter;

impl TableWriter for CsvWriter {
    fn write_table(&self, path: &Path, rows: &[OutputRow]) -> Result<()> {
        let mut writer = csv::Writer::from_path(path).map_err(|e| write_failed(path, e))?;

        writer
            .write_record(HEADER)
            .map_err(|e| write_failed(path, e))?;

        for row in rows {
            writer
                .write_record([
                    row.name.clone(),
                    row.assigned.to_string(),
                    row.closed.to_string(),
                ])
                .map_err(|e| write_failed(path, e))?;
        }

        writer.flush().map_err(|e| write_failed(path, e))
    }
}

fn write_failed(path: &Path, err: impl std::fmt::Display) -> ReportError {
    ReportError::WriteFailed {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}
