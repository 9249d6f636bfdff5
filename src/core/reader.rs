use crate::domain::model::{Record, Value};
use crate::utils::error::{ReportError, Result};
use calamine::{open_workbook_auto, Data, DataType, Reader};
use chrono::NaiveTime;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// Opens a tabular input and returns a single-pass record sequence.
/// Column names come from the header row; the header itself is not
/// yielded. Spreadsheet workbooks are materialized here, so the file
/// handle is released before this function returns; the csv backend
/// streams and holds its file for the iterator's lifetime only.
pub fn open_records(path: &Path) -> Result<Records> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("csv") => open_csv(path),
        Some("xls") | Some("xlsx") | Some("xlsm") | Some("xlsb") | Some("ods") => open_sheet(path),
        _ => Err(source_unreadable(
            path,
            "unrecognized spreadsheet extension",
        )),
    }
}

#[derive(Debug)]
pub enum Records {
    Sheet(SheetRecords),
    Csv(CsvRecords),
}

#[derive(Debug)]
pub struct SheetRecords {
    headers: Vec<String>,
    rows: std::vec::IntoIter<Vec<Value>>,
    row: u32,
}

pub struct CsvRecords {
    headers: Vec<String>,
    inner: csv::StringRecordsIntoIter<File>,
    row: u32,
}

impl std::fmt::Debug for CsvRecords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsvRecords")
            .field("headers", &self.headers)
            .field("row", &self.row)
            .finish_non_exhaustive()
    }
}

impl Iterator for Records {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Records::Sheet(records) => records.next_record(),
            Records::Csv(records) => records.next_record(),
        }
    }
}

impl SheetRecords {
    fn next_record(&mut self) -> Option<Result<Record>> {
        let cells = self.rows.next()?;
        self.row += 1;

        let fields: HashMap<String, Value> = self
            .headers
            .iter()
            .cloned()
            .zip(cells)
            .collect();

        Some(Ok(Record {
            row: self.row,
            fields,
        }))
    }
}

impl CsvRecords {
    fn next_record(&mut self) -> Option<Result<Record>> {
        let record = match self.inner.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e.into())),
        };
        self.row += 1;

        let fields: HashMap<String, Value> = self
            .headers
            .iter()
            .cloned()
            .zip(record.iter().map(|cell| {
                if cell.trim().is_empty() {
                    Value::Empty
                } else {
                    Value::Text(cell.to_string())
                }
            }))
            .collect();

        Some(Ok(Record {
            row: self.row,
            fields,
        }))
    }
}

fn open_sheet(path: &Path) -> Result<Records> {
    let mut workbook = open_workbook_auto(path).map_err(|e| source_unreadable(path, e))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| source_unreadable(path, "workbook has no worksheets"))?
        .map_err(|e| source_unreadable(path, e))?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or_else(|| source_unreadable(path, "missing header row"))?
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();

    let data: Vec<Vec<Value>> = rows
        .map(|cells| cells.iter().map(cell_value).collect())
        .collect();

    Ok(Records::Sheet(SheetRecords {
        headers,
        rows: data.into_iter(),
        // header occupies row 1
        row: 1,
    }))
}

fn open_csv(path: &Path) -> Result<Records> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| source_unreadable(path, e))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| source_unreadable(path, e))?
        .iter()
        .map(|cell| cell.trim().to_string())
        .collect();

    Ok(Records::Csv(CsvRecords {
        headers,
        inner: reader.into_records(),
        row: 1,
    }))
}

fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Empty,
        Data::String(s) => Value::Text(s.clone()),
        Data::Int(i) => Value::Int(*i),
        Data::Float(x) => Value::Float(*x),
        Data::Bool(b) => Value::Text(b.to_string()),
        Data::Error(e) => Value::Text(format!("{:?}", e)),
        Data::DateTime(_) | Data::DateTimeIso(_) => match cell.as_datetime() {
            Some(dt) if dt.time() == NaiveTime::MIN => Value::Date(dt.date()),
            Some(dt) => Value::DateTime(dt),
            None => Value::Empty,
        },
        Data::DurationIso(s) => Value::Text(s.clone()),
    }
}

fn source_unreadable(path: &Path, reason: impl ToString) -> ReportError {
    ReportError::SourceUnreadable {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
