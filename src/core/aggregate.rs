use crate::domain::model::{AggregatedCounts, Key, Record, Value};
use crate::utils::error::{ReportError, Result};
use chrono::{NaiveDate, NaiveDateTime};

/// Which date column one aggregation pass reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRole {
    Assigned,
    Closed,
}

impl DateRole {
    pub fn column(self) -> &'static str {
        match self {
            DateRole::Assigned => "assigned",
            DateRole::Closed => "aps_rec",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DateRole::Assigned => "assigned",
            DateRole::Closed => "closed",
        }
    }
}

pub const NAME_COLUMN: &str = "retriever";
pub const NAME_COLUMN_ALIAS: &str = "ret";

/// Counts occurrences of (retriever, event date) over one record
/// sequence. Any malformed row fails the whole pass; rows are never
/// silently skipped.
pub fn aggregate(
    records: impl Iterator<Item = Result<Record>>,
    role: DateRole,
) -> Result<AggregatedCounts> {
    let mut counts = AggregatedCounts::new();

    for record in records {
        let record = record?;
        let name = resolve_name(&record)?;
        let date = resolve_date(&record, role)?;
        counts.increment(Key::new(name, date));
    }

    Ok(counts)
}

/// Primary column first, then the alias. Empty cells count as absent.
fn resolve_name(record: &Record) -> Result<String> {
    for column in [NAME_COLUMN, NAME_COLUMN_ALIAS] {
        if let Some(value) = record.get(column) {
            if !value.is_empty() {
                return Ok(value.to_string().trim().to_string());
            }
        }
    }

    Err(ReportError::MissingField {
        row: record.row,
        field: format!("{} (or alias {})", NAME_COLUMN, NAME_COLUMN_ALIAS),
    })
}

fn resolve_date(record: &Record, role: DateRole) -> Result<NaiveDate> {
    let column = role.column();

    let value = match record.get(column) {
        Some(value) if !value.is_empty() => value,
        _ => {
            return Err(ReportError::MissingField {
                row: record.row,
                field: column.to_string(),
            })
        }
    };

    coerce_date(value).ok_or_else(|| ReportError::InvalidFieldType {
        row: record.row,
        field: column.to_string(),
        found: format!("{} '{}'", value.type_name(), value),
    })
}

/// Time-of-day is discarded, never used for disambiguation.
fn coerce_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::Date(date) => Some(*date),
        Value::DateTime(dt) => Some(dt.date()),
        Value::Text(s) => parse_date_text(s.trim()),
        _ => None,
    }
}

fn parse_date_text(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }

    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|format| {
            NaiveDateTime::parse_from_str(s, format)
                .ok()
                .map(|dt| dt.date())
        })
}
