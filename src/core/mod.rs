pub mod aggregate;
pub mod reader;
pub mod report;
pub mod writer;

pub use crate::domain::model::{AggregatedCounts, Key, OutputRow, Record, Value};
pub use crate::domain::ports::{ReportConfig, TableWriter};
pub use crate::utils::error::Result;
