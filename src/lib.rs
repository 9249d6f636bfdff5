pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::aggregate::{aggregate, DateRole};
pub use crate::core::report::{generate_report, join};
pub use crate::utils::error::{ReportError, Result};
