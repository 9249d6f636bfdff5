use crate::utils::error::{ReportError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.as_os_str();
    if raw.is_empty() {
        return Err(ReportError::ConfigError {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if path.to_string_lossy().contains('\0') {
        return Err(ReportError::ConfigError {
            message: format!("{}: path contains null bytes", field_name),
        });
    }

    Ok(())
}

pub fn validate_file_extension(
    field_name: &str,
    path: &Path,
    allowed_extensions: &[&str],
) -> Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(extension) if allowed_extensions.contains(&extension) => Ok(()),
        Some(extension) => Err(ReportError::ConfigError {
            message: format!(
                "{}: unsupported file extension '{}'. Allowed extensions: {}",
                field_name,
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(ReportError::ConfigError {
            message: format!("{}: file has no extension or invalid filename", field_name),
        }),
    }
}
