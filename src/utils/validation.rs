use crate::utils::error::{ContactLogError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let text = path.to_string_lossy();
    if text.trim().is_empty() {
        return Err(ContactLogError::InvalidArgumentError {
            field: field_name.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if text.contains('\0') {
        return Err(ContactLogError::InvalidArgumentError {
            field: field_name.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Rejects an output path that would overwrite one of the inputs.
pub fn validate_distinct_paths(field_name: &str, path: &Path, others: &[&Path]) -> Result<()> {
    if let Some(clash) = others.iter().find(|other| **other == path) {
        return Err(ContactLogError::InvalidArgumentError {
            field: field_name.to_string(),
            reason: format!("{} is also used as an input file", clash.display()),
        });
    }
    Ok(())
}
