use crate::domain::model::RemovalDirective;
use crate::utils::error::{PruneError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PruneError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PruneError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PruneError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_not_empty<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(PruneError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

/// 每個指令至少要有一個 key，路徑片段與 key 都不可為空白
pub fn validate_directive(field_name: &str, directive: &RemovalDirective) -> Result<()> {
    if directive.keys.is_empty() {
        return Err(PruneError::InvalidConfigValueError {
            field: format!("{}.keys", field_name),
            value: directive.describe_path(),
            reason: "Directive must list at least one key".to_string(),
        });
    }

    for segment in &directive.path {
        validate_non_empty_string(&format!("{}.path", field_name), segment)?;
    }
    for key in &directive.keys {
        validate_non_empty_string(&format!("{}.keys", field_name), key)?;
    }

    Ok(())
}
