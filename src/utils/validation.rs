use crate::utils::error::{DirectoryError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 允許的輸出檔名副檔名
pub const DIRECTORY_EXTENSIONS: &[&str] = &["md", "markdown", "txt"];

/// `-` 代表從 stdin 讀取
pub const STDIN_MARKER: &str = "-";

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 輸出檔名只能是單一檔名，不可夾帶目錄
pub fn validate_file_name(field_name: &str, file_name: &str) -> Result<()> {
    validate_non_empty_string(field_name, file_name)?;

    if file_name.contains('/') || file_name.contains('\\') {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file_name.to_string(),
            reason: "File name must not contain path separators".to_string(),
        });
    }

    validate_file_extensions(field_name, &[file_name.to_string()], DIRECTORY_EXTENSIONS)
}

pub fn validate_file_extensions(
    field_name: &str,
    files: &[String],
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    for file in files {
        if let Some(extension) = std::path::Path::new(file)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            if !allowed_set.contains(extension) {
                return Err(DirectoryError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.clone(),
                    reason: format!(
                        "Unsupported file extension: {}. Allowed extensions: {}",
                        extension,
                        allowed_extensions.join(", ")
                    ),
                });
            }
        } else {
            return Err(DirectoryError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: file.clone(),
                reason: "File has no extension or invalid filename".to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| DirectoryError::MissingConfigError {
            field: field_name.to_string(),
        })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 輸入路徑：stdin 標記直接通過，其餘當作一般路徑檢查
pub fn validate_input_path(field_name: &str, path: &str) -> Result<()> {
    if path == STDIN_MARKER {
        return Ok(());
    }
    validate_path(field_name, path)
}
