use crate::utils::error::{Result, RomanError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RomanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RomanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extensions(
    field_name: &str,
    files: &[String],
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    for file in files {
        validate_path(field_name, file)?;

        if let Some(extension) = std::path::Path::new(file)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            if !allowed_set.contains(extension) {
                return Err(RomanError::InvalidConfigValueError {
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
            return Err(RomanError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: file.clone(),
                reason: "File has no extension or invalid filename".to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RomanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(RomanError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique<T>(field_name: &str, values: &[T]) -> Result<()>
where
    T: Eq + std::hash::Hash + std::fmt::Debug,
{
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(RomanError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format!("{:?}", value),
                reason: "Value is listed more than once".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("load.output_path", "./output").is_ok());
        assert!(validate_path("load.output_path", "").is_err());
        assert!(validate_path("load.output_path", "out\0put").is_err());
    }

    #[test]
    fn test_validate_file_extensions() {
        let files = vec!["numerals.zip".to_string()];
        assert!(validate_file_extensions("load.compression.filename", &files, &["zip"]).is_ok());

        let invalid_files = vec!["numerals.tar".to_string()];
        assert!(
            validate_file_extensions("load.compression.filename", &invalid_files, &["zip"])
                .is_err()
        );

        let no_extension = vec!["numerals".to_string()];
        assert!(
            validate_file_extensions("load.compression.filename", &no_extension, &["zip"])
                .is_err()
        );
    }

    #[test]
    fn test_validate_non_empty() {
        assert!(validate_non_empty_string("job.name", "nightly").is_ok());
        assert!(validate_non_empty_string("job.name", "   ").is_err());
        assert!(validate_non_empty_list::<u8>("load.output_formats", &[]).is_err());
        assert!(validate_non_empty_list("load.output_formats", &[1]).is_ok());
    }

    #[test]
    fn test_validate_unique() {
        assert!(validate_unique("load.output_formats", &["csv", "json"]).is_ok());
        match validate_unique("load.output_formats", &["csv", "json", "csv"]) {
            Err(RomanError::InvalidConfigValueError { field, value, .. }) => {
                assert_eq!(field, "load.output_formats");
                assert_eq!(value, "\"csv\"");
            }
            other => panic!("expected InvalidConfigValueError, got {:?}", other),
        }
    }
}
