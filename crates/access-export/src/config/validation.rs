//! Configuration validation.

use super::Config;
use crate::core::identifier::validate_identifier;
use crate::error::{ExportError, Result};
use crate::registry;
use tracing::warn;

/// Validate the configuration.
pub fn validate(config: &Config) -> Result<()> {
    if config.target.path.as_os_str().is_empty() {
        return Err(ExportError::Config("target.path is required".into()));
    }
    if config.target.driver.trim().is_empty() {
        return Err(ExportError::Config("target.driver cannot be empty".into()));
    }

    if config.exports.is_empty() {
        return Err(ExportError::Config(
            "at least one entry under exports is required".into(),
        ));
    }

    for (i, export) in config.exports.iter().enumerate() {
        if export.source.as_os_str().is_empty() {
            return Err(ExportError::Config(format!(
                "exports[{}].source is required",
                i
            )));
        }
        validate_identifier(&export.table).map_err(|e| {
            ExportError::Config(format!("exports[{}].table: {}", i, e))
        })?;
        if export.delimiter.token().is_empty() {
            return Err(ExportError::Config(format!(
                "exports[{}].delimiter cannot be empty",
                i
            )));
        }
        if !registry::encodings().any(|name| name == export.encoding) {
            warn!(
                "exports[{}].encoding {:?} is not recognized; the descriptor will use UTF-8",
                i, export.encoding
            );
        }
        export.types.validate()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExportConfig, TargetConfig};
    use crate::core::{Delimiter, TypeMap};

    fn valid_config() -> Config {
        Config {
            target: TargetConfig::new("out.accdb"),
            exports: vec![ExportConfig {
                source: "people.csv".into(),
                table: "People".to_string(),
                delimiter: Delimiter::comma(),
                encoding: "UTF-8".to_string(),
                append: false,
                overwrite: false,
                types: TypeMap::new(),
                columns: None,
            }],
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_missing_target_path() {
        let mut config = valid_config();
        config.target.path = "".into();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_no_exports() {
        let mut config = valid_config();
        config.exports.clear();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_table_name() {
        let mut config = valid_config();
        config.exports[0].table = String::new();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("exports[0].table"));
    }

    #[test]
    fn test_bad_type_token() {
        let mut config = valid_config();
        config.exports[0].types = TypeMap::new().with("Age", "integer");
        assert!(matches!(
            validate(&config),
            Err(ExportError::DataTypeNotFound(_))
        ));
    }
}
