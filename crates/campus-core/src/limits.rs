//! Input validation limits for building codes, names and connector labels

use thiserror::Error;

/// Maximum length for a building code (16 chars)
pub const MAX_BUILDING_CODE_LEN: usize = 16;

/// Maximum length for a building display name (256 chars)
pub const MAX_BUILDING_NAME_LEN: usize = 256;

/// Maximum length for a connector type label (64 chars)
pub const MAX_CONNECTOR_LEN: usize = 64;

/// Validation error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Building code cannot be empty")]
    EmptyBuildingCode,

    #[error("Building code contains whitespace: {0:?}")]
    WhitespaceInBuildingCode(String),

    #[error("Building code too long: {len} chars (max {max})")]
    BuildingCodeTooLong { len: usize, max: usize },

    #[error("Building name cannot be empty")]
    EmptyBuildingName,

    #[error("Building name too long: {len} chars (max {max})")]
    BuildingNameTooLong { len: usize, max: usize },

    #[error("Connector type cannot be empty")]
    EmptyConnector,

    #[error("Connector type contains whitespace: {0:?}")]
    WhitespaceInConnector(String),

    #[error("Connector type too long: {len} chars (max {max})")]
    ConnectorTooLong { len: usize, max: usize },
}

/// Validate a building code
pub fn validate_building_code(code: &str) -> Result<(), ValidationError> {
    if code.is_empty() {
        return Err(ValidationError::EmptyBuildingCode);
    }
    if code.chars().any(char::is_whitespace) {
        return Err(ValidationError::WhitespaceInBuildingCode(code.to_string()));
    }
    let len = code.chars().count();
    if len > MAX_BUILDING_CODE_LEN {
        return Err(ValidationError::BuildingCodeTooLong {
            len,
            max: MAX_BUILDING_CODE_LEN,
        });
    }
    Ok(())
}

/// Validate a building display name
pub fn validate_building_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyBuildingName);
    }
    let len = name.chars().count();
    if len > MAX_BUILDING_NAME_LEN {
        return Err(ValidationError::BuildingNameTooLong {
            len,
            max: MAX_BUILDING_NAME_LEN,
        });
    }
    Ok(())
}

/// Validate a connector type label
pub fn validate_connector(connector: &str) -> Result<(), ValidationError> {
    if connector.is_empty() {
        return Err(ValidationError::EmptyConnector);
    }
    if connector.chars().any(char::is_whitespace) {
        return Err(ValidationError::WhitespaceInConnector(connector.to_string()));
    }
    let len = connector.chars().count();
    if len > MAX_CONNECTOR_LEN {
        return Err(ValidationError::ConnectorTooLong {
            len,
            max: MAX_CONNECTOR_LEN,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_building_code() {
        assert!(validate_building_code("MC").is_ok());
        assert_eq!(
            validate_building_code(""),
            Err(ValidationError::EmptyBuildingCode)
        );
        assert!(validate_building_code("M C").is_err());
        assert!(validate_building_code(&"X".repeat(17)).is_err());
    }

    #[test]
    fn test_validate_building_name() {
        assert!(validate_building_name("Mathematics and Computer").is_ok());
        assert!(validate_building_name("   ").is_err());
        assert!(validate_building_name(&"x".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_connector() {
        assert!(validate_connector("tunnel").is_ok());
        assert!(validate_connector("").is_err());
        assert!(validate_connector("bridge way").is_err());
    }
}
