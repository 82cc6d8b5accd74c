use thiserror::Error;

/// Errors surfaced by the configuration layer and the JSON API.
///
/// The simulation engine itself never fails on "no usable data"; it returns
/// empty results instead.
#[derive(Error, Debug)]
pub enum CaddieError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: u8, expected: u8 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CaddieError {
    /// True when the caller sent something malformed (as opposed to an
    /// internal serialization failure).
    pub fn is_caller_fault(&self) -> bool {
        match self {
            CaddieError::InvalidConfig(_) => true,
            CaddieError::InvalidRequest(_) => true,
            CaddieError::UnsupportedSchema { .. } => true,
            CaddieError::Json(err) => err.is_data() || err.is_syntax() || err.is_eof(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CaddieError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_message() {
        let err = CaddieError::UnsupportedSchema { found: 3, expected: 1 };
        assert_eq!(err.to_string(), "Unsupported schema version: found 3, expected 1");
        assert!(err.is_caller_fault());
    }

    #[test]
    fn test_json_syntax_error_is_caller_fault() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err = CaddieError::from(parse.unwrap_err());
        assert!(err.is_caller_fault());
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
