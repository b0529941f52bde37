use thiserror::Error;

/// Every failure the catalog can report.
///
/// Lookups that may miss have a null-object variant as well (see
/// [`crate::null_object::UserDirectory::get_user`]); `RecordNotFound` is only
/// returned by the strict lookup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    #[error("nothing to undo: command history is empty")]
    EmptyHistory,

    #[error("no record with id {id}")]
    RecordNotFound { id: i64 },

    #[error("divisor must be finite and non-zero")]
    InvalidDivisor,

    #[error("factor must be finite and non-zero: the command would have no inverse")]
    InvalidFactor,

    #[error("operand must be finite")]
    InvalidOperand,

    #[error("missing required field: '{field}'")]
    MissingField { field: String },

    #[error("invalid user options: {0}")]
    InvalidOptions(String),

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl PatternError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn transport(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Transport {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

impl From<url::ParseError> for PatternError {
    fn from(err: url::ParseError) -> Self {
        PatternError::InvalidUrl(err.to_string())
    }
}

impl From<serde_json::Error> for PatternError {
    fn from(err: serde_json::Error) -> Self {
        PatternError::Decode(err.to_string())
    }
}

impl From<toml::de::Error> for PatternError {
    fn from(err: toml::de::Error) -> Self {
        PatternError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        assert_eq!(
            PatternError::missing_field("name").to_string(),
            "missing required field: 'name'"
        );
        assert_eq!(
            PatternError::RecordNotFound { id: 3 }.to_string(),
            "no record with id 3"
        );
    }

    #[test]
    fn test_json_error_converts_to_decode() {
        let err: PatternError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, PatternError::Decode(_)));
    }
}
