//! Helper functions for creating specific error types

use super::types::DispatchError;

/// Helper functions for creating specific errors
impl DispatchError {
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    pub fn unsupported_type<S: Into<String>>(content_type: S) -> Self {
        Self::UnsupportedType(content_type.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the caller can fix the failure by re-submitting different input
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Parse(_)
                | Self::Validation(_)
                | Self::UnsupportedType(_)
                | Self::NoAgents
                | Self::NotFound(_)
                | Self::BadRequest(_)
                | Self::Conflict(_)
        )
    }
}

impl From<csv::Error> for DispatchError {
    fn from(err: csv::Error) -> Self {
        match err.position() {
            Some(pos) => Self::Parse(format!("line {}: {}", pos.line(), err)),
            None => Self::Parse(err.to_string()),
        }
    }
}

impl From<calamine::Error> for DispatchError {
    fn from(err: calamine::Error) -> Self {
        Self::Parse(format!("unable to read spreadsheet: {}", err))
    }
}
