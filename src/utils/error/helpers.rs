//! Helper functions for creating specific error types

use super::types::AdminError;

/// Helper functions for creating specific errors
impl AdminError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn auth<S: Into<String>>(message: S) -> Self {
        Self::Auth(message.into())
    }

    pub fn authorization<S: Into<String>>(message: S) -> Self {
        Self::Authorization(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Whether the error means the caller is not allowed in, as opposed to a
    /// broken setup
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::Auth(_) | Self::Authorization(_))
    }
}
