//! Configuration errors

use super::CfgMetaError;

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> CfgMetaError {
    CfgMetaError::ConfigInvalid {
        message: message.into(),
    }
}
