//! Metadata file errors

use super::CfgMetaError;

/// Creates a metadata parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> CfgMetaError {
    CfgMetaError::MetadataParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
