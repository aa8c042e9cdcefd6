//! File system errors

use super::CfgMetaError;

/// Creates a file not found error
pub fn not_found(path: impl Into<String>) -> CfgMetaError {
    CfgMetaError::FileNotFound { path: path.into() }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> CfgMetaError {
    CfgMetaError::IoError {
        message: message.into(),
    }
}

/// Maps an IO failure on `path`, keeping "not found" distinct from other IO errors
pub fn from_io(path: &std::path::Path, err: &std::io::Error) -> CfgMetaError {
    if err.kind() == std::io::ErrorKind::NotFound {
        not_found(path.display().to_string())
    } else {
        io_error(format!("{}: {}", path.display(), err))
    }
}
