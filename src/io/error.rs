//! Error types for grid lookups, profile resolution and file operations
//!
//! Rejected insertions and removals are ordinary boolean outcomes and never
//! show up here.

use crate::math::Cell;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all grid operations
#[derive(Debug)]
pub enum GridError {
    /// Lookup on a cell that holds no element
    InvalidPosition {
        /// The empty cell
        position: Cell,
    },

    /// Caller-provided value failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Resolver has no profile under the given reference
    UnknownProfile {
        /// Reference that could not be resolved
        reference: String,
    },

    /// Restoring a snapshot stopped at a record whose profile failed to
    /// resolve
    ///
    /// Records before `index` were already applied.
    ProfileResolution {
        /// Position of the failing record in the snapshot
        index: usize,
        /// Profile reference of the failing record
        reference: String,
        /// Error reported by the resolver
        source: Box<GridError>,
    },

    /// JSON encoding or decoding failed
    Serialization {
        /// Underlying serde error
        source: serde_json::Error,
    },

    /// Failed to save a rendered image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The async runtime driving a restore could not be started
    AsyncRuntime {
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPosition { position } => {
                write!(f, "No element at position {position}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::UnknownProfile { reference } => {
                write!(f, "Unknown profile reference '{reference}'")
            }
            Self::ProfileResolution {
                index,
                reference,
                source,
            } => {
                write!(
                    f,
                    "Failed to resolve profile '{reference}' for record {index}: {source}"
                )
            }
            Self::Serialization { source } => {
                write!(f, "Serialization error: {source}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::AsyncRuntime { source } => {
                write!(f, "Failed to start async runtime: {source}")
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ProfileResolution { source, .. } => Some(&**source),
            Self::Serialization { source } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } | Self::AsyncRuntime { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for `operation` on `path`
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> GridError {
    GridError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
