//! Error types for tempshift operations
//!
//! Every error here is fatal for the current run. The batch converter stops at
//! the first failure and leaves already written outputs on disk.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tempshift operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors raised while converting an image to its color temperature variants
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Output directory could not be created
    #[error("Failed to create output directory {}: {source}", .path.display())]
    Configuration {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input path is missing, empty or not a decodable image
    #[error("Failed to decode image {}: {message}", .path.display())]
    Decode {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<image::ImageError>,
    },

    /// Encoding or writing one output file failed
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: WriteFailure,
    },

    /// A requested temperature has no entry in the Kelvin table
    #[error("Unknown temperature: {0}K")]
    UnknownTemperature(u32),

    /// Configuration file could not be read or parsed
    #[error("Invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

/// Underlying cause of a [`ConvertError::Write`]
#[derive(Error, Debug)]
pub enum WriteFailure {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Encode(#[from] image::ImageError),
}

impl ConvertError {
    /// Create a decode error that wraps an `image` crate failure
    pub fn decode(
        path: impl Into<PathBuf>,
        message: impl Into<String>,
        source: image::ImageError,
    ) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a decode error without an underlying library error
    pub fn invalid_input(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a write error for the given output path
    pub fn write(path: impl Into<PathBuf>, source: impl Into<WriteFailure>) -> Self {
        Self::Write {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Short label for the error category, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            ConvertError::Configuration { .. } => "configuration",
            ConvertError::Decode { .. } => "decode",
            ConvertError::Write { .. } => "write",
            ConvertError::UnknownTemperature(_) => "temperature",
            ConvertError::Config { .. } => "config",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_kinds() {
        let err = ConvertError::invalid_input("", "empty path");
        assert_eq!(err.kind(), "decode");

        let err = ConvertError::Configuration {
            path: PathBuf::from("/out"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(err.kind(), "configuration");

        let err = ConvertError::write(
            "/out/a_temp1000.jpg",
            std::io::Error::from(std::io::ErrorKind::Other),
        );
        assert_eq!(err.kind(), "write");

        assert_eq!(ConvertError::UnknownTemperature(1234).kind(), "temperature");
    }

    #[test]
    fn test_error_messages_name_the_path() {
        let err = ConvertError::invalid_input("photos/in.png", "file not found");
        let msg = err.to_string();
        assert!(msg.contains("photos/in.png"), "{}", msg);
        assert!(msg.contains("file not found"), "{}", msg);

        let err = ConvertError::UnknownTemperature(1234);
        assert_eq!(err.to_string(), "Unknown temperature: 1234K");
    }

    #[test]
    fn test_write_error_keeps_source() {
        let err = ConvertError::write(
            "out/x.jpg",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.source().is_some());
        assert!(err.to_string().contains("denied"));
    }
}
