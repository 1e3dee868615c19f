//! Error type shared by every fsbox operation.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};

/// Errors produced by fsbox operations.
///
/// Only the first three variants are produced by fsbox itself. The rest carry
/// failures from the underlying filesystem or serialization library as-is.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input path does not exist.
    #[error("file not found: {0}")]
    NotFound(Utf8PathBuf),

    /// A structured file was empty or could not be parsed.
    #[error("malformed {path}: {message}")]
    Format { path: Utf8PathBuf, message: String },

    /// The base64 input was malformed.
    #[error("invalid base64 input: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Binary(#[from] bincode::Error),
}

impl Error {
    pub(crate) fn format<S: Into<String>>(path: &Utf8Path, message: S) -> Self {
        Self::Format {
            path: path.to_owned(),
            message: message.into(),
        }
    }

    /// Map a filesystem error, turning a missing file into [`Error::NotFound`].
    pub(crate) fn from_io(path: &Utf8Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            Self::NotFound(path.to_owned())
        } else {
            Self::Io(err)
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_maps_to_not_found() {
        let err = Error::from_io(
            Utf8Path::new("params.yaml"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "file not found: params.yaml");
    }

    #[test]
    fn other_io_errors_pass_through() {
        let err = Error::from_io(
            Utf8Path::new("params.yaml"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        match err {
            Error::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::PermissionDenied),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn format_error_display() {
        let err = Error::format(Utf8Path::new("config/config.yaml"), "file is empty");
        assert!(err.is_format());
        assert_eq!(err.to_string(), "malformed config/config.yaml: file is empty");
    }
}
