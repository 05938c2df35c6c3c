//! Error types for storyboard uploads

use std::path::PathBuf;

use thiserror::Error;

/// Why a selected file did not become an image entry.
///
/// None of these are fatal. A failed file is reported next to the decoded
/// siblings of the same selection and the list is left as it was.
#[derive(Error, Debug)]
pub enum UploadError {
    /// The file could not be read from disk
    #[error("Could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but holds no bytes
    #[error("{} is empty", .path.display())]
    Empty { path: PathBuf },

    /// The bytes are not a recognised image format
    #[error("{} is not a supported image", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// The file is over the configured size limit
    #[error("{} is {size} bytes, limit is {limit}", .path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    /// A string that should have been a base64 data URI
    #[error("Malformed data URI: {0}")]
    MalformedDataUri(String),

    /// The read task panicked or was aborted
    #[error("Read task failed: {0}")]
    Task(String),
}

impl UploadError {
    /// The file this error refers to, when there is one
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            UploadError::Read { path, .. }
            | UploadError::Empty { path }
            | UploadError::UnsupportedFormat { path }
            | UploadError::TooLarge { path, .. } => Some(path),
            UploadError::MalformedDataUri(_) | UploadError::Task(_) => None,
        }
    }
}

/// Result type alias using UploadError
pub type UploadResult<T> = Result<T, UploadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UploadError::Empty {
            path: PathBuf::from("blank.png"),
        };
        assert_eq!(format!("{}", err), "blank.png is empty");

        let err = UploadError::TooLarge {
            path: PathBuf::from("huge.jpg"),
            size: 10,
            limit: 5,
        };
        assert_eq!(format!("{}", err), "huge.jpg is 10 bytes, limit is 5");
    }

    #[test]
    fn test_error_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = UploadError::Read {
            path: PathBuf::from("missing.png"),
            source: io_err,
        };
        assert_eq!(err.path(), Some(std::path::Path::new("missing.png")));
        assert!(UploadError::Task("join".into()).path().is_none());
    }
}
