use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotesIndexError {
    #[error("Root directory does not exist: {path}")]
    RootNotFound { path: PathBuf },

    #[error("Required resource not found: {path} ({source})")]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Note file is empty (no title line): {path}")]
    EmptyNote { path: PathBuf },

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NotesIndexError>;

impl NotesIndexError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ResourceNotFound { .. } => 2,
            Self::EmptyNote { .. } => 3,
            Self::ConfigParse { .. } => 4,
            Self::RootNotFound { .. } => 5,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_kind() {
        let empty = NotesIndexError::EmptyNote {
            path: PathBuf::from("notes/a.md"),
        };
        let resource = NotesIndexError::ResourceNotFound {
            path: PathBuf::from(".notes/header.md"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let io = NotesIndexError::Io(std::io::Error::from(std::io::ErrorKind::Other));

        assert_eq!(resource.exit_code(), 2);
        assert_eq!(empty.exit_code(), 3);
        assert_eq!(io.exit_code(), 1);
    }

    #[test]
    fn resource_error_names_path() {
        let err = NotesIndexError::ResourceNotFound {
            path: PathBuf::from(".notes/footer.md"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains(".notes/footer.md"));
    }
}
