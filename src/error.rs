use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, KindlefyError>;

#[derive(Error, Debug)]
pub enum KindlefyError {
    #[error("{0}")]
    Usage(String),

    #[error("Cannot access {}: {source}", path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KindlefyError {
    /// Process exit status for this error. A missing argument is 1, anything
    /// that happened after the scan started is 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 1,
            _ => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_exits_with_one() {
        let err = KindlefyError::Usage("Please provide a file or directory.".into());
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "Please provide a file or directory.");
    }

    #[test]
    fn io_failures_exit_with_two() {
        let err = KindlefyError::Path {
            path: PathBuf::from("missing"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().starts_with("Cannot access missing"));
    }
}
