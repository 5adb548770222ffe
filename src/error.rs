use std::path::PathBuf;

use thiserror::Error;

use crate::classify::fetch::MAX_BATCH_LIMIT;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("invalid batch limit {0}: must be between 1 and {max}", max = MAX_BATCH_LIMIT)]
    InvalidLimit(i64),
    #[error("failed to fetch {endpoint}: status code {status}")]
    HttpStatus { endpoint: &'static str, status: u16 },
    #[error("failed to reach {endpoint}: {reason}")]
    Transport {
        endpoint: &'static str,
        reason: String,
    },
    #[error("response data missing: {0}")]
    DataMissing(String),
    #[error("credentials unusable: {0}")]
    Credentials(String),
    #[error("unsupported submission language `{0}`")]
    UnsupportedLanguage(String),
    #[error("refusing to write outside the archive store: {0}")]
    UnsafePath(String),
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ClassifierError {
    pub fn data_missing(what: impl Into<String>) -> Self {
        Self::DataMissing(what.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::HttpStatus { .. } | Self::Transport { .. })
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
