//! 에러 타입

use std::path::PathBuf;
use thiserror::Error;

/// 공통 에러
#[derive(Error, Debug)]
pub enum Error {
    /// 파일이 JSON 으로 읽히지 않거나 형태가 맞지 않음
    #[error("Malformed input {path}: {reason}")]
    MalformedInput { path: String, reason: String },

    /// 파일 안의 개별 원소가 오브젝트가 아님
    #[error("Record #{index} has invalid shape: {reason}")]
    RecordShape { index: usize, reason: String },

    #[error("Invalid matcher config: {0}")]
    InvalidConfig(String),

    #[error("IO error ({path}): {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::MalformedInput {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Result 별칭
pub type Result<T> = std::result::Result<T, Error>;
