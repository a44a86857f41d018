use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("설정 오류: {0}")]
    Config(String),

    #[error("파일을 찾을 수 없습니다: {0}")]
    FileNotFound(String),

    #[error("입력 텍스트가 비어 있습니다: {0}")]
    EmptyInput(String),

    #[error("LLM 호출 오류: {0}")]
    Http(String),

    #[error("LLM 응답 해석 실패: {0}")]
    ApiParse(String),

    #[error("내보내기 오류: {0}")]
    Export(String),

    #[error("JSON 해석 오류: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] exhibit_recon_common::Error),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Http(format!("시간 초과: {}", err))
        } else if err.is_decode() {
            AppError::ApiParse(err.to_string())
        } else {
            AppError::Http(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
