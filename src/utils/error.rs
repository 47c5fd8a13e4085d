use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("成绩数据格式错误: {0}")]
    BadRecordDocument(String),

    #[error("配置错误: {0}")]
    ConfigError(String),

    #[error("IO错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serde JSON错误: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
