//! 알림 전송 에러 타입.

use thiserror::Error;

/// 알림 전송 에러.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// 업로드할 파일을 읽지 못함
    #[error("Cannot read upload file: {0}")]
    Io(#[from] std::io::Error),

    /// 네트워크/전송 에러
    #[error("Webhook request failed: {0}")]
    Network(String),

    /// 웹훅이 에러 상태를 반환함
    #[error("Webhook returned status {status}: {body}")]
    Http { status: u16, body: String },
}

/// 알림 작업을 위한 Result 타입.
pub type NotifyResult<T> = Result<T, NotifyError>;
