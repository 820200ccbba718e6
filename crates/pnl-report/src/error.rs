//! 에러 타입 정의.

use pnl_core::LedgerError;
use pnl_notification::NotifyError;
use thiserror::Error;

/// Renderer 에러 타입.
#[derive(Debug, Error)]
pub enum ReportError {
    /// 레저 파일 에러 (없음/빈 파일 포함)
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// 차트 렌더링 에러
    #[error("Chart rendering error: {0}")]
    Chart(String),

    /// 웹훅 전송 에러
    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),
}

/// Result 타입 별칭.
pub type Result<T> = std::result::Result<T, ReportError>;
