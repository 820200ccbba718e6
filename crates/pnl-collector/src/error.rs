//! 에러 타입 정의.

use pnl_core::LedgerError;
use pnl_exchange::ExchangeError;
use thiserror::Error;

/// Collector 에러 타입.
#[derive(Debug, Error)]
pub enum CollectorError {
    /// 재시도 예산을 모두 소진한 거래소 요청 실패
    #[error("API request failed and request limit exceeded after {attempts} attempts: {source}")]
    RequestLimitExceeded {
        attempts: u32,
        source: ExchangeError,
    },

    /// 레저 파일 에러
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

/// Result 타입 별칭.
pub type Result<T> = std::result::Result<T, CollectorError>;
