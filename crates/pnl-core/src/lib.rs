//! # PnL Core
//!
//! PnL 트래커 전반에서 사용되는 공용 도메인 타입을 제공합니다:
//! - 스냅샷 (1회 관측: 계좌 가치 + 최종 체결가)
//! - 일 단위 append 전용 레저 파일 계약
//! - UTC+9 고정 시간대 헬퍼
//! - 로깅 인프라

pub mod ledger;
pub mod logging;
pub mod snapshot;
pub mod time;

pub use ledger::{Ledger, LedgerError, LedgerResult, LEDGER_HEADER};
pub use logging::{init_logging, LogConfig, LogFormat};
pub use snapshot::{round2, Snapshot};
