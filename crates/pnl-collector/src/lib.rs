//! 스냅샷 수집기.
//!
//! 외부 스케줄러가 짧은 주기로 실행하는 run-to-completion 배치입니다.
//! 한 번의 실행은 거래소에서 잔고와 최종 체결가를 얻어 스냅샷 1건을
//! 만들고, 그 날짜의 레저 파일에 정확히 한 행을 append 하거나
//! (거래소 논리적 실패 시) 아무것도 쓰지 않고 종료합니다.

pub mod config;
pub mod error;
pub mod sampler;

pub use config::CollectorConfig;
pub use error::{CollectorError, Result};
pub use sampler::{collect_once, SampleOutcome};
