//! 일 단위 PnL 리포트 렌더러.
//!
//! 외부 스케줄러가 1시간 또는 1일 주기로 실행하는 run-to-completion
//! 배치입니다. 지정한 날짜의 레저 파일을 전부 읽어 2패널 차트
//! (가격, 당일 첫 샘플 대비 PnL 변화)를 그려 저장하고, 웹훅이
//! 설정되어 있으면 이미지를 업로드합니다.
//!
//! 실행 흐름: `Load → (치명적 실패 | 진행) → Draw → Save →
//! (설정 시 전송 | 종료)`. 재시도는 어디에도 없습니다.

pub mod chart;
pub mod config;
pub mod error;
pub mod report;
pub mod series;

pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use report::{chart_title, run_and_deliver, run_report};
pub use series::DaySeries;
