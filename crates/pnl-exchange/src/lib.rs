//! 거래소 연결.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - `Exchange` trait: Collector가 사용하는 통합 거래소 인터페이스
//! - Bybit v5 REST 커넥터 (서명된 잔고 조회 + 공개 시세 조회)
//! - 거래소 에러 타입

pub mod connector;
pub mod error;
pub mod traits;

pub use connector::{BybitClient, BybitConfig};
pub use error::*;
pub use traits::*;
