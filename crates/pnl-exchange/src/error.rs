//! 거래소 에러 타입.

use thiserror::Error;

/// 거래소 관련 에러.
///
/// 전송 계층 실패만 에러로 표현합니다. 거래소가 응답 본문에서
/// 실패를 보고하는 논리적 실패는 에러가 아니라
/// [`crate::AccountBalance::success`]로 전달됩니다.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// 네트워크/연결 에러
    #[error("Network error: {0}")]
    NetworkError(String),

    /// 인증/권한 에러
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 요청 한도 초과
    #[error("Rate limit exceeded")]
    RateLimited,

    /// API 에러 코드
    #[error("API error {code}: {message}")]
    ApiError { code: i32, message: String },

    /// 파싱/역직렬화 에러 (응답에서 기대한 필드가 없거나 형식이 다름)
    #[error("Parse error: {0}")]
    ParseError(String),

    /// 타임아웃
    #[error("Request timeout: {0}")]
    Timeout(String),
}
