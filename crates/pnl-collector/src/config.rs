//! 환경변수 기반 설정 모듈.

use std::time::Duration;

/// Collector 전체 설정.
///
/// 거래소 자격증명은 여기가 아니라 `BybitConfig::from_env`가 읽습니다.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// 거래소 라벨 (레저 파일명에 사용)
    pub exchange_name: String,
    /// 봇(전략) 라벨 (레저 파일명에 사용)
    pub bot_name: String,
    /// 시세를 조회할 종목 심볼
    pub symbol: String,
    /// 레저 파일 디렉토리
    pub data_dir: String,
    /// 재시도 예산 (허용하는 실패 횟수)
    pub request_limit: u32,
    /// 재시도 간 딜레이 (밀리초)
    pub retry_delay_ms: u64,
}

impl CollectorConfig {
    /// 환경변수에서 설정 로드.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            exchange_name: env_var_or("PNL_EXCHANGE", "bybit"),
            bot_name: env_var_or("PNL_BOT", "vix"),
            symbol: env_var_or("PNL_SYMBOL", "ETHUSDT"),
            data_dir: env_var_or("PNL_DATA_DIR", "."),
            request_limit: env_var_parse("PNL_REQUEST_LIMIT", 5),
            retry_delay_ms: env_var_parse("PNL_RETRY_DELAY_MS", 1000),
        }
    }

    /// 재시도 간 딜레이를 Duration으로 반환.
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

/// 환경변수에서 문자열 값 읽기 (없으면 기본값 사용).
fn env_var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// 환경변수에서 값을 파싱 (실패 시 기본값 사용).
fn env_var_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
