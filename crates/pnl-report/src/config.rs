//! 환경변수 기반 설정 모듈.

/// Renderer 전체 설정.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// 거래소 라벨 (레저/차트 파일명과 제목에 사용)
    pub exchange_name: String,
    /// 봇(전략) 라벨
    pub bot_name: String,
    /// 레저 파일 디렉토리
    pub data_dir: String,
    /// 차트 이미지 출력 디렉토리
    pub output_dir: String,
    /// 웹훅 URL (없으면 전송 생략)
    pub webhook_url: Option<String>,
}

impl ReportConfig {
    /// 환경변수에서 설정 로드.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let webhook_url = std::env::var("PNL_WEBHOOK_URL")
            .ok()
            .filter(|url| !url.is_empty());

        Self {
            exchange_name: env_var_or("PNL_EXCHANGE", "bybit"),
            bot_name: env_var_or("PNL_BOT", "vix"),
            data_dir: env_var_or("PNL_DATA_DIR", "."),
            output_dir: env_var_or("PNL_OUTPUT_DIR", "."),
            webhook_url,
        }
    }
}

/// 환경변수에서 문자열 값 읽기 (없으면 기본값 사용).
fn env_var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
