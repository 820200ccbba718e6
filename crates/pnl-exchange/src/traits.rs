//! 거래소 trait 정의.

use async_trait::async_trait;

use crate::ExchangeError;

/// 거래소 작업을 위한 Result 타입.
pub type ExchangeResult<T> = Result<T, ExchangeError>;

/// 자산 하나의 USD 환산 잔고.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceEntry {
    /// 자산 이름 (예: "BTC", "USDT")
    pub coin: String,
    /// USD 환산 가치
    pub usd_value: f64,
}

/// 잔고 조회 결과.
///
/// `success`는 거래소가 응답 본문에서 보고하는 성공 지표입니다.
/// 전송은 성공했지만 `success`가 false인 경우는 논리적 실패로,
/// 호출자가 의도를 보고 분기할 수 있도록 에러와 구분합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountBalance {
    /// 거래소가 보고한 성공 지표
    pub success: bool,
    /// 잔고 목록 (논리적 실패 시 비어 있음)
    pub entries: Vec<BalanceEntry>,
}

impl AccountBalance {
    /// 전체 USD 환산 가치 합계. 빈 목록이면 0.
    pub fn total_usd_value(&self) -> f64 {
        self.entries.iter().map(|e| e.usd_value).sum()
    }
}

/// Collector가 사용하는 통합 거래소 인터페이스.
///
/// 상위 수준 클라이언트든 원시 REST 바인딩이든 이 trait 뒤에서는
/// 동일하게 동작해야 합니다. 테스트에서는 가짜 구현으로 대체합니다.
#[async_trait]
pub trait Exchange: Send + Sync {
    /// 거래소 이름 반환.
    fn name(&self) -> &str;

    /// 계좌 잔고 조회 (인증 필요).
    async fn fetch_balance(&self) -> ExchangeResult<AccountBalance>;

    /// 심볼의 최종 체결가 조회.
    async fn fetch_last_price(&self, symbol: &str) -> ExchangeResult<f64>;
}
