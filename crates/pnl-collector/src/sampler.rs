//! 스냅샷 수집 실행 로직.
//!
//! 잔고 조회와 시세 조회 모두 같은 재시도 예산을 적용합니다.
//! 레저 append는 두 조회가 모두 성공한 뒤의 마지막 side effect이며,
//! 부분 행은 절대 쓰지 않습니다.

use std::future::Future;
use std::time::Duration;

use pnl_core::{round2, Ledger, Snapshot};
use pnl_exchange::{Exchange, ExchangeResult};
use tracing::{error, info, warn};

use crate::config::CollectorConfig;
use crate::error::{CollectorError, Result};

/// 한 번의 수집 실행 결과.
///
/// 전송 실패는 `Err`로, 거래소가 보고한 논리적 실패는 `Skipped`로
/// 구분됩니다. 호출자는 예외 종류가 아니라 의도를 보고 분기합니다.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleOutcome {
    /// 스냅샷 1건을 수집하고 레저에 append 완료
    Collected(Snapshot),
    /// 거래소 논리적 실패, 쓰기 없이 정상 종료
    Skipped,
}

/// 재시도 예산을 지키며 거래소 요청을 실행합니다.
///
/// 실패할 때마다 카운터를 올리고 고정 딜레이 후 처음부터 다시
/// 시도합니다. 카운터가 예산을 넘으면 마지막 에러를 담아 종료합니다.
async fn with_retry<T, F, Fut>(limit: u32, delay: Duration, mut op: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ExchangeResult<T>>,
{
    let mut failed = 0u32;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                failed += 1;
                if failed > limit {
                    error!(
                        attempts = failed,
                        error = %e,
                        "API request failed and request limit exceeded"
                    );
                    return Err(CollectorError::RequestLimitExceeded {
                        attempts: failed,
                        source: e,
                    });
                }
                warn!(attempt = failed, limit, error = %e, "거래소 요청 실패, 재시도 대기");
                tokio::time::sleep(delay).await;
            }
        }
    }
}

/// 스냅샷 1건을 수집하고 레저에 append 합니다.
///
/// 1. 잔고 조회 (재시도 예산 적용). 거래소가 논리적 실패를 보고하면
///    아무것도 쓰지 않고 `Skipped`로 종료.
/// 2. 잔고 목록의 `usd_value` 합계를 소수 2자리로 반올림해 PnL 도출
///    (빈 목록은 0).
/// 3. 시세 조회 (같은 재시도 예산 적용).
/// 4. UTC+9 현재 시각 기준으로 스냅샷을 만들어 그 날짜의 레저에 append.
pub async fn collect_once(
    exchange: &dyn Exchange,
    config: &CollectorConfig,
    ledger: &Ledger,
) -> Result<SampleOutcome> {
    let limit = config.request_limit;
    let delay = config.retry_delay();

    let balance = with_retry(limit, delay, || exchange.fetch_balance()).await?;
    if !balance.success {
        info!(exchange = exchange.name(), "거래소가 논리적 실패를 보고함, 이번 수집 건너뜀");
        return Ok(SampleOutcome::Skipped);
    }

    let pnl = round2(balance.total_usd_value());

    let last_price =
        with_retry(limit, delay, || exchange.fetch_last_price(&config.symbol)).await?;

    let now = pnl_core::time::now_local();
    let snapshot = Snapshot::capture(now, pnl, last_price);
    ledger.append(now.date_naive(), &snapshot)?;

    info!(
        pnl = snapshot.pnl,
        last_price = snapshot.last_price,
        datetime = %snapshot.datetime_local,
        "스냅샷 수집 완료"
    );
    Ok(SampleOutcome::Collected(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pnl_exchange::{AccountBalance, BalanceEntry, ExchangeError};
    use std::sync::atomic::{AtomicU32, Ordering};
    use tempfile::TempDir;

    /// 실패 횟수를 주입할 수 있는 가짜 거래소.
    struct MockExchange {
        balance: AccountBalance,
        price: f64,
        balance_failures: AtomicU32,
        price_failures: AtomicU32,
    }

    impl MockExchange {
        fn new(balance: AccountBalance, price: f64) -> Self {
            Self {
                balance,
                price,
                balance_failures: AtomicU32::new(0),
                price_failures: AtomicU32::new(0),
            }
        }

        fn failing_balance(mut self, failures: u32) -> Self {
            self.balance_failures = AtomicU32::new(failures);
            self
        }

        fn failing_price(mut self, failures: u32) -> Self {
            self.price_failures = AtomicU32::new(failures);
            self
        }
    }

    #[async_trait]
    impl Exchange for MockExchange {
        fn name(&self) -> &str {
            "mock"
        }

        async fn fetch_balance(&self) -> ExchangeResult<AccountBalance> {
            if self.balance_failures.load(Ordering::SeqCst) > 0 {
                self.balance_failures.fetch_sub(1, Ordering::SeqCst);
                return Err(ExchangeError::NetworkError("connection reset".to_string()));
            }
            Ok(self.balance.clone())
        }

        async fn fetch_last_price(&self, _symbol: &str) -> ExchangeResult<f64> {
            if self.price_failures.load(Ordering::SeqCst) > 0 {
                self.price_failures.fetch_sub(1, Ordering::SeqCst);
                return Err(ExchangeError::NetworkError("connection reset".to_string()));
            }
            Ok(self.price)
        }
    }

    fn test_balance(values: &[f64]) -> AccountBalance {
        AccountBalance {
            success: true,
            entries: values
                .iter()
                .enumerate()
                .map(|(i, v)| BalanceEntry {
                    coin: format!("C{}", i),
                    usd_value: *v,
                })
                .collect(),
        }
    }

    fn test_setup() -> (TempDir, Ledger, CollectorConfig) {
        let dir = TempDir::new().unwrap();
        let ledger = Ledger::new(dir.path(), "bybit", "vix");
        let config = CollectorConfig {
            exchange_name: "bybit".to_string(),
            bot_name: "vix".to_string(),
            symbol: "ETHUSDT".to_string(),
            data_dir: dir.path().to_string_lossy().into_owned(),
            request_limit: 5,
            retry_delay_ms: 0,
        };
        (dir, ledger, config)
    }

    #[tokio::test]
    async fn test_pnl_is_rounded_sum_of_usd_values() {
        let (_dir, ledger, config) = test_setup();
        let exchange = MockExchange::new(test_balance(&[10.004, 2.002]), 100.5);

        let outcome = collect_once(&exchange, &config, &ledger).await.unwrap();
        match outcome {
            SampleOutcome::Collected(snapshot) => {
                assert_eq!(snapshot.pnl, 12.01);
                assert_eq!(snapshot.last_price, 100.5);
            }
            other => panic!("expected Collected, got {:?}", other),
        }

        let today = pnl_core::time::now_local().date_naive();
        assert_eq!(ledger.load(today).unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_balance_sums_to_zero() {
        let (_dir, ledger, config) = test_setup();
        let exchange = MockExchange::new(test_balance(&[]), 100.5);

        match collect_once(&exchange, &config, &ledger).await.unwrap() {
            SampleOutcome::Collected(snapshot) => assert_eq!(snapshot.pnl, 0.0),
            other => panic!("expected Collected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_logical_failure_skips_without_writing() {
        let (_dir, ledger, config) = test_setup();
        let exchange = MockExchange::new(
            AccountBalance {
                success: false,
                entries: vec![],
            },
            100.5,
        );

        let outcome = collect_once(&exchange, &config, &ledger).await.unwrap();
        assert_eq!(outcome, SampleOutcome::Skipped);

        let today = pnl_core::time::now_local().date_naive();
        assert!(!ledger.path_for(today).exists());
    }

    #[tokio::test]
    async fn test_balance_retry_succeeds_within_budget() {
        let (_dir, ledger, config) = test_setup();
        // 5회 실패 후 성공: 예산(5) 이내
        let exchange = MockExchange::new(test_balance(&[1.0]), 100.5).failing_balance(5);

        let outcome = collect_once(&exchange, &config, &ledger).await.unwrap();
        assert!(matches!(outcome, SampleOutcome::Collected(_)));
    }

    #[tokio::test]
    async fn test_balance_retry_budget_exceeded() {
        let (_dir, ledger, config) = test_setup();
        // 6회 실패: 예산 초과, 레저에는 아무것도 쓰지 않음
        let exchange = MockExchange::new(test_balance(&[1.0]), 100.5).failing_balance(6);

        match collect_once(&exchange, &config, &ledger).await {
            Err(CollectorError::RequestLimitExceeded { attempts, .. }) => {
                assert_eq!(attempts, 6);
            }
            other => panic!("expected RequestLimitExceeded, got {:?}", other),
        }

        let today = pnl_core::time::now_local().date_naive();
        assert!(!ledger.path_for(today).exists());
    }

    #[tokio::test]
    async fn test_price_fetch_uses_same_retry_budget() {
        let (_dir, ledger, config) = test_setup();
        let exchange = MockExchange::new(test_balance(&[1.0]), 100.5).failing_price(2);

        let outcome = collect_once(&exchange, &config, &ledger).await.unwrap();
        assert!(matches!(outcome, SampleOutcome::Collected(_)));

        let over_budget = MockExchange::new(test_balance(&[1.0]), 100.5).failing_price(6);
        let (_dir2, ledger2, config2) = test_setup();
        assert!(matches!(
            collect_once(&over_budget, &config2, &ledger2).await,
            Err(CollectorError::RequestLimitExceeded { .. })
        ));
    }
}
