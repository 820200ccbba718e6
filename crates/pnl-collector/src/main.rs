//! 스냅샷 수집 배치 CLI.
//!
//! 외부 스케줄러(cron 등)가 1분 주기로 실행하는 것을 가정합니다.

use clap::Parser;
use pnl_collector::{collect_once, CollectorConfig, SampleOutcome};
use pnl_core::{init_logging, Ledger, LogConfig};
use pnl_exchange::BybitClient;

#[derive(Parser)]
#[command(name = "pnl-collector")]
#[command(about = "Append one PnL snapshot to the daily ledger", long_about = None)]
#[command(version)]
struct Cli {
    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(LogConfig::from_env().with_level(cli.log_level.clone()))
        .map_err(|e| anyhow::anyhow!("로깅 초기화 실패: {}", e))?;

    let config = CollectorConfig::from_env();
    tracing::debug!(?config, "설정 로드 완료");

    let client = BybitClient::from_env().ok_or_else(|| {
        anyhow::anyhow!("BYBIT_API_KEY / BYBIT_API_SECRET 환경변수가 필요합니다")
    })?;

    let ledger = Ledger::new(&config.data_dir, &config.exchange_name, &config.bot_name);

    match collect_once(&client, &config, &ledger).await? {
        SampleOutcome::Collected(snapshot) => {
            tracing::info!(pnl = snapshot.pnl, last_price = snapshot.last_price, "수집 완료");
        }
        SampleOutcome::Skipped => {
            tracing::info!("거래소 논리적 실패, 이번 실행은 기록 없이 종료");
        }
    }

    Ok(())
}
