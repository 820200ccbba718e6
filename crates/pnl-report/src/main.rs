//! 리포트 렌더링 배치 CLI.
//!
//! 인자를 생략하면 오늘(UTC+9) 날짜의 레저를 렌더링합니다.

use chrono::{Datelike, NaiveDate};
use clap::Parser;
use pnl_core::{init_logging, LogConfig};
use pnl_notification::{WebhookConfig, WebhookSender};
use pnl_report::{run_and_deliver, ReportConfig};

#[derive(Parser)]
#[command(name = "pnl-report")]
#[command(about = "Render the daily PnL ledger as a two-panel chart", long_about = None)]
#[command(version)]
struct Cli {
    /// 대상 연도 (생략 시 오늘)
    year: Option<i32>,

    /// 대상 월 (생략 시 오늘)
    month: Option<u32>,

    /// 대상 일 (생략 시 오늘)
    day: Option<u32>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(LogConfig::from_env().with_level(cli.log_level.clone()))
        .map_err(|e| anyhow::anyhow!("로깅 초기화 실패: {}", e))?;

    let config = ReportConfig::from_env();
    tracing::debug!(?config, "설정 로드 완료");

    let today = pnl_core::time::now_local().date_naive();
    let year = cli.year.unwrap_or_else(|| today.year());
    let month = cli.month.unwrap_or_else(|| today.month());
    let day = cli.day.unwrap_or_else(|| today.day());
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| anyhow::anyhow!("잘못된 날짜: {}-{}-{}", year, month, day))?;

    let sender = config
        .webhook_url
        .as_ref()
        .map(|url| WebhookSender::new(WebhookConfig::new(url.clone())));
    if sender.is_none() {
        tracing::debug!("웹훅 미설정, 전송 생략");
    }

    let path = run_and_deliver(&config, date, sender.as_ref()).await?;
    tracing::info!(path = %path.display(), "리포트 완료");

    Ok(())
}
