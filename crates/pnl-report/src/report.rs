//! 리포트 실행 흐름.

use std::path::PathBuf;

use chrono::NaiveDate;
use pnl_core::{time, Ledger};
use pnl_notification::WebhookSender;
use tracing::{error, info};

use crate::chart;
use crate::config::ReportConfig;
use crate::error::Result;
use crate::series::DaySeries;

/// 차트 제목 (`{exchange} {bot} PnL {YYYY/MM/DD}`).
pub fn chart_title(config: &ReportConfig, date: NaiveDate) -> String {
    format!(
        "{} {} PnL {}",
        config.exchange_name,
        config.bot_name,
        time::title_date(date)
    )
}

/// 지정한 날짜의 레저를 차트 아티팩트로 렌더링합니다.
///
/// 레저가 없거나 비어 있으면 아티팩트를 만들지 않고 에러를
/// 전파합니다. 성공 시 저장된 이미지 경로를 반환합니다.
pub fn run_report(config: &ReportConfig, date: NaiveDate) -> Result<PathBuf> {
    let ledger = Ledger::new(&config.data_dir, &config.exchange_name, &config.bot_name);
    let snapshots = ledger.load(date)?;
    let series = DaySeries::from_snapshots(&snapshots);

    let title = chart_title(config, date);
    let output_path =
        PathBuf::from(&config.output_dir).join(format!("{}.png", ledger.file_stem(date)));

    chart::render_chart(&series, &title, &output_path)?;
    info!(path = %output_path.display(), samples = series.len(), "차트 저장 완료");
    Ok(output_path)
}

/// 렌더링 후, 전송기가 있으면 저장된 이미지를 웹훅으로 업로드합니다.
///
/// 전송기가 없으면 업로드는 no-op입니다. 전송 실패는 복구하지 않고
/// 로그 후 전파합니다.
pub async fn run_and_deliver(
    config: &ReportConfig,
    date: NaiveDate,
    sender: Option<&WebhookSender>,
) -> Result<PathBuf> {
    let output_path = run_report(config, date)?;

    if let Some(sender) = sender {
        if let Err(e) = sender.send_file(&output_path).await {
            error!(error = %e, "차트 웹훅 전송 실패");
            return Err(e.into());
        }
    }

    Ok(output_path)
}
