//! plotters를 사용한 2패널 차트 렌더링.
//!
//! 위 패널은 가격, 아래 패널은 당일 첫 샘플 대비 PnL 변화.
//! 두 패널 모두 x축은 행 인덱스, 양 축에 옅은 회색 격자를 그립니다.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

use crate::error::{ReportError, Result};
use crate::series::DaySeries;

/// 차트 비트맵 크기 (px).
const CHART_SIZE: (u32, u32) = (1000, 400);
/// 격자선 색.
const GRID_GRAY: RGBColor = RGBColor(200, 200, 200);

/// 시계열을 2패널 차트로 렌더링해 `path`에 PNG로 저장합니다.
///
/// 같은 경로의 기존 아티팩트는 덮어씁니다.
pub fn render_chart(series: &DaySeries, title: &str, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(to_chart_error)?;

    let root = root
        .titled(title, ("sans-serif", 20))
        .map_err(to_chart_error)?;
    let (upper, lower) = root.split_vertically(180);

    draw_panel(&upper, &series.price, &BLUE)?;
    draw_panel(&lower, &series.pnl_delta, &RED)?;

    root.present().map_err(to_chart_error)?;
    debug!(path = %path.display(), samples = series.len(), "차트 렌더링 완료");
    Ok(())
}

/// 한 패널에 선 그래프와 격자를 그립니다.
fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    values: &[f64],
    color: &RGBColor,
) -> Result<()> {
    let x_max = values.len().saturating_sub(1).max(1) as i32;
    let (y_min, y_max) = padded_range(values);

    let mut chart = ChartBuilder::on(area)
        .margin(8)
        .x_label_area_size(22)
        .y_label_area_size(60)
        .build_cartesian_2d(0..x_max, y_min..y_max)
        .map_err(|e| ReportError::Chart(e.to_string()))?;

    chart
        .configure_mesh()
        .light_line_style(&GRID_GRAY)
        .x_labels(10)
        .y_labels(4)
        .label_style(("sans-serif", 12))
        .draw()
        .map_err(|e| ReportError::Chart(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(
            values.iter().enumerate().map(|(i, v)| (i as i32, *v)),
            color,
        ))
        .map_err(|e| ReportError::Chart(e.to_string()))?;

    Ok(())
}

/// y축 범위. 값이 하나뿐이거나 변화가 없으면 ±1로 벌립니다.
fn padded_range(values: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(*v);
        max = max.max(*v);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if (max - min).abs() < f64::EPSILON {
        (min - 1.0, max + 1.0)
    } else {
        let pad = (max - min) * 0.05;
        (min - pad, max + pad)
    }
}

fn to_chart_error<E: std::error::Error>(e: E) -> ReportError {
    ReportError::Chart(e.to_string())
}
