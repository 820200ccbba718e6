//! 레저 행에서 차트용 시계열 계산.

use pnl_core::Snapshot;

/// 하루치 레저에서 파생한 두 시계열.
///
/// 두 시계열 모두 x축은 행 인덱스(순서)입니다. 샘플 간 실제 경과
/// 시간은 반영하지 않으며, 샘플링 간격이 불규칙해도 시각적 간격은
/// 균일합니다. 이는 관측 가능한 동작이므로 그대로 유지합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySeries {
    /// 행 순서대로의 최종 체결가
    pub price: Vec<f64>,
    /// 당일 첫 샘플 대비 PnL 변화 (첫 값은 항상 0)
    pub pnl_delta: Vec<f64>,
}

impl DaySeries {
    /// 스냅샷 목록에서 시계열을 계산합니다.
    ///
    /// `pnl_delta[i] = pnl[i] - pnl[0]`: 절대 계좌 가치가 아니라
    /// 당일 장중 변화를 보여줍니다.
    pub fn from_snapshots(snapshots: &[Snapshot]) -> Self {
        let price = snapshots.iter().map(|s| s.last_price).collect();
        let first_pnl = snapshots.first().map(|s| s.pnl).unwrap_or(0.0);
        let pnl_delta = snapshots.iter().map(|s| s.pnl - first_pnl).collect();

        Self { price, pnl_delta }
    }

    /// 샘플 수.
    pub fn len(&self) -> usize {
        self.price.len()
    }

    /// 샘플이 없는지 여부.
    pub fn is_empty(&self) -> bool {
        self.price.is_empty()
    }
}
