//! 단일 관측(스냅샷) 타입.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::time;

/// 소수 둘째 자리 반올림.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 한 번의 수집 실행에서 관측한 계좌 가치와 최종 체결가.
///
/// 생성 이후 불변이며, 레저 파일의 데이터 행 하나와 1:1로 대응합니다.
/// `pnl`과 `last_price`는 서로 다른 API 호출에서 얻으므로 원자적이지
/// 않습니다. 그 사이의 작은 시각 차이는 허용 오차로 간주합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// epoch 초 (소수부 포함)
    pub timestamp: f64,
    /// UTC+9 로컬 시각 (`YYYY-MM-DDTHH:MM:SS`). `timestamp`에서 파생된
    /// 표기일 뿐 독립적인 기준 시각이 아님.
    pub datetime_local: String,
    /// 계좌 가치 합계 (소수 2자리 반올림)
    pub pnl: f64,
    /// 설정된 종목의 최종 체결가 (반올림하지 않음)
    pub last_price: f64,
}

impl Snapshot {
    /// 주어진 시각의 스냅샷을 생성합니다.
    ///
    /// `pnl`은 여기서 소수 2자리로 반올림됩니다. `last_price`는 받은
    /// 값을 그대로 기록합니다. 자릿수 가공은 읽는 쪽에서 합니다.
    pub fn capture(at: DateTime<FixedOffset>, pnl: f64, last_price: f64) -> Self {
        Self {
            timestamp: time::epoch_secs(&at),
            datetime_local: time::format_datetime_local(&at),
            pnl: round2(pnl),
            last_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_round2() {
        assert_eq!(round2(12.345), 12.35);
        assert_eq!(round2(12.344), 12.34);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(-1.005), -1.0);
    }

    #[test]
    fn test_capture_derives_fields() {
        let at = crate::time::local_zone()
            .with_ymd_and_hms(2026, 8, 30, 12, 34, 56)
            .unwrap();
        let snapshot = Snapshot::capture(at, 1234.5678, 100.55);

        assert_eq!(snapshot.datetime_local, "2026-08-30T12:34:56");
        assert_eq!(snapshot.pnl, 1234.57);
        assert_eq!(snapshot.last_price, 100.55);
        assert_eq!(snapshot.timestamp, at.timestamp() as f64);
    }
}
