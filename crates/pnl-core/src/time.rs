//! UTC+9 고정 시간대 헬퍼.
//!
//! 레저 파일명, 로컬 시각 표기, 차트 제목의 날짜는 모두 이 모듈의
//! 고정 오프셋 기준으로 파생됩니다.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// 이 시스템의 모든 날짜/시각 파생에 사용하는 고정 오프셋 (UTC+9).
pub fn local_zone() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).expect("UTC+9 오프셋 생성 실패")
}

/// 현재 시각을 UTC+9 기준으로 반환.
pub fn now_local() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&local_zone())
}

/// epoch 초 (소수부 포함).
pub fn epoch_secs(at: &DateTime<FixedOffset>) -> f64 {
    at.timestamp_micros() as f64 / 1_000_000.0
}

/// 사람이 읽는 로컬 시각 표기 (`YYYY-MM-DDTHH:MM:SS`).
pub fn format_datetime_local(at: &DateTime<FixedOffset>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// 파일명에 쓰는 날짜 표기 (`%y%m%d`).
pub fn file_date(date: NaiveDate) -> String {
    date.format("%y%m%d").to_string()
}

/// 차트 제목에 쓰는 날짜 표기 (`YYYY/MM/DD`).
pub fn title_date(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn test_local_zone_offset() {
        assert_eq!(local_zone().local_minus_utc(), 9 * 3600);
    }

    #[test]
    fn test_format_datetime_local() {
        let at = local_zone()
            .with_ymd_and_hms(2026, 8, 30, 9, 5, 0)
            .unwrap();
        assert_eq!(format_datetime_local(&at), "2026-08-30T09:05:00");
    }

    #[test]
    fn test_epoch_secs_whole_second() {
        let at = Utc
            .with_ymd_and_hms(2026, 8, 30, 0, 0, 1)
            .unwrap()
            .with_timezone(&local_zone());
        let secs = epoch_secs(&at);
        assert_eq!(secs, at.timestamp() as f64);
    }

    #[test]
    fn test_date_formats() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert_eq!(file_date(date), "260830");
        assert_eq!(title_date(date), "2026/08/30");
    }
}
