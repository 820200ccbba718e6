//! 일 단위 append 전용 레저 파일 계약.
//!
//! Collector가 쓰고 Renderer가 읽는 유일한 통합 지점입니다.
//! 파일 구조: 헤더 1행 + append 순서의 스냅샷 행. 행은 절대
//! 수정/재정렬하지 않으며, 날짜가 바뀌면 새 파일을 만듭니다.
//!
//! 단일 writer를 가정합니다. 같은 파일에 대한 동시 append는
//! 지원 범위 밖입니다 (파일 잠금 없음).

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, error};

use crate::snapshot::Snapshot;
use crate::time;

/// 레저 파일 에러.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// 대상 날짜의 레저 파일이 없음
    #[error("Ledger file not found: {0}")]
    NotFound(PathBuf),

    /// 레저 파일은 있으나 데이터 행이 없음
    #[error("Ledger file has no data rows: {0}")]
    Empty(PathBuf),

    /// 파일 I/O 에러
    #[error("Ledger I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV 인코딩/디코딩 에러
    #[error("Ledger CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// 레저 작업을 위한 Result 타입.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// 레저 컬럼 헤더 (고정 순서).
pub const LEDGER_HEADER: [&str; 4] = ["timestamp", "datetime_local", "pnl", "last_price"];

/// (거래소, 봇) 쌍의 일 단위 레저 파일 핸들.
///
/// 파일명은 `pnl_{exchange}_{bot}_{yymmdd}.csv`로 결정적이며
/// 날짜가 다르면 충돌하지 않습니다.
#[derive(Debug, Clone)]
pub struct Ledger {
    dir: PathBuf,
    exchange: String,
    bot: String,
}

impl Ledger {
    /// 새 레저 핸들을 생성합니다.
    pub fn new(dir: impl Into<PathBuf>, exchange: impl Into<String>, bot: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            exchange: exchange.into(),
            bot: bot.into(),
        }
    }

    /// 날짜별 파일명 stem (`pnl_{exchange}_{bot}_{yymmdd}`).
    ///
    /// 차트 아티팩트도 같은 stem에 확장자만 바꿔 사용합니다.
    pub fn file_stem(&self, date: NaiveDate) -> String {
        format!("pnl_{}_{}_{}", self.exchange, self.bot, time::file_date(date))
    }

    /// 날짜별 레저 파일명.
    pub fn file_name(&self, date: NaiveDate) -> String {
        format!("{}.csv", self.file_stem(date))
    }

    /// 날짜별 레저 파일 경로.
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(self.file_name(date))
    }

    /// 스냅샷 한 건을 해당 날짜의 레저에 append 합니다.
    ///
    /// 파일이 아직 없으면 헤더를 먼저 씁니다. 파일 핸들은 호출 범위에
    /// 한정되어 성공/실패 모든 경로에서 해제됩니다. 쓰기 실패는
    /// 로그 후 그대로 전파합니다.
    pub fn append(&self, date: NaiveDate, snapshot: &Snapshot) -> LedgerResult<()> {
        let path = self.path_for(date);
        let file_exists = path.is_file();
        let result = append_row(&path, file_exists, snapshot);
        match &result {
            Ok(()) => debug!(path = %path.display(), "레저 append 완료"),
            Err(e) => error!(path = %path.display(), error = %e, "레저 파일 쓰기 실패"),
        }
        result
    }

    /// 해당 날짜의 레저 전체를 읽습니다.
    ///
    /// 파일이 없으면 `NotFound`, 헤더만 있고 데이터 행이 없으면
    /// `Empty`를 반환합니다. 둘 다 재시도 없는 치명적 에러입니다.
    pub fn load(&self, date: NaiveDate) -> LedgerResult<Vec<Snapshot>> {
        let path = self.path_for(date);
        if !path.is_file() {
            error!(path = %path.display(), "레저 파일 없음");
            return Err(LedgerError::NotFound(path));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&path)?;

        let mut rows = Vec::new();
        for record in reader.deserialize() {
            let snapshot: Snapshot = record?;
            rows.push(snapshot);
        }

        if rows.is_empty() {
            error!(path = %path.display(), "레저 파일에 데이터 행 없음");
            return Err(LedgerError::Empty(path));
        }

        debug!(path = %path.display(), rows = rows.len(), "레저 로드 완료");
        Ok(rows)
    }
}

/// 단일 행 append. writer는 이 함수가 끝나면 flush 후 해제된다.
fn append_row(path: &Path, file_exists: bool, snapshot: &Snapshot) -> LedgerResult<()> {
    let file = OpenOptions::new().append(true).create(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if !file_exists {
        writer.write_record(&LEDGER_HEADER)?;
    }
    writer.serialize(snapshot)?;
    writer.flush()?;
    Ok(())
}
