//! 파일 단위 비교 리포트
//!
//! - compare_files: 왼쪽 파일의 각 레코드를 오른쪽 집합에서 매칭 후 필드 비교
//! - compare_record_with_file: 추출한 레코드 하나를 파일과 비교
//! - diff_files: 매칭 없이 위치 기준으로 필드 비교

use crate::diff::{compare_records, FieldDiff};
use crate::error::Result;
use crate::loader::{load_records, IndexedRecord, LoadedRecords, SkippedRecord};
use crate::matcher::ExhibitionMatcher;
use crate::types::ExhibitionRecord;
use serde::Serialize;
use std::path::Path;

/// 왼쪽 레코드 하나에 대한 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportEntry {
    /// 임계값을 넘는 레코드를 찾음
    Matched {
        index: usize,
        score: f64,
        candidate: ExhibitionRecord,
        matched_index: usize,
        matched: ExhibitionRecord,
        diff: FieldDiff,
    },
    /// 임계값을 넘는 레코드 없음
    NoMatch {
        index: usize,
        best_score: f64,
        candidate: ExhibitionRecord,
    },
    /// 오브젝트가 아니라서 건너뜀
    Skipped { index: usize, reason: String },
}

impl ReportEntry {
    pub fn index(&self) -> usize {
        match self {
            ReportEntry::Matched { index, .. }
            | ReportEntry::NoMatch { index, .. }
            | ReportEntry::Skipped { index, .. } => *index,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, ReportEntry::Matched { .. })
    }
}

/// 집계
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub matched: usize,
    pub identical: usize,
    pub unmatched: usize,
    pub skipped: usize,
}

/// 비교 리포트
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub left: String,
    pub right: String,
    pub threshold: f64,
    /// 오른쪽(저장) 집합의 유효 레코드 수
    pub stored_count: usize,
    /// 왼쪽 파일 순서
    pub entries: Vec<ReportEntry>,
    /// 오른쪽 파일에서 건너뛴 원소
    pub right_skipped: Vec<SkippedRecord>,
}

impl ComparisonReport {
    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary {
            total: self.entries.len(),
            ..Default::default()
        };
        for entry in &self.entries {
            match entry {
                ReportEntry::Matched { diff, .. } => {
                    summary.matched += 1;
                    if diff.all_equal() {
                        summary.identical += 1;
                    }
                }
                ReportEntry::NoMatch { .. } => summary.unmatched += 1,
                ReportEntry::Skipped { .. } => summary.skipped += 1,
            }
        }
        summary
    }
}

/// 위치 기준 직접 비교 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionalDiff {
    pub index: usize,
    pub left_present: bool,
    pub right_present: bool,
    pub diff: FieldDiff,
}

impl ExhibitionMatcher {
    /// 두 파일을 비교한다
    ///
    /// 어느 한쪽이라도 읽기/파싱에 실패하면 리포트 없이 에러를 돌려준다.
    pub fn compare_files(&self, path_a: &Path, path_b: &Path) -> Result<ComparisonReport> {
        let left = load_records(path_a)?;
        let right = load_records(path_b)?;

        tracing::debug!(
            left = %path_a.display(),
            right = %path_b.display(),
            left_records = left.len(),
            right_records = right.len(),
            "comparing files"
        );

        Ok(self.compare_loaded(
            path_a.display().to_string(),
            path_b.display().to_string(),
            left,
            right,
        ))
    }

    /// 레코드 하나를 파일의 레코드 집합과 비교한다
    pub fn compare_record_with_file(
        &self,
        record: &ExhibitionRecord,
        path: &Path,
    ) -> Result<ComparisonReport> {
        let right = load_records(path)?;
        let left = LoadedRecords {
            records: vec![IndexedRecord {
                index: 0,
                record: record.clone(),
            }],
            skipped: Vec::new(),
        };

        Ok(self.compare_loaded("<record>".into(), path.display().to_string(), left, right))
    }

    /// 이미 로드된 두 집합을 비교한다
    pub fn compare_loaded(
        &self,
        left_name: String,
        right_name: String,
        left: LoadedRecords,
        right: LoadedRecords,
    ) -> ComparisonReport {
        let stored = right.to_records();

        let mut entries: Vec<ReportEntry> = left
            .records
            .into_iter()
            .map(|IndexedRecord { index, record }| {
                let result = self.find_best_match(&record, &stored);
                match (result.best, result.best_index) {
                    (Some(matched), Some(matched_index)) if result.matched => {
                        let diff = compare_records(&record, &matched);
                        ReportEntry::Matched {
                            index,
                            score: result.score,
                            candidate: record,
                            matched_index,
                            matched,
                            diff,
                        }
                    }
                    _ => ReportEntry::NoMatch {
                        index,
                        best_score: result.score,
                        candidate: record,
                    },
                }
            })
            .chain(
                left.skipped
                    .into_iter()
                    .map(|SkippedRecord { index, reason }| ReportEntry::Skipped { index, reason }),
            )
            .collect();

        entries.sort_by_key(ReportEntry::index);

        ComparisonReport {
            left: left_name,
            right: right_name,
            threshold: self.threshold(),
            stored_count: stored.len(),
            entries,
            right_skipped: right.skipped,
        }
    }
}

/// 두 파일을 위치 기준으로 직접 비교한다 (퍼지 매칭 없음)
///
/// 개수가 다르면 남는 쪽은 빈 레코드와 비교한다.
pub fn diff_files(path_a: &Path, path_b: &Path) -> Result<Vec<PositionalDiff>> {
    let left = load_records(path_a)?.to_records();
    let right = load_records(path_b)?.to_records();
    Ok(diff_positional(&left, &right))
}

pub fn diff_positional(left: &[ExhibitionRecord], right: &[ExhibitionRecord]) -> Vec<PositionalDiff> {
    let empty = ExhibitionRecord::default();
    let len = left.len().max(right.len());

    (0..len)
        .map(|index| {
            let a = left.get(index);
            let b = right.get(index);
            PositionalDiff {
                index,
                left_present: a.is_some(),
                right_present: b.is_some(),
                diff: compare_records(a.unwrap_or(&empty), b.unwrap_or(&empty)),
            }
        })
        .collect()
}
