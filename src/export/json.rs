//! JSON 출력

use crate::error::Result;
use exhibit_recon_common::{ComparisonReport, ExhibitionRecord, PositionalDiff};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Serialize)]
struct ReportDocument<'a> {
    summary: exhibit_recon_common::ReportSummary,
    #[serde(flatten)]
    report: &'a ComparisonReport,
}

/// 집계를 포함한 리포트 JSON 문자열
pub fn report_to_string(report: &ComparisonReport) -> Result<String> {
    let doc = ReportDocument {
        summary: report.summary(),
        report,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// 레코드 하나 (고정 키 순서)
pub fn record_to_string(record: &ExhibitionRecord) -> Result<String> {
    Ok(serde_json::to_string_pretty(&record.to_json_map())?)
}

pub fn positional_to_string(diffs: &[PositionalDiff]) -> Result<String> {
    Ok(serde_json::to_string_pretty(diffs)?)
}

pub fn write_report(report: &ComparisonReport, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(
        writer,
        &ReportDocument {
            summary: report.summary(),
            report,
        },
    )?;
    Ok(())
}
