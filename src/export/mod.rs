pub mod excel;
pub mod json;
pub mod markdown;

use crate::cli::ReportFormat;
use crate::error::Result;
use exhibit_recon_common::ComparisonReport;
use std::path::{Path, PathBuf};

const DEFAULT_STEM: &str = "comparison";

fn output_path_for_format(output: &Path, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", DEFAULT_STEM, extension))
    } else {
        output.to_path_buf()
    }
}

/// 비교 리포트 출력
///
/// 출력 경로가 없으면 markdown/json 은 표준출력, xlsx 는 현재 폴더에 쓴다.
/// 파일로 썼으면 그 경로를 돌려준다.
pub fn export_report(
    report: &ComparisonReport,
    format: &ReportFormat,
    output: Option<&Path>,
) -> Result<Option<PathBuf>> {
    match (format, output) {
        (ReportFormat::Markdown, None) => {
            print!("{}", markdown::render_report(report));
            Ok(None)
        }
        (ReportFormat::Markdown, Some(output)) => {
            let path = output_path_for_format(output, "md");
            ensure_parent(&path)?;
            std::fs::write(&path, markdown::render_report(report))?;
            Ok(Some(path))
        }
        (ReportFormat::Json, None) => {
            println!("{}", json::report_to_string(report)?);
            Ok(None)
        }
        (ReportFormat::Json, Some(output)) => {
            let path = output_path_for_format(output, "json");
            ensure_parent(&path)?;
            json::write_report(report, &path)?;
            Ok(Some(path))
        }
        (ReportFormat::Excel, output) => {
            let path = output_path_for_format(output.unwrap_or(Path::new(".")), "xlsx");
            ensure_parent(&path)?;
            excel::write_report(report, &path)?;
            Ok(Some(path))
        }
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
