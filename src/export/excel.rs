//! Excel 출력 (CLI)
//!
//! 워크북 생성은 공통 라이브러리에서 하고 여기서는 파일로 쓴다.

use crate::error::{AppError, Result};
use exhibit_recon_common::export::excel_core::generate_report_buffer;
use exhibit_recon_common::ComparisonReport;
use std::path::Path;

pub fn write_report(report: &ComparisonReport, path: &Path) -> Result<()> {
    let buffer = generate_report_buffer(report).map_err(AppError::Export)?;
    std::fs::write(path, buffer)?;
    Ok(())
}
