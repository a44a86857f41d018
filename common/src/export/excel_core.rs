//! 비교 리포트 Excel 생성 (공통 라이브러리)
//!
//! 시트 구성:
//! - "요약": 파일명, 임계값, 집계
//! - "비교": 필드 단위 행 (레코드 위치, 상태, 점수, 필드, 왼쪽, 오른쪽, 일치)

use crate::report::{ComparisonReport, ReportEntry};
use crate::types::Field;
use rust_xlsxwriter::*;

const HEADERS: [&str; 7] = ["#", "상태", "점수", "필드", "왼쪽", "오른쪽", "일치"];

/// 리포트를 xlsx 바이트로 생성
pub fn generate_report_buffer(report: &ComparisonReport) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0x333333))
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let value_format = Format::new()
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap()
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let mismatch_format = value_format
        .clone()
        .set_background_color(Color::RGB(0xFDE2E2));

    // 요약 시트
    {
        let summary = report.summary();
        let sheet = workbook.add_worksheet();
        sheet.set_name("요약")
            .map_err(|e| format!("시트 이름 설정 오류: {}", e))?;
        sheet.set_column_width(0, 18)
            .map_err(|e| format!("열 너비 설정 오류: {}", e))?;
        sheet.set_column_width(1, 60)
            .map_err(|e| format!("열 너비 설정 오류: {}", e))?;

        let rows: [(&str, String); 8] = [
            ("왼쪽", report.left.clone()),
            ("오른쪽", report.right.clone()),
            ("임계값", format!("{:.2}", report.threshold)),
            ("전체", summary.total.to_string()),
            ("매칭", summary.matched.to_string()),
            ("완전 일치", summary.identical.to_string()),
            ("매칭 없음", summary.unmatched.to_string()),
            ("건너뜀", summary.skipped.to_string()),
        ];
        for (row, (label, value)) in rows.iter().enumerate() {
            sheet.write_string_with_format(row as u32, 0, *label, &header_format)
                .map_err(|e| format!("라벨 쓰기 오류: {}", e))?;
            sheet.write_string_with_format(row as u32, 1, value, &value_format)
                .map_err(|e| format!("값 쓰기 오류: {}", e))?;
        }
    }

    // 비교 시트
    let sheet = workbook.add_worksheet();
    sheet.set_name("비교")
        .map_err(|e| format!("시트 이름 설정 오류: {}", e))?;
    for (col, width) in [6.0, 10.0, 8.0, 18.0, 40.0, 40.0, 6.0].iter().enumerate() {
        sheet.set_column_width(col as u16, *width)
            .map_err(|e| format!("열 너비 설정 오류: {}", e))?;
    }
    for (col, header) in HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| format!("헤더 쓰기 오류: {}", e))?;
    }
    sheet.set_freeze_panes(1, 0)
        .map_err(|e| format!("틀 고정 오류: {}", e))?;

    let mut row: u32 = 1;
    for entry in &report.entries {
        let cells: Vec<[String; 7]> = match entry {
            ReportEntry::Matched { index, score, diff, .. } => diff
                .iter()
                .map(|c| {
                    [
                        (index + 1).to_string(),
                        "매칭".to_string(),
                        format!("{:.3}", score),
                        c.label().to_string(),
                        c.value_a.clone(),
                        c.value_b.clone(),
                        if c.equal { "O" } else { "X" }.to_string(),
                    ]
                })
                .collect(),
            ReportEntry::NoMatch { index, best_score, candidate } => Field::ALL
                .iter()
                .map(|&f| {
                    [
                        (index + 1).to_string(),
                        "매칭 없음".to_string(),
                        format!("{:.3}", best_score),
                        f.key().to_string(),
                        candidate.get(f).to_string(),
                        String::new(),
                        String::new(),
                    ]
                })
                .collect(),
            ReportEntry::Skipped { index, reason } => vec![[
                (index + 1).to_string(),
                "건너뜀".to_string(),
                String::new(),
                String::new(),
                reason.clone(),
                String::new(),
                String::new(),
            ]],
        };

        for values in cells {
            let format = if values[6] == "X" { &mismatch_format } else { &value_format };
            for (col, value) in values.iter().enumerate() {
                sheet.write_string_with_format(row, col as u16, value, format)
                    .map_err(|e| format!("셀 쓰기 오류: {}", e))?;
            }
            row += 1;
        }
    }

    workbook.save_to_buffer()
        .map_err(|e| format!("Excel 저장 오류: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::compare_records;
    use crate::types::ExhibitionRecord;

    #[test]
    fn test_generate_report_buffer() {
        let rec = ExhibitionRecord {
            kr_name: "미국 폐기물 전시회".into(),
            ..Default::default()
        };
        let report = ComparisonReport {
            left: "left.json".into(),
            right: "right.json".into(),
            threshold: 0.78,
            stored_count: 1,
            entries: vec![
                ReportEntry::Matched {
                    index: 0,
                    score: 1.0,
                    candidate: rec.clone(),
                    matched_index: 0,
                    matched: rec.clone(),
                    diff: compare_records(&rec, &rec),
                },
                ReportEntry::Skipped { index: 1, reason: "bad".into() },
            ],
            right_skipped: Vec::new(),
        };

        let buffer = generate_report_buffer(&report).expect("Excel 생성 실패");
        // xlsx 는 zip 컨테이너
        assert!(buffer.starts_with(b"PK"));
    }
}
