//! Markdown 표 출력

use exhibit_recon_common::{
    ComparisonReport, ExhibitionRecord, FieldDiff, PositionalDiff, ReportEntry,
};
use std::fmt::Write;

/// 표 셀 안에서 깨지지 않게 치환
fn cell(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return "-".into();
    }
    value.replace('|', "\\|").replace("\r\n", "<br>").replace('\n', "<br>")
}

/// 레코드 하나를 `필드 | 값` 표로
pub fn render_record(record: &ExhibitionRecord) -> String {
    let mut out = String::from("| 필드 | 값 |\n|---|---|\n");
    for (field, value) in record.iter() {
        let _ = writeln!(out, "| {} | {} |", field.key(), cell(value));
    }
    out
}

/// 필드 비교 표
pub fn render_diff(diff: &FieldDiff) -> String {
    let mut out = String::from("| 필드 | 왼쪽 | 오른쪽 | 일치 |\n|---|---|---|:---:|\n");
    for c in diff.iter() {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} |",
            c.label(),
            cell(&c.value_a),
            cell(&c.value_b),
            if c.equal { "O" } else { "X" }
        );
    }
    out
}

/// 비교 리포트 전체
pub fn render_report(report: &ComparisonReport) -> String {
    let summary = report.summary();
    let mut out = String::new();

    let _ = writeln!(out, "# 전시회 비교 결과\n");
    let _ = writeln!(out, "- 왼쪽: `{}`", report.left);
    let _ = writeln!(out, "- 오른쪽: `{}` ({}건)", report.right, report.stored_count);
    let _ = writeln!(out, "- 임계값: {:.2}", report.threshold);
    let _ = writeln!(
        out,
        "- 전체 {} / 매칭 {} (완전 일치 {}) / 미매칭 {} / 건너뜀 {}\n",
        summary.total, summary.matched, summary.identical, summary.unmatched, summary.skipped
    );

    for entry in &report.entries {
        match entry {
            ReportEntry::Matched {
                index,
                score,
                candidate,
                matched_index,
                diff,
                ..
            } => {
                let _ = writeln!(
                    out,
                    "## #{} {} → 오른쪽 #{} (점수 {:.3}, 불일치 {}개)\n",
                    index,
                    candidate.display_name(),
                    matched_index,
                    score,
                    diff.mismatch_count()
                );
                out.push_str(&render_diff(diff));
                out.push('\n');
            }
            ReportEntry::NoMatch {
                index,
                best_score,
                candidate,
            } => {
                let _ = writeln!(
                    out,
                    "## #{} {} → 매칭 없음 (최고 점수 {:.3})\n",
                    index,
                    candidate.display_name(),
                    best_score
                );
            }
            ReportEntry::Skipped { index, reason } => {
                let _ = writeln!(out, "## #{} 건너뜀: {}\n", index, reason);
            }
        }
    }

    if !report.right_skipped.is_empty() {
        let _ = writeln!(out, "## 오른쪽에서 건너뛴 원소\n");
        for skipped in &report.right_skipped {
            let _ = writeln!(out, "- #{}: {}", skipped.index, skipped.reason);
        }
    }

    out
}

/// 위치 기준 비교 결과
pub fn render_positional(diffs: &[PositionalDiff]) -> String {
    let mut out = String::new();
    for d in diffs {
        let presence = match (d.left_present, d.right_present) {
            (true, false) => " (오른쪽 없음)",
            (false, true) => " (왼쪽 없음)",
            _ => "",
        };
        let _ = writeln!(
            out,
            "## #{}{} 불일치 {}개\n",
            d.index,
            presence,
            d.diff.mismatch_count()
        );
        out.push_str(&render_diff(&d.diff));
        out.push('\n');
    }
    out
}
