//! markdown/json/xlsx 출력 통합 테스트

use exhibit_recon::cli::ReportFormat;
use exhibit_recon::export::{self, json, markdown};
use exhibit_recon_common::{
    parse_records, ComparisonReport, ExhibitionMatcher, MatcherConfig,
};
use tempfile::tempdir;

fn create_test_report() -> ComparisonReport {
    let left = parse_records(
        r#"[
            {"전시회 국문명": "2025 미국 폐기물 재활용 전시회", "영문명(Full Name)": "Waste Expo 2025", "도시": "Las Vegas"},
            {"전시회 국문명": "독일 하노버 산업 박람회", "영문명(Full Name)": "Hannover Messe"}
        ]"#,
    )
    .unwrap();
    let right = parse_records(
        r#"{"data": {"전시회 국문명": "미국 폐기물 전시회", "영문명(Full Name)": "Waste Expo", "도시": "Las Vegas|NV"}}"#,
    )
    .unwrap();

    ExhibitionMatcher::new(MatcherConfig::default())
        .unwrap()
        .compare_loaded("left.json".into(), "right.json".into(), left, right)
}

#[test]
fn test_markdown_report() {
    let report = create_test_report();
    let text = markdown::render_report(&report);

    assert!(text.starts_with("# 전시회 비교 결과"));
    assert!(text.contains("## #0 2025 미국 폐기물 재활용 전시회 → 오른쪽 #0"));
    assert!(text.contains("## #1 독일 하노버 산업 박람회 → 매칭 없음"));
    assert!(text.contains("| 도시 | Las Vegas | Las Vegas\\|NV | X |"));
    assert!(text.contains("전체 2 / 매칭 1"));
}

#[test]
fn test_json_report() {
    let report = create_test_report();
    let text = json::report_to_string(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["summary"]["matched"], 1);
    assert_eq!(value["summary"]["unmatched"], 1);
    assert_eq!(value["left"], "left.json");
    assert_eq!(value["entries"][0]["status"], "matched");
    assert_eq!(value["entries"][1]["status"], "no_match");
    assert_eq!(value["entries"][0]["diff"][0]["field"], "kr_name");
}

#[test]
fn test_export_report_files() {
    let dir = tempdir().expect("임시 폴더 생성 실패");
    let report = create_test_report();

    let md = export::export_report(&report, &ReportFormat::Markdown, Some(dir.path()))
        .unwrap()
        .unwrap();
    assert_eq!(md, dir.path().join("comparison.md"));

    let json_path = dir.path().join("out").join("report.json");
    let written = export::export_report(&report, &ReportFormat::Json, Some(&json_path))
        .unwrap()
        .unwrap();
    assert_eq!(written, json_path);
    assert!(json_path.exists());

    let xlsx = export::export_report(&report, &ReportFormat::Excel, Some(dir.path()))
        .unwrap()
        .unwrap();
    let bytes = std::fs::read(&xlsx).unwrap();
    assert!(bytes.starts_with(b"PK"));
}
