//! 레코드 파일 로더
//!
//! 허용하는 JSON 형태:
//! - 추출 결과 envelope: `{"extracted_at": .., "model": .., "keys": [..], "data": {..}}`
//! - `data` 가 배열인 envelope
//! - 레코드(또는 envelope) 배열
//! - 단일 레코드 오브젝트
//!
//! 파일 자체가 깨졌으면 에러, 개별 원소가 오브젝트가 아니면 건너뛰고 기록한다.

use crate::canonical::{canonicalize_value, json_type_name};
use crate::error::{Error, Result};
use crate::types::ExhibitionRecord;
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const DATA_KEY: &str = "data";

/// 위치 정보가 붙은 레코드
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexedRecord {
    /// 파일 내 위치 (0부터)
    pub index: usize,
    pub record: ExhibitionRecord,
}

/// 건너뛴 원소
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    pub index: usize,
    pub reason: String,
}

/// 로드 결과
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadedRecords {
    pub records: Vec<IndexedRecord>,
    pub skipped: Vec<SkippedRecord>,
}

impl LoadedRecords {
    /// 레코드만 순서대로 꺼낸다
    pub fn to_records(&self) -> Vec<ExhibitionRecord> {
        self.records.iter().map(|r| r.record.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 다른 로드 결과를 뒤에 이어 붙인다 (위치는 누적 오프셋으로 조정)
    pub fn extend(&mut self, other: LoadedRecords, offset: usize) {
        self.records.extend(other.records.into_iter().map(|mut r| {
            r.index += offset;
            r
        }));
        self.skipped.extend(other.skipped.into_iter().map(|mut s| {
            s.index += offset;
            s
        }));
    }

    /// 원소 총 개수 (건너뛴 것 포함)
    pub fn total(&self) -> usize {
        self.records.len() + self.skipped.len()
    }
}

/// 파일에서 레코드를 읽는다
pub fn load_records(path: &Path) -> Result<LoadedRecords> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let reader = BufReader::new(file);

    let value: Value = serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            Error::io(path, e.into())
        } else {
            Error::malformed(path.display().to_string(), e.to_string())
        }
    })?;

    from_value(&value).map_err(|reason| Error::malformed(path.display().to_string(), reason))
}

/// JSON 문자열에서 레코드를 읽는다
pub fn parse_records(text: &str) -> Result<LoadedRecords> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| Error::malformed("<input>", e.to_string()))?;
    from_value(&value).map_err(|reason| Error::malformed("<input>", reason))
}

/// 이미 파싱된 JSON 값에서 레코드를 읽는다
///
/// 최상위 형태가 잘못되었으면 사유 문자열을 반환한다.
pub fn from_value(value: &Value) -> std::result::Result<LoadedRecords, String> {
    match value {
        Value::Object(map) => match map.get(DATA_KEY) {
            Some(Value::Object(_)) => Ok(collect(std::slice::from_ref(&map[DATA_KEY]))),
            Some(Value::Array(items)) => Ok(collect(items)),
            Some(other) => Err(format!(
                "\"{}\" must be an object or array, found {}",
                DATA_KEY,
                json_type_name(other)
            )),
            None => Ok(collect(std::slice::from_ref(value))),
        },
        Value::Array(items) => Ok(collect(items)),
        other => Err(format!(
            "expected an object or array at top level, found {}",
            json_type_name(other)
        )),
    }
}

fn collect(items: &[Value]) -> LoadedRecords {
    let mut loaded = LoadedRecords::default();

    for (index, item) in items.iter().enumerate() {
        match canonicalize_value(unwrap_envelope(item), index) {
            Ok(record) => loaded.records.push(IndexedRecord { index, record }),
            Err(err) => {
                tracing::warn!(index, error = %err, "skipping record");
                loaded.skipped.push(SkippedRecord {
                    index,
                    reason: err.to_string(),
                });
            }
        }
    }

    loaded
}

/// 배열 원소가 envelope 이면 `data` 오브젝트를 꺼낸다
fn unwrap_envelope(item: &Value) -> &Value {
    match item.get(DATA_KEY) {
        Some(data @ Value::Object(_)) => data,
        _ => item,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_envelope() {
        let text = r#"{
            "extracted_at": "2025-08-01T00:00:00Z",
            "model": "llama3.1",
            "keys": ["전시회 국문명"],
            "data": {"전시회 국문명": "미국 폐기물 전시회", "개최 시작": "2025.05.06"}
        }"#;
        let loaded = parse_records(text).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.records[0].record.kr_name, "미국 폐기물 전시회");
        assert_eq!(loaded.records[0].record.start_date, "2025-05-06");
        assert!(loaded.skipped.is_empty());
    }

    #[test]
    fn test_parse_envelope_with_array_data() {
        let text = r#"{"data": [{"국가": "United States"}, {"국가": "Germany"}]}"#;
        let loaded = parse_records(text).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.records[1].record.country, "Germany");
    }

    #[test]
    fn test_parse_bare_record() {
        let loaded = parse_records(r#"{"영문명(Full Name)": "Waste Expo"}"#).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.records[0].record.en_name, "Waste Expo");
    }

    #[test]
    fn test_parse_array_mixed() {
        let text = r#"[
            {"전시회 국문명": "A"},
            42,
            {"data": {"전시회 국문명": "B"}},
            "oops"
        ]"#;
        let loaded = parse_records(text).unwrap();
        let names: Vec<&str> = loaded.records.iter().map(|r| r.record.kr_name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(loaded.records[1].index, 2);

        let skipped: Vec<usize> = loaded.skipped.iter().map(|s| s.index).collect();
        assert_eq!(skipped, vec![1, 3]);
        assert!(loaded.skipped[0].reason.contains("number"));
        assert_eq!(loaded.total(), 4);
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = parse_records("{ not json").unwrap_err();
        assert!(matches!(err, Error::MalformedInput { .. }));
    }

    #[test]
    fn test_parse_top_level_scalar() {
        let err = parse_records("3").unwrap_err();
        match err {
            Error::MalformedInput { reason, .. } => assert!(reason.contains("number")),
            other => panic!("Expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_bad_data_key() {
        let err = parse_records(r#"{"data": "text"}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedInput { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_records(Path::new("/nonexistent/path/records.json")).unwrap_err();
        match err {
            Error::Io { path, .. } => assert!(path.ends_with("records.json")),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().expect("임시 파일 생성 실패");
        write!(file, r#"[{{"전시회 국문명": "미국 폐기물 전시회"}}]"#).unwrap();

        let loaded = load_records(file.path()).unwrap();
        assert_eq!(loaded.to_records()[0].kr_name, "미국 폐기물 전시회");
    }

    #[test]
    fn test_load_malformed_file_names_path() {
        let mut file = NamedTempFile::new().expect("임시 파일 생성 실패");
        write!(file, "[{{").unwrap();

        let err = load_records(file.path()).unwrap_err();
        match err {
            Error::MalformedInput { path, .. } => {
                assert_eq!(path, file.path().display().to_string());
            }
            other => panic!("Expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_extend_offsets_indices() {
        let mut first = parse_records(r#"[{"국가": "A"}, 1]"#).unwrap();
        let second = parse_records(r#"[{"국가": "B"}]"#).unwrap();
        let offset = first.total();
        first.extend(second, offset);
        assert_eq!(first.records[1].index, 2);
        assert_eq!(first.records[1].record.country, "B");
    }
}
