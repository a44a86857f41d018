//! 레코드 정규화
//!
//! LLM 추출 결과나 저장 파일의 임의 매핑을 고정 스키마 레코드로 변환한다.
//! 입력은 신뢰하지 않는다: 키 누락, 타입 불일치 모두 빈 값/문자열화로 흡수한다.

use crate::date::normalize_date;
use crate::error::{Error, Result};
use crate::types::{ExhibitionRecord, Field};
use serde_json::{Map, Value};

/// 임의의 JSON 값을 필드 문자열로 변환
///
/// - 문자열: 앞뒤 공백 제거
/// - 숫자/불리언: 텍스트 표현
/// - null: 빈 문자열
/// - 배열: 원소를 변환해 `", "` 로 연결 (빈 원소 제외)
/// - 오브젝트: 압축 JSON 텍스트
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(items) => items
            .iter()
            .map(value_to_text)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    }
}

/// 원시 매핑을 정규화된 레코드로 변환한다
///
/// 알 수 없는 키는 버리고, 날짜 필드(개최 시작/종료, 첫 개최년도)는
/// 일반 처리 후 한 번 더 날짜 정규화를 적용한다.
pub fn canonicalize_record(raw: &Map<String, Value>) -> ExhibitionRecord {
    let mut record = ExhibitionRecord::default();

    for field in Field::ALL {
        if let Some(value) = raw.get(field.key()) {
            *record.slot_mut(field) = value_to_text(value);
        }
    }

    for field in Field::DATE_FIELDS {
        let normalized = normalize_date(record.get(field));
        *record.slot_mut(field) = normalized;
    }

    record
}

/// 타입이 정해지지 않은 JSON 값을 레코드로 변환
///
/// 오브젝트가 아니면 `RecordShape` 에러. `index` 는 파일 내 위치.
pub fn canonicalize_value(value: &Value, index: usize) -> Result<ExhibitionRecord> {
    match value {
        Value::Object(map) => Ok(canonicalize_record(map)),
        other => Err(Error::RecordShape {
            index,
            reason: format!("expected object, found {}", json_type_name(other)),
        }),
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
