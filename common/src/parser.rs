//! LLM 응답 파서
//!
//! 모델 응답에서 JSON 오브젝트를 꺼낸다. `format: "json"` 을 지정해도
//! 설명문이나 코드 블록이 섞여 오는 경우가 있다.

use crate::error::{Error, Result};
use serde_json::{Map, Value};

/// 응답에서 JSON 오브젝트 부분을 추출
///
/// 추출 우선순위:
/// 1. ```json ... ``` 블록
/// 2. 첫 `{` 부터 마지막 `}` 까지
/// 3. 에러
///
/// # Examples
/// ```
/// use exhibit_recon_common::extract_json_object;
///
/// let response = "결과: {\"국가\": \"United States\"}";
/// assert_eq!(extract_json_object(response).unwrap(), "{\"국가\": \"United States\"}");
/// ```
pub fn extract_json_object(response: &str) -> Result<&str> {
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + "```json".len();
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end > start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(Error::Parse("no JSON object found in response".into()))
}

/// 추출 응답을 매핑으로 파싱 (관대한 처리)
///
/// 파싱에 실패하거나 오브젝트가 아니면 빈 매핑을 돌려준다.
/// 이후 정규화 단계에서 모든 필드가 빈 값으로 채워진다.
pub fn parse_extraction_response(response: &str) -> Map<String, Value> {
    let parsed = extract_json_object(response)
        .and_then(|json| serde_json::from_str::<Value>(json).map_err(Error::from));

    match parsed {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            tracing::warn!(kind = ?other, "extraction response is not an object");
            Map::new()
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to parse extraction response");
            Map::new()
        }
    }
}
