//! 전시회 정보 추출
//!
//! 크롤링된 본문(markdown) → 정리 → LLM 추출 → 레코드 정규화 → envelope

mod ollama;
mod types;

pub use ollama::{build_messages, ChatMessage, OllamaClient, Role};
pub use types::ExtractionEnvelope;

use crate::error::{AppError, Result};
use chrono::{SecondsFormat, Utc};
use exhibit_recon_common::{canonicalize_record, parse_extraction_response, types::keys};

/// 본문 정리
///
/// - 비가시 공백 제거, NBSP → 공백
/// - 줄 끝 공백 제거
/// - 연속 빈 줄은 한 줄로
pub fn normalize_text(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '\u{200b}' | '\u{200c}' | '\u{200d}' | '\u{feff}'))
        .map(|c| if c == '\u{a0}' { ' ' } else { c })
        .collect();

    let mut lines: Vec<&str> = Vec::new();
    let mut previous_blank = true;
    for line in cleaned.lines() {
        let line = line.trim_end();
        let blank = line.trim().is_empty();
        if blank && previous_blank {
            continue;
        }
        lines.push(if blank { "" } else { line });
        previous_blank = blank;
    }

    lines.join("\n").trim().to_string()
}

/// LLM 응답으로 envelope 을 만든다
///
/// 응답이 깨져 있어도 실패하지 않고 빈 레코드가 된다.
/// `출처` 가 비어 있으면 원본 URL 로 채운다.
pub fn build_envelope(
    response: &str,
    source_url: &str,
    model: &str,
    num_ctx: u32,
    extracted_at: String,
) -> ExtractionEnvelope {
    let raw = parse_extraction_response(response);
    let mut data = canonicalize_record(&raw);
    if data.source.is_empty() {
        data.source = source_url.trim().to_string();
    }

    ExtractionEnvelope {
        extracted_at,
        model: model.to_string(),
        num_ctx,
        keys: keys().into_iter().map(String::from).collect(),
        source_url: source_url.trim().to_string(),
        data,
    }
}

/// 본문에서 전시회 정보를 추출한다
pub async fn extract_record(
    client: &OllamaClient,
    text: &str,
    source_url: &str,
) -> Result<ExtractionEnvelope> {
    let text = normalize_text(text);
    if text.is_empty() {
        return Err(AppError::EmptyInput(source_url.to_string()));
    }

    tracing::debug!(chars = text.chars().count(), source = source_url, "extracting");

    let messages = build_messages(&text);
    let response = client.chat(&messages).await?;

    let preview: String = response.chars().take(500).collect();
    tracing::debug!(response = %preview, "llm response");

    let extracted_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    Ok(build_envelope(&response, source_url, client.model(), client.num_ctx(), extracted_at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use exhibit_recon_common::FIELD_COUNT;

    #[test]
    fn test_normalize_text_collapses_blank_lines() {
        let raw = "\n\n제목  \n\n\n\n본문\u{a0}내용\u{200b}\n   \n끝\n\n";
        assert_eq!(normalize_text(raw), "제목\n\n본문 내용\n\n끝");
    }

    #[test]
    fn test_normalize_text_empty() {
        assert_eq!(normalize_text("  \n \n"), "");
    }

    #[test]
    fn test_build_envelope_from_response() {
        let response = r#"```json
{"전시회 국문명": "미국 폐기물 전시회", "개최 시작": "2025.05.06", "첫 개최년도": 1968, "extra": "x"}
```"#;
        let envelope = build_envelope(
            response,
            "https://example.com/expo",
            "llama3.1",
            128_000,
            "2025-08-01T00:00:00Z".into(),
        );

        assert_eq!(envelope.data.kr_name, "미국 폐기물 전시회");
        assert_eq!(envelope.data.start_date, "2025-05-06");
        assert_eq!(envelope.data.first_held, "1968");
        assert_eq!(envelope.data.source, "https://example.com/expo");
        assert_eq!(envelope.keys.len(), FIELD_COUNT);
        assert_eq!(envelope.model, "llama3.1");
    }

    #[test]
    fn test_build_envelope_keeps_extracted_source() {
        let envelope = build_envelope(
            r#"{"출처": "https://myfair.co/exhibition/107471"}"#,
            "https://other.example",
            "llama3.1",
            8192,
            String::new(),
        );
        assert_eq!(envelope.data.source, "https://myfair.co/exhibition/107471");
        assert_eq!(envelope.source_url, "https://other.example");
    }

    #[test]
    fn test_build_envelope_invalid_response_is_blank() {
        let envelope = build_envelope("모델 오류", "", "llama3.1", 8192, String::new());
        assert!(envelope.data.is_blank());
    }
}
