use exhibit_recon_common::ExhibitionRecord;
use serde::{Deserialize, Serialize};

/// 추출 결과 저장 형식
///
/// 비교 로더는 `data` 키로 이 형식을 인식한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionEnvelope {
    #[serde(default)]
    pub extracted_at: String,

    #[serde(default)]
    pub model: String,

    #[serde(default)]
    pub num_ctx: u32,

    #[serde(default)]
    pub keys: Vec<String>,

    #[serde(default)]
    pub source_url: String,

    pub data: ExhibitionRecord,
}
