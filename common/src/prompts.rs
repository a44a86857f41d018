//! 추출 프롬프트 생성
//!
//! - build_system_prompt: 추출 규칙
//! - few_shot_examples: (사용자, 어시스턴트) 예시 쌍
//! - build_user_prompt: 크롤링 본문을 감싼 실제 요청

use crate::types::{keys, ExhibitionRecord};

/// 시스템 프롬프트
pub fn build_system_prompt() -> String {
    let key_list = keys().join(", ");

    format!(
        r#"너는 전시회 정보 추출 도우미다. 사용자가 제공한 텍스트에서 지정된 키만 찾아 JSON 으로만 출력한다.

[핵심 원칙]
1) 텍스트에 없는 정보는 추측하지 말고 "" (빈 문자열)로 둔다.
2) 원문 표현을 보존하되, 아래 언어 규칙에 해당하는 경우에만 번역한다.
3) 후보가 여러 개면 가장 최근 회차를 선택한다.
4) 지정된 키만 포함한다. 키 추가/누락/주석 금지.

[언어 규칙]
- 전시회 국문명: 한국어 (연도가 있으면 포함), 영문명(Full Name)/영문명(약자): 영어, 약자가 없으면 "".
- 개최장소(국문)/개최장소(영어): 한쪽만 있으면 번역해서 짝을 맞춘다.
- 국가/도시: 영어 고유명사 표기 (예: United States, Las Vegas).
- 날짜: YYYY-MM-DD. 연/월만 있으면 확인 가능한 범위까지만 쓰고, 없으면 "".
- 전화/이메일/담당자: 텍스트에 없으면 "".
- 공식 홈페이지: 행사/주최 측 도메인. 출처 URL 과 혼동하지 않는다.

[출력 형식]
- 키 목록: {key_list}
- 키 순서는 위 목록을 따른다.
- JSON 외 텍스트 출력 금지."#
    )
}

/// few-shot 예시 (사용자 입력, 기대 출력)
pub fn few_shot_examples() -> Vec<(String, String)> {
    let input = "[예시]\n[입력 발췌]\n2025 미국 라스베가스 폐기물 재활용 전시회 [WE]\nWaste Expo\nWE\n\
                 2025.05.06 - 2025.05.08\n개최국가 | 미국\n개최장소 | Las Vegas Convention Center\n\
                 산업분야 | 물류&운송, 기계&장비, 환경&폐기물\n주최기관 | Informa Market\n\
                 전화 | 212-520-2700\n이메일 | informamarkets@informa.com\n홈페이지 | www.wasteexpo.com\n";

    let output = ExhibitionRecord {
        kr_name: "2025 미국 라스베가스 폐기물 재활용 전시회".into(),
        en_name: "Waste Expo".into(),
        en_abbr: "WE".into(),
        start_date: "2025-05-06".into(),
        end_date: "2025-05-08".into(),
        venue_kr: "라스베가스 컨벤션 센터".into(),
        venue_en: "Las Vegas Convention Center".into(),
        country: "United States".into(),
        city: "Las Vegas".into(),
        homepage: "https://www.wasteexpo.com".into(),
        organizer: "Informa Market".into(),
        phone: "212-520-2700".into(),
        email: "informamarkets@informa.com".into(),
        industry: "물류&운송, 기계&장비, 환경&폐기물".into(),
        ..Default::default()
    };

    // ExhibitionRecord 의 직렬화는 실패하지 않는다 (문자열 필드만 존재)
    let output_json = serde_json::to_string(&output).unwrap_or_default();

    vec![(input.to_string(), output_json)]
}

/// 사용자 프롬프트 (본문 포함)
pub fn build_user_prompt(text: &str) -> String {
    format!(
        "[출력 규칙]\n- 키 목록: {}\n- JSON 외 텍스트 출력 금지\n텍스트 시작:\n{}\n텍스트 끝.",
        keys().join(", "),
        text
    )
}
