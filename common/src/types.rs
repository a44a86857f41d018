//! 전시회 레코드 타입 정의
//!
//! - ExhibitionRecord: 고정 스키마의 정규화된 레코드
//! - Field: 필드 열거형 (선언 순서 = 출력 순서)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 레코드 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    KrName,
    EnName,
    EnAbbr,
    StartDate,
    EndDate,
    VenueKr,
    VenueEn,
    Country,
    City,
    FirstHeld,
    Cycle,
    Homepage,
    Organizer,
    Contact,
    Phone,
    Email,
    Industry,
    Items,
    Source,
}

/// 필드 개수
pub const FIELD_COUNT: usize = 19;

impl Field {
    /// 선언 순서의 전체 필드
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::KrName,
        Field::EnName,
        Field::EnAbbr,
        Field::StartDate,
        Field::EndDate,
        Field::VenueKr,
        Field::VenueEn,
        Field::Country,
        Field::City,
        Field::FirstHeld,
        Field::Cycle,
        Field::Homepage,
        Field::Organizer,
        Field::Contact,
        Field::Phone,
        Field::Email,
        Field::Industry,
        Field::Items,
        Field::Source,
    ];

    /// 날짜 정규화를 다시 적용하는 필드
    pub const DATE_FIELDS: [Field; 3] = [Field::StartDate, Field::EndDate, Field::FirstHeld];

    /// JSON 키 (추출 결과와 저장 파일에서 쓰는 한국어 라벨)
    pub fn key(&self) -> &'static str {
        match self {
            Field::KrName => "전시회 국문명",
            Field::EnName => "영문명(Full Name)",
            Field::EnAbbr => "영문명(약자)",
            Field::StartDate => "개최 시작",
            Field::EndDate => "개최 종료",
            Field::VenueKr => "개최장소(국문)",
            Field::VenueEn => "개최장소(영어)",
            Field::Country => "국가",
            Field::City => "도시",
            Field::FirstHeld => "첫 개최년도",
            Field::Cycle => "개최 주기",
            Field::Homepage => "공식 홈페이지",
            Field::Organizer => "주최기관",
            Field::Contact => "담당자",
            Field::Phone => "전화",
            Field::Email => "이메일",
            Field::Industry => "산업분야",
            Field::Items => "전시품목",
            Field::Source => "출처",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.key() == key)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// 키 목록 (LLM 프롬프트와 추출 결과 envelope 에 그대로 쓰인다)
pub fn keys() -> Vec<&'static str> {
    Field::ALL.iter().map(|f| f.key()).collect()
}

/// 전시회 레코드
///
/// 모든 필드는 항상 존재하며 값이 없으면 빈 문자열이다.
/// 직렬화 순서는 선언 순서를 따른다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExhibitionRecord {
    #[serde(rename = "전시회 국문명")]
    pub kr_name: String,
    #[serde(rename = "영문명(Full Name)")]
    pub en_name: String,
    #[serde(rename = "영문명(약자)")]
    pub en_abbr: String,
    #[serde(rename = "개최 시작")]
    pub start_date: String,
    #[serde(rename = "개최 종료")]
    pub end_date: String,
    #[serde(rename = "개최장소(국문)")]
    pub venue_kr: String,
    #[serde(rename = "개최장소(영어)")]
    pub venue_en: String,
    #[serde(rename = "국가")]
    pub country: String,
    #[serde(rename = "도시")]
    pub city: String,
    #[serde(rename = "첫 개최년도")]
    pub first_held: String,
    #[serde(rename = "개최 주기")]
    pub cycle: String,
    #[serde(rename = "공식 홈페이지")]
    pub homepage: String,
    #[serde(rename = "주최기관")]
    pub organizer: String,
    #[serde(rename = "담당자")]
    pub contact: String,
    #[serde(rename = "전화")]
    pub phone: String,
    #[serde(rename = "이메일")]
    pub email: String,
    #[serde(rename = "산업분야")]
    pub industry: String,
    #[serde(rename = "전시품목")]
    pub items: String,
    #[serde(rename = "출처")]
    pub source: String,
}

impl ExhibitionRecord {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::KrName => &self.kr_name,
            Field::EnName => &self.en_name,
            Field::EnAbbr => &self.en_abbr,
            Field::StartDate => &self.start_date,
            Field::EndDate => &self.end_date,
            Field::VenueKr => &self.venue_kr,
            Field::VenueEn => &self.venue_en,
            Field::Country => &self.country,
            Field::City => &self.city,
            Field::FirstHeld => &self.first_held,
            Field::Cycle => &self.cycle,
            Field::Homepage => &self.homepage,
            Field::Organizer => &self.organizer,
            Field::Contact => &self.contact,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Industry => &self.industry,
            Field::Items => &self.items,
            Field::Source => &self.source,
        }
    }

    pub(crate) fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::KrName => &mut self.kr_name,
            Field::EnName => &mut self.en_name,
            Field::EnAbbr => &mut self.en_abbr,
            Field::StartDate => &mut self.start_date,
            Field::EndDate => &mut self.end_date,
            Field::VenueKr => &mut self.venue_kr,
            Field::VenueEn => &mut self.venue_en,
            Field::Country => &mut self.country,
            Field::City => &mut self.city,
            Field::FirstHeld => &mut self.first_held,
            Field::Cycle => &mut self.cycle,
            Field::Homepage => &mut self.homepage,
            Field::Organizer => &mut self.organizer,
            Field::Contact => &mut self.contact,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Industry => &mut self.industry,
            Field::Items => &mut self.items,
            Field::Source => &mut self.source,
        }
    }

    /// (필드, 값) 쌍을 선언 순서대로 순회
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.iter().map(move |&f| (f, self.get(f)))
    }

    /// 모든 필드가 비어 있는지
    pub fn is_blank(&self) -> bool {
        self.iter().all(|(_, v)| v.trim().is_empty())
    }

    /// 고정 키 순서의 JSON 오브젝트
    pub fn to_json_map(&self) -> Map<String, Value> {
        self.iter()
            .map(|(f, v)| (f.key().to_string(), Value::String(v.to_string())))
            .collect()
    }

    /// 표시용 이름 (국문명 → 영문명 → 약자 순으로 첫 비어있지 않은 값)
    pub fn display_name(&self) -> &str {
        [&self.kr_name, &self.en_name, &self.en_abbr]
            .into_iter()
            .map(|s| s.as_str())
            .find(|s| !s.trim().is_empty())
            .unwrap_or("-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_all_matches_count() {
        assert_eq!(Field::ALL.len(), FIELD_COUNT);
        assert_eq!(keys().len(), FIELD_COUNT);
        assert_eq!(keys()[0], "전시회 국문명");
        assert_eq!(keys()[FIELD_COUNT - 1], "출처");
    }

    #[test]
    fn test_field_from_key() {
        assert_eq!(Field::from_key("개최 시작"), Some(Field::StartDate));
        assert_eq!(Field::from_key("영문명(Full Name)"), Some(Field::EnName));
        assert_eq!(Field::from_key("unknown"), None);
    }

    #[test]
    fn test_record_default_is_blank() {
        let rec = ExhibitionRecord::default();
        assert!(rec.is_blank());
        assert_eq!(rec.iter().count(), FIELD_COUNT);
        assert_eq!(rec.display_name(), "-");
    }

    #[test]
    fn test_record_serialize_in_fixed_order() {
        let rec = ExhibitionRecord {
            kr_name: "미국 폐기물 전시회".to_string(),
            source: "https://example.com".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_string(&rec).expect("직렬화 실패");
        let kr = json.find("전시회 국문명").unwrap();
        let start = json.find("개최 시작").unwrap();
        let src = json.find("출처").unwrap();
        assert!(kr < start && start < src);
    }

    #[test]
    fn test_to_json_map_keeps_order() {
        let rec = ExhibitionRecord {
            city: "Las Vegas".to_string(),
            ..Default::default()
        };
        let map = rec.to_json_map();
        let keys: Vec<&str> = map.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, super::keys());
        assert_eq!(map["도시"], Value::String("Las Vegas".into()));
    }

    #[test]
    fn test_display_name_falls_back_to_english() {
        let rec = ExhibitionRecord {
            en_name: "Waste Expo".to_string(),
            ..Default::default()
        };
        assert_eq!(rec.display_name(), "Waste Expo");
    }
}
