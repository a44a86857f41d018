//! 퍼지 문자열 유사도
//!
//! 전시회명 비교용. 한/영 혼용, 구두점, 대소문자, 회차 연도 표기 차이를 흡수한다.
//!
//! ## 계산
//! 1. NFKC 정규화 → 소문자 → 구두점 제거 → 공백 정리
//! 2. 4자리 연도 토큰(`2025`, `2025년`) 제거
//! 3. core = max(토큰 집합 비율, 문자 단위 정규화 편집거리)
//! 4. raw  = 연도 제거 전 문자열의 정규화 편집거리
//! 5. 결과 = 0.7 × core + 0.3 × raw

use std::collections::BTreeSet;
use strsim::normalized_levenshtein;
use unicode_normalization::UnicodeNormalization;

const CORE_WEIGHT: f64 = 0.7;
const RAW_WEIGHT: f64 = 0.3;

/// 두 문자열의 유사도 (0.0〜1.0)
///
/// 어느 한쪽이라도 비어 있으면 0.0. 빈 필드끼리는 일치로 보지 않는다.
///
/// # Examples
/// ```
/// use exhibit_recon_common::similarity;
///
/// assert_eq!(similarity("Waste Expo", "Waste Expo"), 1.0);
/// assert_eq!(similarity("", ""), 0.0);
/// assert!(similarity("Waste Expo", "2025 Waste Expo") > 0.78);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let (a, b) = (a.trim(), b.trim());
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let prepared_a = prepare(a);
    let prepared_b = prepare(b);
    if prepared_a.is_empty() || prepared_b.is_empty() {
        return 0.0;
    }
    if prepared_a == prepared_b {
        return 1.0;
    }

    let stripped_a = strip_years(&prepared_a);
    let stripped_b = strip_years(&prepared_b);

    let core = token_set_ratio(&stripped_a, &stripped_b)
        .max(normalized_levenshtein(&stripped_a, &stripped_b));
    let raw = normalized_levenshtein(&prepared_a, &prepared_b);

    (CORE_WEIGHT * core + RAW_WEIGHT * raw).clamp(0.0, 1.0)
}

/// 비교용 정규화 (NFKC, 소문자, 구두점 → 공백, 연속 공백 축약)
pub fn prepare(s: &str) -> String {
    let folded: String = s
        .nfkc()
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 연도 토큰 판정: 4자리 숫자, 뒤에 `년` 이 붙어도 허용
fn is_year_token(token: &str) -> bool {
    let digits = token.strip_suffix('년').unwrap_or(token);
    digits.len() == 4 && digits.bytes().all(|b| b.is_ascii_digit())
}

/// 연도 토큰을 제거한다. 전부 연도라면 원문 유지
fn strip_years(prepared: &str) -> String {
    let kept: Vec<&str> = prepared
        .split_whitespace()
        .filter(|t| !is_year_token(t))
        .collect();

    if kept.is_empty() {
        prepared.to_string()
    } else {
        kept.join(" ")
    }
}

/// 토큰 집합 비율
///
/// 공통 토큰과 각자의 나머지 토큰을 정렬해 이어 붙인 뒤
/// 세 조합의 정규화 편집거리 중 최댓값을 쓴다. 한쪽 토큰이 다른 쪽에
/// 모두 포함되면 1.0 이 된다.
fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let common = tokens_a.intersection(&tokens_b).copied().collect::<Vec<_>>().join(" ");
    let only_a = tokens_a.difference(&tokens_b).copied().collect::<Vec<_>>().join(" ");
    let only_b = tokens_b.difference(&tokens_a).copied().collect::<Vec<_>>().join(" ");

    let with_a = join_tokens(&common, &only_a);
    let with_b = join_tokens(&common, &only_b);

    let mut best = normalized_levenshtein(&with_a, &with_b);
    if !common.is_empty() {
        best = best
            .max(normalized_levenshtein(&common, &with_a))
            .max(normalized_levenshtein(&common, &with_b));
    }
    best
}

fn join_tokens(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail.to_string(),
        (_, true) => head.to_string(),
        _ => format!("{} {}", head, tail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflexive() {
        for s in ["Waste Expo", "미국 폐기물 전시회", "CES", "  padded  ", "!!!"] {
            assert_eq!(similarity(s, s), 1.0, "input: {:?}", s);
        }
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(similarity("", ""), 0.0);
        assert_eq!(similarity("Waste Expo", ""), 0.0);
        assert_eq!(similarity("   ", "Waste Expo"), 0.0);
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert_eq!(similarity("WASTE EXPO", " waste expo "), 1.0);
        assert_eq!(similarity("Waste-Expo", "waste expo"), 1.0);
    }

    #[test]
    fn test_full_width_folding() {
        assert_eq!(similarity("ＷＡＳＴＥ ＥＸＰＯ", "Waste Expo"), 1.0);
    }

    #[test]
    fn test_year_tolerance() {
        assert!(similarity("Waste Expo", "2025 Waste Expo") > 0.78);
        assert!(similarity("Waste Expo 2026", "Waste Expo 2025") > 0.78);
        assert!(similarity("2025년 폐기물 전시회", "폐기물 전시회") > 0.78);
    }

    #[test]
    fn test_partial_containment() {
        let score = similarity("2025 미국 폐기물 재활용 전시회", "미국 폐기물 전시회");
        assert!(score > 0.8, "score: {}", score);
    }

    #[test]
    fn test_unrelated_names_score_low() {
        assert!(similarity("Waste Expo", "CES") < 0.5);
        assert!(similarity("미국 폐기물 전시회", "독일 자동차 부품 전시회") < 0.6);
    }

    #[test]
    fn test_bounded_and_symmetric() {
        let pairs = [
            ("Waste Expo", "WasteExpo"),
            ("Las Vegas Convention Center", "LVCC"),
            ("2025", "2026"),
        ];
        for (a, b) in pairs {
            let ab = similarity(a, b);
            let ba = similarity(b, a);
            assert!((0.0..=1.0).contains(&ab));
            assert!((ab - ba).abs() < 1e-12);
        }
    }

    #[test]
    fn test_prepare() {
        assert_eq!(prepare("  Waste   Expo (WE) "), "waste expo we");
        assert_eq!(prepare("물류&운송"), "물류 운송");
    }

    #[test]
    fn test_strip_years() {
        assert_eq!(strip_years("2025 waste expo"), "waste expo");
        assert_eq!(strip_years("2025년 폐기물 전시회"), "폐기물 전시회");
        assert_eq!(strip_years("2025"), "2025");
        assert_eq!(strip_years("expo 20255"), "expo 20255");
    }

    #[test]
    fn test_token_set_ratio_subset() {
        assert_eq!(token_set_ratio("미국 폐기물 재활용 전시회", "미국 폐기물 전시회"), 1.0);
        assert_eq!(token_set_ratio("", "abc"), 0.0);
    }
}
