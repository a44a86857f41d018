//! 날짜 정규화
//!
//! 느슨한 형식의 날짜를 `YYYY-MM-DD` 로 맞춘다.
//! - `2025.05.06` / `2025-05-06` / `2025/5/6` / `2025년 5월 6일`
//! - `2025.05` / `2025년 5월` → 일은 `01`
//! - 인식하지 못한 값은 그대로 통과

use regex::Regex;

lazy_static::lazy_static! {
    static ref FULL_DATE_RE: Regex =
        Regex::new(r"([0-9]{4})\s*[.\-/\s년]\s*([0-9]{1,2})\s*[.\-/\s월]\s*([0-9]{1,2})").unwrap();
    static ref YEAR_MONTH_RE: Regex =
        Regex::new(r"([0-9]{4})\s*[.\-/\s년]\s*([0-9]{1,2})").unwrap();
    static ref ISO_DATE_RE: Regex = Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap();
}

/// 날짜 문자열을 정규화한다
///
/// 달력 검증은 하지 않는다 (`2025-13-40` 도 그대로 통과).
///
/// # Examples
/// ```
/// use exhibit_recon_common::normalize_date;
///
/// assert_eq!(normalize_date("2025.5.6"), "2025-05-06");
/// assert_eq!(normalize_date("2025년 5월"), "2025-05-01");
/// assert_eq!(normalize_date("TBD"), "TBD");
/// ```
pub fn normalize_date(raw: &str) -> String {
    let s = raw.trim();
    if s.is_empty() {
        return String::new();
    }

    if let Some(caps) = FULL_DATE_RE.captures(s) {
        return format!("{}-{:0>2}-{:0>2}", &caps[1], &caps[2], &caps[3]);
    }

    if let Some(caps) = YEAR_MONTH_RE.captures(s) {
        return format!("{}-{:0>2}-01", &caps[1], &caps[2]);
    }

    s.to_string()
}

/// 정규화된 `YYYY-MM-DD` 형식인지
pub fn is_iso_date(s: &str) -> bool {
    ISO_DATE_RE.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_full_dates() {
        for raw in ["2025.05.06", "2025-05-06", "2025/05/06", "2025/5/6", "2025년 5월 6일", "2025년05월06일"] {
            assert_eq!(normalize_date(raw), "2025-05-06", "input: {}", raw);
        }
    }

    #[test]
    fn test_normalize_with_surrounding_text() {
        assert_eq!(normalize_date("2027년 05월 03일(월)"), "2027-05-03");
        assert_eq!(normalize_date("  2025.05.06 - 2025.05.08 "), "2025-05-06");
        assert_eq!(normalize_date("2025. 5. 6."), "2025-05-06");
    }

    #[test]
    fn test_normalize_year_month() {
        assert_eq!(normalize_date("2025.05"), "2025-05-01");
        assert_eq!(normalize_date("2025-5"), "2025-05-01");
        assert_eq!(normalize_date("2025년 5월"), "2025-05-01");
    }

    #[test]
    fn test_normalize_empty_and_blank() {
        assert_eq!(normalize_date(""), "");
        assert_eq!(normalize_date("   "), "");
    }

    #[test]
    fn test_normalize_pass_through() {
        assert_eq!(normalize_date("TBD"), "TBD");
        assert_eq!(normalize_date("1968"), "1968");
        assert_eq!(normalize_date("1968 년"), "1968 년");
        assert_eq!(normalize_date(" 매년 5월 "), "매년 5월");
    }

    #[test]
    fn test_no_calendar_validation() {
        assert_eq!(normalize_date("2025.13.40"), "2025-13-40");
    }

    #[test]
    fn test_is_iso_date() {
        assert!(is_iso_date("2025-05-06"));
        assert!(!is_iso_date("2025-5-6"));
        assert!(!is_iso_date(""));
        assert!(is_iso_date(&normalize_date("2025년 5월 6일")));
    }
}
