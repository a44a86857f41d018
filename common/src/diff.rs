//! 필드 단위 구조 비교
//!
//! 퍼지 매칭과 무관한 정확 비교. 매칭이 확정된 두 레코드,
//! 또는 매칭 없이 직접 비교하는 두 레코드에 사용한다.

use crate::types::{ExhibitionRecord, Field};
use serde::Serialize;

/// 한 필드의 비교 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldComparison {
    pub field: Field,
    pub value_a: String,
    pub value_b: String,
    pub equal: bool,
}

impl FieldComparison {
    /// 표시용 필드 라벨
    pub fn label(&self) -> &'static str {
        self.field.key()
    }
}

/// 레코드 전체 비교 결과 (필드 선언 순서)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldDiff {
    pub fields: Vec<FieldComparison>,
}

impl FieldDiff {
    pub fn iter(&self) -> impl Iterator<Item = &FieldComparison> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// 모든 필드가 일치하는지
    pub fn all_equal(&self) -> bool {
        self.fields.iter().all(|c| c.equal)
    }

    /// 불일치 필드만
    pub fn mismatches(&self) -> impl Iterator<Item = &FieldComparison> {
        self.fields.iter().filter(|c| !c.equal)
    }

    pub fn mismatch_count(&self) -> usize {
        self.mismatches().count()
    }

    pub fn get(&self, field: Field) -> Option<&FieldComparison> {
        self.fields.iter().find(|c| c.field == field)
    }
}

/// 두 레코드를 필드별로 비교한다 (앞뒤 공백 제거 후 바이트 일치)
pub fn compare_records(a: &ExhibitionRecord, b: &ExhibitionRecord) -> FieldDiff {
    let fields = Field::ALL
        .iter()
        .map(|&field| {
            let value_a = a.get(field).trim();
            let value_b = b.get(field).trim();
            FieldComparison {
                field,
                value_a: value_a.to_string(),
                value_b: value_b.to_string(),
                equal: value_a == value_b,
            }
        })
        .collect();

    FieldDiff { fields }
}
