//! 전시회 매칭 (reconciliation engine)
//!
//! 후보 레코드 하나에 대해 저장된 레코드 집합에서 "같은 전시회"를 찾는다.
//! 점수는 국문명/영문명 유사도의 가중 평균이며, 임계값 미만이면
//! 가장 가까운 레코드가 있어도 매칭 실패로 본다.

use crate::diff::{compare_records, FieldDiff};
use crate::error::{Error, Result};
use crate::similarity::similarity;
use crate::types::ExhibitionRecord;
use serde::{Deserialize, Serialize};

/// 매처 설정
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// 매칭으로 인정하는 최소 점수 (0.0〜1.0)
    pub threshold: f64,
    /// 국문명 가중치
    pub weight_kr: f64,
    /// 영문명 가중치
    pub weight_en: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: 0.78,
            weight_kr: 0.6,
            weight_en: 0.4,
        }
    }
}

impl MatcherConfig {
    /// 설정값 검증
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::InvalidConfig(format!(
                "threshold must be within [0, 1], got {}",
                self.threshold
            )));
        }
        for (name, weight) in [("weight_kr", self.weight_kr), ("weight_en", self.weight_en)] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{} must be a non-negative number, got {}",
                    name, weight
                )));
            }
        }
        if self.weight_kr + self.weight_en <= 0.0 {
            return Err(Error::InvalidConfig(
                "weight_kr + weight_en must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// 매칭 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// 임계값을 넘은 경우에만 채워진다
    pub best: Option<ExhibitionRecord>,
    /// 저장 집합 내 위치
    pub best_index: Option<usize>,
    /// 최고 점수 (임계값 미달이어도 기록)
    pub score: f64,
    pub matched: bool,
}

impl MatchResult {
    fn no_match(score: f64) -> Self {
        Self {
            best: None,
            best_index: None,
            score,
            matched: false,
        }
    }
}

/// 전시회 매처
///
/// 설정만 보유하는 불변 값이므로 여러 비교에 재사용할 수 있다.
#[derive(Debug, Clone)]
pub struct ExhibitionMatcher {
    config: MatcherConfig,
}

impl ExhibitionMatcher {
    pub fn new(config: MatcherConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    /// 두 레코드의 가중 점수 (0.0〜1.0)
    ///
    /// 이름이 비어 있으면 해당 항목은 0으로 계산되어 감점된다.
    pub fn score(&self, candidate: &ExhibitionRecord, stored: &ExhibitionRecord) -> f64 {
        let MatcherConfig { weight_kr, weight_en, .. } = self.config;
        let kr = similarity(&candidate.kr_name, &stored.kr_name);
        let en = similarity(&candidate.en_name, &stored.en_name);

        ((weight_kr * kr + weight_en * en) / (weight_kr + weight_en)).clamp(0.0, 1.0)
    }

    /// 저장 집합에서 가장 잘 맞는 레코드를 찾는다
    ///
    /// 동점이면 앞쪽 레코드가 선택된다.
    pub fn find_best_match(
        &self,
        candidate: &ExhibitionRecord,
        stored_set: &[ExhibitionRecord],
    ) -> MatchResult {
        let mut best: Option<(usize, f64)> = None;

        for (index, stored) in stored_set.iter().enumerate() {
            let score = self.score(candidate, stored);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((index, score)),
            }
        }

        let Some((index, score)) = best else {
            return MatchResult::no_match(0.0);
        };

        tracing::debug!(
            candidate = candidate.display_name(),
            best_index = index,
            score,
            threshold = self.config.threshold,
            "best match candidate"
        );

        if score < self.config.threshold {
            return MatchResult::no_match(score);
        }

        MatchResult {
            best: Some(stored_set[index].clone()),
            best_index: Some(index),
            score,
            matched: true,
        }
    }

    /// 필드별 비교 (퍼지 매칭과 무관)
    pub fn compare_records(&self, a: &ExhibitionRecord, b: &ExhibitionRecord) -> FieldDiff {
        compare_records(a, b)
    }
}
