use crate::error::{AppError, Result};
use exhibit_recon_common::MatcherConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/api/chat";
pub const DEFAULT_MODEL: &str = "llama3.1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ollama_url: String,
    pub model: String,
    pub num_ctx: u32,
    pub temperature: f32,
    pub timeout_seconds: u64,
    pub threshold: f64,
    pub weight_kr: f64,
    pub weight_en: f64,
    /// 추출 결과 저장 폴더
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let matcher = MatcherConfig::default();
        Self {
            ollama_url: DEFAULT_OLLAMA_URL.into(),
            model: DEFAULT_MODEL.into(),
            num_ctx: 128_000,
            temperature: 0.4,
            timeout_seconds: 180,
            threshold: matcher.threshold,
            weight_kr: matcher.weight_kr,
            weight_en: matcher.weight_en,
            output_dir: PathBuf::from("extracted"),
        }
    }
}

impl Config {
    /// 설정 파일을 읽고 환경변수를 반영한다
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        let mut config = Self::load_from(&config_path)?;
        config.apply_env();
        Ok(config)
    }

    /// 지정 경로에서 읽기 (없으면 기본값)
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AppError::Config("홈 디렉터리를 찾을 수 없습니다".into()))?;
        Ok(home.join(".config").join("exhibit-recon").join("config.json"))
    }

    /// 환경변수 우선 (OLLAMA_URL, OLLAMA_MODEL)
    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("OLLAMA_URL") {
            if !url.trim().is_empty() {
                self.ollama_url = url;
            }
        }
        if let Ok(model) = std::env::var("OLLAMA_MODEL") {
            if !model.trim().is_empty() {
                self.model = model;
            }
        }
    }

    /// 매처 설정 (CLI 값이 있으면 우선)
    pub fn matcher_config(
        &self,
        threshold: Option<f64>,
        weight_kr: Option<f64>,
        weight_en: Option<f64>,
    ) -> MatcherConfig {
        MatcherConfig {
            threshold: threshold.unwrap_or(self.threshold),
            weight_kr: weight_kr.unwrap_or(self.weight_kr),
            weight_en: weight_en.unwrap_or(self.weight_en),
        }
    }
}
