use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "exhibit-recon")]
#[command(about = "전시회 정보 추출 및 퍼지 매칭 비교 도구", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 상세 로그 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 크롤링된 본문에서 전시회 정보를 추출
    Extract {
        /// 본문 파일 (markdown/text)
        #[arg(required = true)]
        input: PathBuf,

        /// 원본 페이지 URL (출처)
        #[arg(short, long, default_value = "")]
        url: String,

        /// 저장 폴더 (기본: 설정의 output_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 추출 결과를 이 파일/폴더의 레코드와 비교
        #[arg(short, long)]
        compare: Option<PathBuf>,

        /// 파일로 저장하지 않음
        #[arg(long)]
        no_save: bool,
    },

    /// 두 레코드 파일을 퍼지 매칭으로 비교
    Compare {
        /// 비교할 레코드 파일
        #[arg(required = true)]
        left: PathBuf,

        /// 저장 레코드 파일 또는 폴더
        #[arg(required = true)]
        right: PathBuf,

        /// 매칭 임계값 (0.0-1.0)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// 국문명 가중치
        #[arg(long)]
        weight_kr: Option<f64>,

        /// 영문명 가중치
        #[arg(long)]
        weight_en: Option<f64>,

        /// 출력 형식 (markdown/json/xlsx)
        #[arg(short, long, default_value = "markdown")]
        format: ReportFormat,

        /// 출력 파일/폴더 (생략 시 표준출력, xlsx 는 현재 폴더)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 두 파일을 위치 기준으로 필드 비교 (매칭 없음)
    Diff {
        #[arg(required = true)]
        a: PathBuf,

        #[arg(required = true)]
        b: PathBuf,

        /// 출력 형식 (markdown/json)
        #[arg(short, long, default_value = "markdown")]
        format: ReportFormat,
    },

    /// 레코드 파일을 고정 스키마로 정규화
    Normalize {
        /// 입력 JSON 파일
        #[arg(required = true)]
        input: PathBuf,

        /// 출력 파일 (생략 시 표준출력)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 설정 표시/편집
    Config {
        /// 설정 표시
        #[arg(long)]
        show: bool,

        /// 모델 이름 설정
        #[arg(long)]
        set_model: Option<String>,

        /// Ollama chat API URL 설정
        #[arg(long)]
        set_ollama_url: Option<String>,

        /// 매칭 임계값 설정
        #[arg(long)]
        set_threshold: Option<f64>,

        /// 추출 결과 저장 폴더 설정
        #[arg(long)]
        set_output_dir: Option<PathBuf>,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
    Excel,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            "excel" | "xlsx" => Ok(ReportFormat::Excel),
            _ => Err(format!("Unknown format: {}. Use markdown, json, or xlsx", s)),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Markdown => write!(f, "markdown"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Excel => write!(f, "xlsx"),
        }
    }
}
