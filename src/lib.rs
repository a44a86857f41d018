//! exhibit-recon
//!
//! 전시회 정보 추출(LLM)과 저장 레코드 비교 CLI

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod extractor;
pub mod logging;
pub mod store;
