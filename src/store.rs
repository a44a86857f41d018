//! 추출 결과 저장소
//!
//! 추출 결과는 envelope 형식 JSON 으로 한 파일씩 저장하고,
//! 비교할 때는 파일 하나 또는 폴더 전체를 저장 집합으로 읽는다.

use crate::error::{AppError, Result};
use crate::extractor::ExtractionEnvelope;
use chrono::{DateTime, Utc};
use exhibit_recon_common::{load_records, LoadedRecords};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 저장 파일명: `exhibition_<시각>_<출처 해시 8자리>.json`
pub fn envelope_file_name(source_url: &str, at: DateTime<Utc>) -> String {
    let digest = Sha256::digest(source_url.trim().as_bytes());
    let short = hex::encode(digest);
    format!("exhibition_{}_{}.json", at.format("%Y%m%d_%H%M%S"), &short[..8])
}

/// envelope 을 폴더에 저장하고 경로를 돌려준다
pub fn save_envelope(dir: &Path, envelope: &ExtractionEnvelope) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let path = dir.join(envelope_file_name(&envelope.source_url, Utc::now()));
    let file = File::create(&path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, envelope)?;

    tracing::debug!(path = %path.display(), "envelope saved");
    Ok(path)
}

/// 폴더 바로 아래의 `.json` 파일 목록 (이름순)
pub fn json_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file())
        .filter(|p| {
            p.extension()
                .map(|ext| ext.eq_ignore_ascii_case("json"))
                .unwrap_or(false)
        })
        .collect();

    files.sort();
    files
}

/// 저장 집합 읽기
///
/// - 파일이면 그 파일의 레코드
/// - 폴더면 바로 아래 `.json` 파일들을 이름순으로 이어 붙인다
///   (원소 번호는 파일 경계를 넘어 이어진다)
///
/// 파일 하나라도 깨져 있으면 전체가 실패한다.
pub fn load_stored_set(path: &Path) -> Result<LoadedRecords> {
    if !path.exists() {
        return Err(AppError::FileNotFound(path.display().to_string()));
    }

    if path.is_file() {
        return Ok(load_records(path)?);
    }

    let mut stored = LoadedRecords::default();
    for file in json_files(path) {
        let loaded = load_records(&file)?;
        tracing::debug!(file = %file.display(), records = loaded.len(), "stored file loaded");
        let offset = stored.total();
        stored.extend(loaded, offset);
    }

    Ok(stored)
}
