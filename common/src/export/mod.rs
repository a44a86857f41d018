//! 출력 코어 (CLI 에서 파일로 쓴다)

#[cfg(feature = "excel")]
pub mod excel_core;
