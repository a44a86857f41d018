//! Exhibit Recon Common Library
//!
//! 전시회 레코드 정규화와 퍼지 매칭 코어. CLI 에서 공유한다.

pub mod types;
pub mod error;
pub mod date;
pub mod canonical;
pub mod similarity;
pub mod diff;
pub mod matcher;
pub mod loader;
pub mod report;
pub mod parser;
pub mod prompts;
pub mod export;

pub use types::{ExhibitionRecord, Field, FIELD_COUNT};
pub use error::{Error, Result};
pub use date::{normalize_date, is_iso_date};
pub use canonical::{canonicalize_record, canonicalize_value, value_to_text};
pub use similarity::similarity;
pub use diff::{compare_records, FieldComparison, FieldDiff};
pub use matcher::{ExhibitionMatcher, MatchResult, MatcherConfig};
pub use loader::{load_records, parse_records, IndexedRecord, LoadedRecords, SkippedRecord};
pub use report::{diff_files, diff_positional, ComparisonReport, PositionalDiff, ReportEntry, ReportSummary};
pub use parser::{extract_json_object, parse_extraction_response};
