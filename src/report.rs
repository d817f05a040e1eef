use crate::{detect::DocumentProfile, metadata::CaseMetadata};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    pub path: String,
    pub file_bytes: u64,
    pub line_count: u64,
    pub page_count: u32,
}

/// Per-document normalization accounting. Converted + passed_through +
/// ambiguous always equals total; no line is ever dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTotals {
    pub total: u64,
    pub converted: u64,
    pub passed_through: u64,
    pub ambiguous: u64,
    pub unmapped_glyphs: u64,
    pub partially_normalized: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobReport {
    pub input: InputInfo,
    pub profile: DocumentProfile,
    pub lines: LineTotals,
    pub metadata: CaseMetadata,
}
