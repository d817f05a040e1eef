use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub global: Global,
    #[serde(default)]
    pub paths: Paths,
    #[serde(default)]
    pub hashing: Hashing,
    #[serde(default)]
    pub limits: Limits,
    #[serde(default)]
    pub detection: Detection,
    #[serde(default)]
    pub conversion: Conversion,
    #[serde(default)]
    pub cleanup: Cleanup,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub output: Output,
    #[serde(default)]
    pub logging: Logging,
    #[serde(default)]
    pub debug: Debug,
    #[serde(default)]
    pub security: Security,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config: {}", path.display()))?;
        let cfg: Config = toml::from_str(&raw).with_context(|| "parsing TOML")?;
        Ok(cfg)
    }

    /// A stable, normalization-friendly string for hashing.
    pub fn normalized_for_hash(&self) -> String {
        toml::to_string(self).unwrap_or_default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            global: Default::default(),
            paths: Default::default(),
            hashing: Default::default(),
            limits: Default::default(),
            detection: Default::default(),
            conversion: Default::default(),
            cleanup: Default::default(),
            metadata: Default::default(),
            output: Default::default(),
            logging: Default::default(),
            debug: Default::default(),
            security: Default::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Global {
    pub job_name: String,
    pub resume: bool,
    pub print_summary: bool,
}
impl Default for Global {
    fn default() -> Self {
        Self {
            job_name: "default".into(),
            resume: true,
            print_summary: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paths {
    pub out_dir: String,
}
impl Default for Paths {
    fn default() -> Self {
        Self {
            out_dir: "out".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hashing {
    pub mode: String,
    pub fast_window_bytes: u64,
}
impl Default for Hashing {
    fn default() -> Self {
        Self {
            mode: "full_sha256".into(),
            fast_window_bytes: 16 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Limits {
    pub max_input_file_bytes: u64,
    pub max_input_lines: u64,
}
impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_file_bytes: 256 * 1024 * 1024,
            max_input_lines: 500_000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    /// Lines with fewer significant characters than this and no hint hit
    /// fall to Ambiguous rather than LegacyGlyphEncoded.
    pub min_signal_chars: usize,
    /// High-signal glyph codes counted as legacy markers. Deliberately a
    /// curated subset of the font's range: codes that double as ordinary
    /// typography (curly quotes, accented letters) stay out so English text
    /// never trips detection.
    pub marker_chars: String,
    pub marker_min_count: usize,
    pub pattern_weight: u64,
    pub legacy_score_min: u64,
    /// Keystroke sequences common in Bijoy text and implausible in English.
    pub hint_patterns: Vec<String>,
    pub doc_unicode_min: u64,
    pub doc_bijoy_min: u64,
    pub doc_mixed_bijoy_min: u64,
}
impl Default for Detection {
    fn default() -> Self {
        Self {
            min_signal_chars: 6,
            marker_chars: "†‡ˆ‰Š‹ŒšÎ¨©¯¶ï".into(),
            marker_min_count: 2,
            pattern_weight: 10,
            legacy_score_min: 2,
            hint_patterns: vec![
                "Avgvi".into(),
                "Av‡".into(),
                "‡K".into(),
                "Zvwi".into(),
                "Kwi".into(),
                "wQ".into(),
                "gvbyl".into(),
                "ivÎ".into(),
                "UvKv".into(),
                "AvBb".into(),
                "Av`vjZ".into(),
                "Avwg".into(),
                "n‡q".into(),
                "e‡j".into(),
                "miKvi".into(),
                "K‡i".into(),
                "†`k".into(),
            ],
            doc_unicode_min: 100,
            doc_bijoy_min: 30,
            doc_mixed_bijoy_min: 50,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversion {
    pub unmapped_marker: String,
    pub nfc: bool,
    /// Within a legacy line, convert bare-ASCII words that carry no marker or
    /// hint. Matches the original whole-line behavior when true.
    pub convert_unmarked_words: bool,
    pub latin_exempt_patterns: Vec<String>,
    pub latin_exempt_words: Vec<String>,
}
impl Default for Conversion {
    fn default() -> Self {
        Self {
            unmapped_marker: "\u{FFFD}".into(),
            nfc: true,
            convert_unmarked_words: true,
            latin_exempt_patterns: vec![
                "^[0-9][0-9.,/()\\[\\]-]*$".into(),
                "^[A-Z][A-Z0-9.]+$".into(),
                "^(?i:no|vs|v|p|pp)\\.?$".into(),
            ],
            latin_exempt_words: vec![
                "the".into(),
                "of".into(),
                "and".into(),
                "act".into(),
                "section".into(),
                "article".into(),
                "court".into(),
                "justice".into(),
                "appeal".into(),
                "petition".into(),
                "versus".into(),
                "district".into(),
                "page".into(),
                "code".into(),
                "penal".into(),
                "bank".into(),
                "law".into(),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cleanup {
    pub collapse_whitespace: bool,
    pub strip_control_chars: bool,
    pub trim_edges: bool,
    pub tighten_punctuation: bool,
    pub normalize_unicode: bool,
}
impl Default for Cleanup {
    fn default() -> Self {
        Self {
            collapse_whitespace: true,
            strip_control_chars: true,
            trim_edges: true,
            tighten_punctuation: true,
            normalize_unicode: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub enabled: bool,
    /// Judges are scanned within this many characters from the top of the
    /// document, where the cause list sits.
    pub scan_window_chars: usize,
    pub max_judges: usize,
    pub max_citations: usize,
}
impl Default for Metadata {
    fn default() -> Self {
        Self {
            enabled: true,
            scan_window_chars: 3000,
            max_judges: 5,
            max_citations: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Output {
    pub write_text: bool,
    pub write_metadata_json: bool,
    pub write_report_json: bool,
    pub write_index_json: bool,
    pub text_filename: String,
    pub metadata_filename: String,
    pub report_filename: String,
}
impl Default for Output {
    fn default() -> Self {
        Self {
            write_text: true,
            write_metadata_json: true,
            write_report_json: true,
            write_index_json: true,
            text_filename: "normalized.txt".into(),
            metadata_filename: "metadata.json".into(),
            report_filename: "report.json".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logging {
    pub level: String,
    pub json: bool,
    pub write_to_file: bool,
    pub file_path: String,
}
impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".into(),
            json: false,
            write_to_file: true,
            file_path: "".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debug {
    pub dump_effective_config: bool,
}
impl Default for Debug {
    fn default() -> Self {
        Self {
            dump_effective_config: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Security {
    pub reject_url_inputs: bool,
}
impl Default for Security {
    fn default() -> Self {
        Self {
            reject_url_inputs: true,
        }
    }
}
