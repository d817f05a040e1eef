use crate::{config::Detection, document::Document};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncodingVerdict {
    Unicode,
    LegacyGlyphEncoded,
    Ambiguous,
}

/// Raw per-line signals the verdict derives from. Pure function of content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineSignals {
    pub significant_chars: usize,
    pub bangla_chars: usize,
    pub marker_chars: usize,
    pub hint_hits: usize,
    pub score: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    Unicode,
    Bijoy,
    Mixed,
}

/// Whole-document encoding summary, aggregated over every line before any
/// conversion runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentProfile {
    pub has_bengali: bool,
    pub encoding: Option<ProfileKind>,
    pub unicode_chars: u64,
    pub bijoy_score: u64,
    pub total_chars: u64,
}

pub struct Detector {
    cfg: Detection,
    markers: HashSet<char>,
}

impl Detector {
    pub fn new(cfg: &Detection) -> Self {
        Self {
            cfg: cfg.clone(),
            markers: cfg.marker_chars.chars().collect(),
        }
    }

    pub fn signals(&self, content: &str) -> LineSignals {
        let mut significant = 0usize;
        let mut bangla = 0usize;
        let mut markers = 0usize;

        for ch in content.chars() {
            if ch.is_whitespace() {
                continue;
            }
            significant += 1;
            if is_bangla(ch) {
                bangla += 1;
            }
            if self.markers.contains(&ch) {
                markers += 1;
            }
        }

        let hints = self
            .cfg
            .hint_patterns
            .iter()
            .filter(|p| !p.is_empty() && content.contains(p.as_str()))
            .count();

        LineSignals {
            significant_chars: significant,
            bangla_chars: bangla,
            marker_chars: markers,
            hint_hits: hints,
            score: markers as u64 + self.cfg.pattern_weight * hints as u64,
        }
    }

    /// Classify one line. Biased toward false negatives: weak or conflicting
    /// signal lands on Ambiguous, which downstream treats as pass-through,
    /// because mis-converting valid Unicode is harder to spot than leaving
    /// legacy text unconverted.
    pub fn classify(&self, content: &str) -> EncodingVerdict {
        let s = self.signals(content);

        if s.significant_chars == 0 || s.score == 0 {
            return EncodingVerdict::Unicode;
        }
        // Already-converted lines carry Bangla codepoints and at most stray
        // markers; never reclassify them as legacy.
        if s.bangla_chars > 0 && s.marker_chars < self.cfg.marker_min_count {
            return EncodingVerdict::Unicode;
        }
        if s.score >= self.cfg.legacy_score_min
            && (s.marker_chars >= self.cfg.marker_min_count || s.hint_hits > 0)
        {
            if s.significant_chars < self.cfg.min_signal_chars && s.hint_hits == 0 {
                return EncodingVerdict::Ambiguous;
            }
            return EncodingVerdict::LegacyGlyphEncoded;
        }
        EncodingVerdict::Ambiguous
    }

    pub fn profile(&self, doc: &Document) -> DocumentProfile {
        let mut unicode_chars = 0u64;
        let mut bijoy_score = 0u64;
        let mut total_chars = 0u64;

        for line in &doc.lines {
            let s = self.signals(&line.content);
            unicode_chars += s.bangla_chars as u64;
            bijoy_score += s.score;
            total_chars += line.content.chars().count() as u64;
        }

        let encoding = if unicode_chars > self.cfg.doc_unicode_min
            && bijoy_score > self.cfg.doc_mixed_bijoy_min
        {
            Some(ProfileKind::Mixed)
        } else if unicode_chars > self.cfg.doc_unicode_min {
            Some(ProfileKind::Unicode)
        } else if bijoy_score > self.cfg.doc_bijoy_min {
            Some(ProfileKind::Bijoy)
        } else {
            None
        };

        DocumentProfile {
            has_bengali: encoding.is_some(),
            encoding,
            unicode_chars,
            bijoy_score,
            total_chars,
        }
    }
}

pub fn is_bangla(ch: char) -> bool {
    ('\u{0980}'..='\u{09FF}').contains(&ch)
}
