use crate::config::Metadata as MetadataCfg;
use crate::detect::ProfileKind;
use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parties {
    pub plaintiff: Option<String>,
    pub defendant: Option<String>,
}

/// Structured fields pulled from a legal case document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseMetadata {
    pub case_number: Option<String>,
    pub case_type: Option<String>,
    pub district: Option<String>,
    pub court: Option<String>,
    pub judges: Vec<String>,
    pub parties: Parties,
    pub hearing_date: Option<String>,
    pub judgment_date: Option<String>,
    pub citations: Vec<String>,
    pub has_bengali: bool,
    pub original_encoding: Option<ProfileKind>,
    pub converted_to_unicode: bool,
}

const CASE_NUMBER_PATTERNS: &[&str] = &[
    r"(?i)Death Reference No[.\s]+\d+\s+of\s+\d+",
    r"(?i)Criminal Appeal No[.\s]+\d+\s+of\s+\d+",
    r"(?i)Civil Appeal No[.\s]+\d+\s+of\s+\d+",
    r"(?i)Criminal Revision No[.\s]+\d+\s+of\s+\d+",
    r"(?i)Civil Revision No[.\s]+\d+\s+of\s+\d+",
    r"(?i)Writ Petition No[.\s]+\d+\s+of\s+\d+",
    r"(?i)Case No[.\s]+\d+[/\s]+\d+",
];

const CASE_TYPES: &[&str] = &[
    "Death Reference",
    "Criminal Appeal",
    "Civil Appeal",
    "Criminal Revision",
    "Civil Revision",
    "Writ Petition",
];

const COURT_PATTERNS: &[&str] = &[
    r"Supreme Court of Bangladesh[^\n]*",
    r"High Court Division[^\n]*",
    r"Appellate Division[^\n]*",
];

const JUDGE_PATTERNS: &[&str] = &[
    r"(?m)Hon'ble\s+Mr\.\s*Justice\s+([A-Za-z .]+?)(?:\n|$)",
    r"(?m)Mr\.\s*Justice\s+([A-Za-z .]+?)(?:\n|And|$)",
    r"(?m)Justice\s+([A-Za-z .]+?)(?:\n|And|$)",
];

const HEARING_PATTERNS: &[&str] = &[
    r"Heard On:\s*([0-9]{2}\.[0-9]{2}\.[0-9]{4}(?:\s+and\s+[0-9]{2}\.[0-9]{2}\.[0-9]{4})?)",
    r"Date of Hearing:\s*([0-9]{2}[/.-][0-9]{2}[/.-][0-9]{4})",
];

const JUDGMENT_PATTERNS: &[&str] = &[
    r"Judgment Delivered On:\s*([0-9]{2}\.[0-9]{2}\.[0-9]{4})",
    r"Date of Judgment:\s*([0-9]{2}[/.-][0-9]{2}[/.-][0-9]{4})",
];

const CITATION_PATTERN: &str =
    r"\b\d{1,3}\s+(?:DLR|BLD|BLC|MLR|ALR|ADC|SCOB)\s*(?:\(AD\))?\s+\d{1,4}\b";

/// Regex pulls over normalized text. `filename` (the input stem) is the
/// fallback source for the case number.
pub fn extract(cfg: &MetadataCfg, text: &str, filename: &str) -> Result<CaseMetadata> {
    let mut md = CaseMetadata::default();

    for pattern in CASE_NUMBER_PATTERNS {
        let re = Regex::new(pattern).with_context(|| "compiling case number pattern")?;
        if let Some(m) = re.find(text) {
            md.case_number = Some(m.as_str().trim().to_string());
            break;
        }
    }
    if md.case_number.is_none() {
        let re = Regex::new(r"\d+_[A-Za-z]+_").with_context(|| "compiling filename pattern")?;
        if let Some(m) = re.find(filename) {
            md.case_number = Some(m.as_str().trim_end_matches('_').to_string());
        }
    }

    let lower = text.to_lowercase();
    for case_type in CASE_TYPES {
        if lower.contains(&case_type.to_lowercase()) {
            md.case_type = Some((*case_type).to_string());
            break;
        }
    }

    for pattern in COURT_PATTERNS {
        let re = Regex::new(pattern).with_context(|| "compiling court pattern")?;
        if let Some(m) = re.find(text) {
            md.court = Some(m.as_str().trim().to_string());
            break;
        }
    }

    let re = Regex::new(r"District:\s*([A-Za-z ]+)\.?")
        .with_context(|| "compiling district pattern")?;
    if let Some(c) = re.captures(text) {
        md.district = Some(c[1].trim().to_string());
    }

    md.judges = extract_judges(text, cfg.scan_window_chars, cfg.max_judges)?;
    md.parties = extract_parties(text)?;

    for pattern in HEARING_PATTERNS {
        let re = Regex::new(pattern).with_context(|| "compiling hearing pattern")?;
        if let Some(c) = re.captures(text) {
            md.hearing_date = Some(c[1].trim().to_string());
            break;
        }
    }
    for pattern in JUDGMENT_PATTERNS {
        let re = Regex::new(pattern).with_context(|| "compiling judgment pattern")?;
        if let Some(c) = re.captures(text) {
            md.judgment_date = Some(c[1].trim().to_string());
            break;
        }
    }

    md.citations = extract_citations(text, cfg.max_citations)?;

    Ok(md)
}

fn extract_judges(text: &str, window_chars: usize, max: usize) -> Result<Vec<String>> {
    // The cause list sits at the top of a judgment; searching further down
    // picks up quoted precedent instead.
    let head = head_chars(text, window_chars);
    let mut judges = Vec::new();

    for pattern in JUDGE_PATTERNS {
        let re = Regex::new(pattern).with_context(|| "compiling judge pattern")?;
        for c in re.captures_iter(head) {
            let name = c[1].trim().trim_end_matches('.').trim().to_string();
            if name.is_empty() {
                continue;
            }
            if !judges.contains(&name) {
                judges.push(name);
            }
        }
    }

    judges.truncate(max);
    Ok(judges)
}

fn extract_parties(text: &str) -> Result<Parties> {
    let re = Regex::new(r"(?im)([A-Za-z .]+?)\s+-?\s*Versus\s*-?\s*([A-Za-z .]+?)(?:\n|$)")
        .with_context(|| "compiling parties pattern")?;
    let mut parties = Parties::default();
    if let Some(c) = re.captures(text) {
        parties.plaintiff = non_empty(c[1].trim());
        parties.defendant = non_empty(c[2].trim());
    }
    Ok(parties)
}

fn extract_citations(text: &str, max: usize) -> Result<Vec<String>> {
    let re = Regex::new(CITATION_PATTERN).with_context(|| "compiling citation pattern")?;
    let mut citations = Vec::new();
    for m in re.find_iter(text) {
        let c = m.as_str().to_string();
        if !citations.contains(&c) {
            citations.push(c);
        }
        if citations.len() >= max {
            break;
        }
    }
    Ok(citations)
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// First `n` characters of `s`, cut on a char boundary.
fn head_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
