use serde::{Deserialize, Serialize};

/// One unit of extracted text. Content is replaced wholesale by
/// normalization; a Line is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub page: u32,
    pub content: String,
}

/// Ordered container of lines from one extracted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub source: String,
    pub lines: Vec<Line>,
    paginated: bool,
}

impl Document {
    pub fn new(source: &str, lines: Vec<Line>) -> Self {
        let paginated = lines.iter().any(|l| l.page > 1);
        Self {
            source: source.to_string(),
            lines,
            paginated,
        }
    }

    /// Same source and pagination, new content. Used by normalization to
    /// produce the output document.
    pub fn with_lines(&self, lines: Vec<Line>) -> Self {
        Self {
            source: self.source.clone(),
            lines,
            paginated: self.paginated,
        }
    }

    /// Parse the extraction collaborator's on-disk format: plain text with
    /// `--- Page N ---` separator lines. Marker lines set the page tag for
    /// the lines that follow and are not themselves Lines.
    pub fn from_text(source: &str, text: &str) -> Self {
        let mut lines = Vec::new();
        let mut page = 1u32;
        let mut paginated = false;

        for raw in text.lines() {
            if let Some(n) = parse_page_marker(raw) {
                page = n;
                paginated = true;
                continue;
            }
            lines.push(Line {
                page,
                content: raw.to_string(),
            });
        }

        Self {
            source: source.to_string(),
            lines,
            paginated,
        }
    }

    /// Render back to the on-disk format, re-emitting page markers at page
    /// transitions when the input carried them.
    pub fn to_text(&self) -> String {
        let mut out: Vec<String> = Vec::with_capacity(self.lines.len());
        let mut current_page: Option<u32> = None;

        for line in &self.lines {
            if self.paginated && current_page != Some(line.page) {
                out.push(format!("--- Page {} ---", line.page));
                current_page = Some(line.page);
            }
            out.push(line.content.clone());
        }
        out.join("\n")
    }

    pub fn line_count(&self) -> u64 {
        self.lines.len() as u64
    }

    pub fn page_count(&self) -> u32 {
        self.lines.iter().map(|l| l.page).max().unwrap_or(0)
    }

    pub fn is_paginated(&self) -> bool {
        self.paginated
    }
}

fn parse_page_marker(line: &str) -> Option<u32> {
    let trimmed = line.trim();
    let rest = trimmed.strip_prefix("--- Page ")?;
    let num = rest.strip_suffix(" ---")?;
    num.parse::<u32>().ok()
}
