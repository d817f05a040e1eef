use crate::{
    config::Config,
    detect,
    glyphmap::{GlyphClass, GlyphMapping},
};
use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

/// Result of converting one line or word.
#[derive(Debug, Clone, Default)]
pub struct Converted {
    pub text: String,
    pub unmapped: u32,
    pub malformed: bool,
}

pub struct Converter<'m> {
    mapping: &'m GlyphMapping,
    markers: HashSet<char>,
    marker: String,
    nfc: bool,
    convert_unmarked: bool,
    hints: Vec<String>,
    exempt_patterns: Vec<Regex>,
    exempt_words: HashSet<String>,
}

impl<'m> Converter<'m> {
    pub fn new(cfg: &Config, mapping: &'m GlyphMapping) -> Result<Self> {
        let exempt_patterns = cfg
            .conversion
            .latin_exempt_patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()
            .with_context(|| "compiling latin_exempt_patterns")?;

        let exempt_words = cfg
            .conversion
            .latin_exempt_words
            .iter()
            .map(|w| w.to_ascii_lowercase())
            .collect();

        Ok(Self {
            mapping,
            markers: cfg.detection.marker_chars.chars().collect(),
            marker: cfg.conversion.unmapped_marker.clone(),
            nfc: cfg.conversion.nfc,
            convert_unmarked: cfg.conversion.convert_unmarked_words,
            hints: cfg.detection.hint_patterns.clone(),
            exempt_patterns,
            exempt_words,
        })
    }

    /// Convert a line already classified LegacyGlyphEncoded. Conversion is
    /// word-by-word so embedded Latin tokens (citations, abbreviations)
    /// survive untouched.
    pub fn convert_line(&self, content: &str) -> Converted {
        let mut out = String::with_capacity(content.len() * 2);
        let mut unmapped = 0u32;
        let mut malformed = false;

        for chunk in split_chunks(content) {
            match chunk {
                Chunk::Whitespace(s) => out.push_str(s),
                Chunk::Word(w) => {
                    if self.should_convert(w) {
                        let seg = self.convert_word(w);
                        out.push_str(&seg.text);
                        unmapped += seg.unmapped;
                        malformed |= seg.malformed;
                    } else {
                        out.push_str(w);
                    }
                }
            }
        }

        let text = if self.nfc {
            out.nfc().collect()
        } else {
            out
        };
        Converted {
            text,
            unmapped,
            malformed,
        }
    }

    fn should_convert(&self, word: &str) -> bool {
        if word.chars().any(|c| self.markers.contains(&c)) {
            return true;
        }
        if self
            .hints
            .iter()
            .any(|h| !h.is_empty() && word.contains(h.as_str()))
        {
            return true;
        }
        if self.is_exempt(word) {
            return false;
        }
        if word.chars().any(detect::is_bangla) {
            return false;
        }
        // Digit/punctuation-only tokens have nothing to convert.
        if !word.chars().any(|c| c.is_ascii_alphabetic() || !c.is_ascii()) {
            return false;
        }
        self.convert_unmarked
    }

    fn is_exempt(&self, word: &str) -> bool {
        let core = word.trim_matches(|c: char| matches!(c, '.' | ',' | ';' | ':' | '(' | ')' | '"'));
        if core.is_empty() {
            return true;
        }
        if self.exempt_words.contains(&core.to_ascii_lowercase()) {
            return true;
        }
        self.exempt_patterns.iter().any(|r| r.is_match(core))
    }

    /// Glyph-unit state machine. Tokens arrive in keystroke (visual) order;
    /// output is logical order: buffered pre-vowels land after their cluster,
    /// reph lands before it.
    fn convert_word(&self, word: &str) -> Converted {
        let mut out = String::with_capacity(word.len() * 2);
        let mut unmapped = 0u32;
        let mut malformed = false;
        // Byte offset in `out` where the open cluster begins, if any.
        let mut cluster: Option<usize> = None;
        // Buffered pre-vowel: (unicode, raw keystrokes for the malformed path).
        let mut pending: Option<(&'static str, &str)> = None;

        let mut rest = word;
        while !rest.is_empty() {
            if let Some((entry, len)) = self.mapping.lookup_at(rest) {
                let raw = &rest[..len];
                match entry.class {
                    GlyphClass::Base => {
                        if cluster.is_some() {
                            if let Some((pre, _)) = pending.take() {
                                out.push_str(pre);
                            }
                        }
                        cluster = Some(out.len());
                        out.push_str(entry.unicode);
                    }
                    GlyphClass::Extension => {
                        if cluster.is_some() {
                            out.push_str(entry.unicode);
                        } else {
                            out.push_str(raw);
                            malformed = true;
                        }
                    }
                    GlyphClass::PreSign => {
                        if cluster.is_some() {
                            if let Some((pre, _)) = pending.take() {
                                out.push_str(pre);
                            }
                            cluster = None;
                        }
                        if let Some((_, old_raw)) = pending.replace((entry.unicode, raw)) {
                            // Two pre-vowels with no consonant between them.
                            out.push_str(old_raw);
                            malformed = true;
                        }
                    }
                    GlyphClass::PostSign => {
                        if cluster.is_some() {
                            if let Some((pre, _)) = pending.take() {
                                out.push_str(pre);
                            }
                            out.push_str(entry.unicode);
                        } else {
                            out.push_str(raw);
                            malformed = true;
                        }
                    }
                    GlyphClass::Reph => {
                        if let Some(start) = cluster {
                            out.insert_str(start, entry.unicode);
                        } else {
                            out.push_str(raw);
                            malformed = true;
                        }
                    }
                    GlyphClass::Literal => {
                        if cluster.is_some() {
                            if let Some((pre, _)) = pending.take() {
                                out.push_str(pre);
                            }
                            cluster = None;
                        }
                        out.push_str(entry.unicode);
                    }
                }
                rest = &rest[len..];
            } else {
                let Some(ch) = rest.chars().next() else { break };
                if cluster.is_some() {
                    if let Some((pre, _)) = pending.take() {
                        out.push_str(pre);
                    }
                    cluster = None;
                }
                if ch.is_ascii() || detect::is_bangla(ch) {
                    // Digits, punctuation, and genuine Bangla pass through.
                    out.push(ch);
                } else {
                    out.push_str(&self.marker);
                    unmapped += 1;
                }
                rest = &rest[ch.len_utf8()..];
            }
        }

        if cluster.is_some() {
            if let Some((pre, _)) = pending.take() {
                out.push_str(pre);
            }
        }
        if let Some((_, raw)) = pending.take() {
            // Dangling pre-vowel at end of word: keep the keystrokes visible.
            out.push_str(raw);
            malformed = true;
        }

        Converted {
            text: out,
            unmapped,
            malformed,
        }
    }
}

enum Chunk<'a> {
    Whitespace(&'a str),
    Word(&'a str),
}

fn split_chunks(s: &str) -> Vec<Chunk<'_>> {
    let mut chunks = Vec::new();
    let mut start = 0usize;
    let mut current_ws: Option<bool> = None;

    for (i, ch) in s.char_indices() {
        let ws = ch.is_whitespace();
        match current_ws {
            None => current_ws = Some(ws),
            Some(prev) if prev != ws => {
                chunks.push(mk_chunk(&s[start..i], prev));
                start = i;
                current_ws = Some(ws);
            }
            _ => {}
        }
    }
    if let Some(prev) = current_ws {
        chunks.push(mk_chunk(&s[start..], prev));
    }
    chunks
}

fn mk_chunk(s: &str, ws: bool) -> Chunk<'_> {
    if ws {
        Chunk::Whitespace(s)
    } else {
        Chunk::Word(s)
    }
}
