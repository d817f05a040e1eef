use crate::config::Cleanup;
use anyhow::{Context, Result};
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Per-line whitespace and character hygiene. Runs on every line, converted
/// or not, and is idempotent.
pub struct Cleaner {
    cfg: Cleanup,
    punct_re: Regex,
}

impl Cleaner {
    pub fn new(cfg: &Cleanup) -> Result<Self> {
        // Space squeezed out before closing punctuation, danda included.
        let punct_re =
            Regex::new(r"\s+([.,;:?!\u{0964}])").with_context(|| "compiling punctuation regex")?;
        Ok(Self {
            cfg: cfg.clone(),
            punct_re,
        })
    }

    pub fn clean_line(&self, content: &str) -> String {
        let mut s: String = if self.cfg.strip_control_chars {
            content
                .chars()
                .filter(|&ch| ch == '\t' || !ch.is_control())
                .collect()
        } else {
            content.to_string()
        };

        if self.cfg.normalize_unicode {
            // NFC keeps Bengali matras composed (e.g. ে + া becomes ো).
            s = s.nfc().collect();
        }

        if self.cfg.collapse_whitespace {
            s = collapse_whitespace(&s);
        }

        if self.cfg.tighten_punctuation {
            s = self.punct_re.replace_all(&s, "$1").into_owned();
        }

        if self.cfg.trim_edges {
            s = s.trim().to_string();
        }

        s
    }
}

fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_ws = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !in_ws {
                out.push(' ');
            }
            in_ws = true;
        } else {
            out.push(ch);
            in_ws = false;
        }
    }
    out
}
