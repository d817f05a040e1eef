use crate::{
    cleanup::Cleaner,
    config::Config,
    convert::Converter,
    detect::{Detector, EncodingVerdict},
    document::{Document, Line},
    glyphmap::GlyphMapping,
    report::LineTotals,
};
use anyhow::Result;
use tracing::debug;

/// Classify-then-convert orchestration over one document. Line count and
/// order are preserved; per-line failures degrade to best-effort content and
/// land in the totals instead of aborting the run.
pub struct Normalizer<'m> {
    detector: Detector,
    converter: Converter<'m>,
    cleaner: Cleaner,
}

impl<'m> Normalizer<'m> {
    pub fn new(cfg: &Config, mapping: &'m GlyphMapping) -> Result<Self> {
        Ok(Self {
            detector: Detector::new(&cfg.detection),
            converter: Converter::new(cfg, mapping)?,
            cleaner: Cleaner::new(&cfg.cleanup)?,
        })
    }

    pub fn detector(&self) -> &Detector {
        &self.detector
    }

    pub fn normalize(&self, doc: &Document) -> (Document, LineTotals) {
        let mut totals = LineTotals::default();
        let mut lines = Vec::with_capacity(doc.lines.len());

        for line in &doc.lines {
            totals.total += 1;
            let verdict = self.detector.classify(&line.content);

            let content = match verdict {
                EncodingVerdict::LegacyGlyphEncoded => {
                    let converted = self.converter.convert_line(&line.content);
                    totals.converted += 1;
                    totals.unmapped_glyphs += converted.unmapped as u64;
                    if converted.malformed {
                        totals.partially_normalized += 1;
                        debug!(page = line.page, "partially normalized line");
                    }
                    converted.text
                }
                EncodingVerdict::Ambiguous => {
                    // Low-confidence signal: leave the content alone rather
                    // than risk corrupting valid text.
                    totals.ambiguous += 1;
                    line.content.clone()
                }
                EncodingVerdict::Unicode => {
                    totals.passed_through += 1;
                    line.content.clone()
                }
            };

            lines.push(Line {
                page: line.page,
                content: self.cleaner.clean_line(&content),
            });
        }

        (doc.with_lines(lines), totals)
    }
}
