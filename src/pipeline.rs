use crate::{
    config::Config,
    document::Document,
    glyphmap::GlyphMapping,
    metadata::{self, CaseMetadata},
    normalize::Normalizer,
    report::{InputInfo, JobReport},
};
use anyhow::{Context, Result, anyhow};
use std::path::Path;
use tracing::{info, warn};

pub struct Pipeline {
    cfg: Config,
    mapping: GlyphMapping,
}

pub struct JobOutput {
    pub text: String,
    pub report: JobReport,
}

impl Pipeline {
    pub fn new(cfg: &Config) -> Self {
        Self {
            cfg: cfg.clone(),
            mapping: GlyphMapping::standard(),
        }
    }

    pub fn run_job(&self, input: &Path) -> Result<JobOutput> {
        let meta = std::fs::metadata(input).with_context(|| "stat input")?;
        let file_bytes = meta.len();
        if file_bytes > self.cfg.limits.max_input_file_bytes {
            return Err(anyhow!("input exceeds max_input_file_bytes: {}", file_bytes));
        }

        let raw = std::fs::read_to_string(input)
            .with_context(|| format!("reading input: {}", input.display()))?;
        let source = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("input")
            .to_string();

        let doc = Document::from_text(&source, &raw);
        if doc.line_count() > self.cfg.limits.max_input_lines {
            return Err(anyhow!(
                "input exceeds max_input_lines: {}",
                doc.line_count()
            ));
        }

        let normalizer = Normalizer::new(&self.cfg, &self.mapping)?;
        // Profile before conversion; the report records what arrived.
        let profile = normalizer.detector().profile(&doc);

        let (normalized, totals) = normalizer.normalize(&doc);

        info!(
            "normalize lines={} converted={} ambiguous={} unmapped={} partial={}",
            totals.total,
            totals.converted,
            totals.ambiguous,
            totals.unmapped_glyphs,
            totals.partially_normalized
        );
        if totals.unmapped_glyphs > 0 {
            warn!(
                "{} glyph code(s) had no mapping; markers left in output",
                totals.unmapped_glyphs
            );
        }

        let text = normalized.to_text();

        let mut md = if self.cfg.metadata.enabled {
            metadata::extract(&self.cfg.metadata, &text, &source)?
        } else {
            CaseMetadata::default()
        };
        md.has_bengali = profile.has_bengali;
        md.original_encoding = profile.encoding;
        md.converted_to_unicode = totals.converted > 0;

        let report = JobReport {
            input: InputInfo {
                path: input.display().to_string(),
                file_bytes,
                line_count: doc.line_count(),
                page_count: doc.page_count(),
            },
            profile,
            lines: totals,
            metadata: md,
        };

        Ok(JobOutput { text, report })
    }
}
