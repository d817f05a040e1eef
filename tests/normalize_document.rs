use bijoy2uni::{
    config::Config,
    document::{Document, Line},
    glyphmap::GlyphMapping,
    normalize::Normalizer,
};

fn line(content: &str) -> Line {
    Line {
        page: 1,
        content: content.into(),
    }
}

#[test]
fn line_count_and_order_preserved() {
    let cfg = Config::default();
    let mapping = GlyphMapping::standard();
    let norm = Normalizer::new(&cfg, &mapping).expect("normalizer");

    let doc = Document::new(
        "case",
        vec![
            line("Criminal Appeal No. 45 of 2004"),
            line("Avgvi UvKv `iKvi"),
            line(""),
            line("The State -Versus- Abul Kashem"),
        ],
    );

    let (out, totals) = norm.normalize(&doc);
    assert_eq!(out.lines.len(), doc.lines.len());
    assert_eq!(totals.total, 4);
    assert_eq!(out.lines[0].content, "Criminal Appeal No. 45 of 2004");
    assert!(out.lines[1].content.contains("আমার"));
    assert_eq!(out.lines[2].content, "");
    assert_eq!(out.lines[3].content, "The State -Versus- Abul Kashem");
}

#[test]
fn ascii_lines_only_get_whitespace_cleanup() {
    let cfg = Config::default();
    let mapping = GlyphMapping::standard();
    let norm = Normalizer::new(&cfg, &mapping).expect("normalizer");

    let doc = Document::new("plain", vec![line("  Hello   world .  ")]);
    let (out, totals) = norm.normalize(&doc);
    assert_eq!(out.lines[0].content, "Hello world.");
    assert_eq!(totals.converted, 0);
    assert_eq!(totals.passed_through, 1);
}

#[test]
fn normalize_is_idempotent() {
    let cfg = Config::default();
    let mapping = GlyphMapping::standard();
    let norm = Normalizer::new(&cfg, &mapping).expect("normalizer");

    let doc = Document::new(
        "case",
        vec![
            line("Avgvi UvKv `iKvi"),
            line("miKv‡ii wm×v‡šÍ ejv n‡q‡Q"),
            line("Plain English line."),
        ],
    );

    let (once, first_totals) = norm.normalize(&doc);
    assert_eq!(first_totals.converted, 2);

    let (twice, second_totals) = norm.normalize(&once);
    assert_eq!(once, twice);
    assert_eq!(second_totals.converted, 0);
    assert_eq!(second_totals.unmapped_glyphs, 0);
}

#[test]
fn empty_document_yields_empty_output() {
    let cfg = Config::default();
    let mapping = GlyphMapping::standard();
    let norm = Normalizer::new(&cfg, &mapping).expect("normalizer");

    let doc = Document::new("empty", Vec::new());
    let (out, totals) = norm.normalize(&doc);
    assert!(out.lines.is_empty());
    assert_eq!(totals.total, 0);
    assert_eq!(totals.unmapped_glyphs, 0);
    assert_eq!(totals.partially_normalized, 0);
}

#[test]
fn unmapped_glyphs_are_counted_per_occurrence() {
    let cfg = Config::default();
    let mapping = GlyphMapping::standard();
    let norm = Normalizer::new(&cfg, &mapping).expect("normalizer");

    let doc = Document::new("case", vec![line("Avgvi ¾b A‡bK wKQy")]);
    let (out, totals) = norm.normalize(&doc);
    assert_eq!(totals.unmapped_glyphs, 1);
    assert!(out.lines[0].content.contains('\u{FFFD}'));
}

#[test]
fn malformed_sequences_mark_partial_lines() {
    let cfg = Config::default();
    let mapping = GlyphMapping::standard();
    let norm = Normalizer::new(&cfg, &mapping).expect("normalizer");

    let doc = Document::new("case", vec![line("Avgvi UvKv †")]);
    let (out, totals) = norm.normalize(&doc);
    assert_eq!(totals.partially_normalized, 1);
    assert!(out.lines[0].content.contains('†'));
}

#[test]
fn ambiguous_lines_pass_through_and_are_counted() {
    let cfg = Config::default();
    let mapping = GlyphMapping::standard();
    let norm = Normalizer::new(&cfg, &mapping).expect("normalizer");

    let doc = Document::new("case", vec![line("hello † world")]);
    let (out, totals) = norm.normalize(&doc);
    assert_eq!(totals.ambiguous, 1);
    assert_eq!(out.lines[0].content, "hello † world");
}
