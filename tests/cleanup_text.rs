use bijoy2uni::{cleanup::Cleaner, config::Config};

fn cleaner() -> Cleaner {
    Cleaner::new(&Config::default().cleanup).expect("cleaner")
}

#[test]
fn collapses_whitespace_runs() {
    assert_eq!(cleaner().clean_line("A  B\tC"), "A B C");
}

#[test]
fn strips_control_chars() {
    assert_eq!(cleaner().clean_line("Al\u{0002}pha\u{0084}"), "Alpha");
}

#[test]
fn tightens_space_before_punctuation() {
    assert_eq!(cleaner().clean_line("word , next ."), "word, next.");
    assert_eq!(cleaner().clean_line("বাক্য ।"), "বাক্য।");
}

#[test]
fn trims_edges() {
    assert_eq!(cleaner().clean_line("  padded  "), "padded");
}

#[test]
fn cleanup_is_idempotent() {
    let c = cleaner();
    let once = c.clean_line("  some \u{0003} text , here  ");
    let twice = c.clean_line(&once);
    assert_eq!(once, twice);
}

#[test]
fn disabled_cleanup_leaves_content_alone() {
    let mut cfg = Config::default().cleanup;
    cfg.collapse_whitespace = false;
    cfg.strip_control_chars = false;
    cfg.trim_edges = false;
    cfg.tighten_punctuation = false;
    cfg.normalize_unicode = false;
    let c = Cleaner::new(&cfg).expect("cleaner");
    assert_eq!(c.clean_line("  raw \u{0002} text  "), "  raw \u{0002} text  ");
}
