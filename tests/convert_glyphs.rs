use bijoy2uni::{config::Config, convert::Converter, glyphmap::GlyphMapping};

fn convert(input: &str) -> bijoy2uni::convert::Converted {
    let cfg = Config::default();
    let mapping = GlyphMapping::standard();
    let conv = Converter::new(&cfg, &mapping).expect("converter");
    conv.convert_line(input)
}

#[test]
fn basic_words() {
    assert_eq!(convert("Avgvi").text, "আমার");
    assert_eq!(convert("AvBb").text, "আইন");
    assert_eq!(convert("Av`vjZ").text, "আদালত");
    assert_eq!(convert("UvKv").text, "টাকা");
    assert_eq!(convert("gvbyl").text, "মানুষ");
}

#[test]
fn pre_vowel_reordering() {
    // ি is keyed before its consonant; output must carry it after.
    assert_eq!(convert("Avwg").text, "আমি");
    assert_eq!(convert("wKš‘").text, "কিন্তু");
    assert_eq!(convert("e‡j").text, "বলে");
    // য় comes out decomposed (09AF + 09BC), its canonical NFC form.
    assert_eq!(
        convert("n‡q").text,
        "\u{09B9}\u{09AF}\u{09BC}\u{09C7}"
    );
}

#[test]
fn reph_is_moved_before_its_cluster() {
    assert_eq!(convert("Kg©").text, "কর্ম");
}

#[test]
fn phala_extends_cluster() {
    assert_eq!(convert("cÖ_g").text, "প্রথম");
    assert_eq!(convert("Rb¨").text, "জন্য");
}

#[test]
fn post_signs_and_modifiers() {
    assert_eq!(convert("evsjv").text, "বাংলা");
    assert_eq!(convert("`ytL").text, "দুঃখ");
}

#[test]
fn two_part_vowel_composes_under_nfc() {
    // ে + া around the cluster must come out as the single codepoint ো.
    let out = convert("nvB‡KvU©");
    assert_eq!(
        out.text,
        "\u{09B9}\u{09BE}\u{0987}\u{0995}\u{09CB}\u{09B0}\u{09CD}\u{099F}"
    );
    assert!(out.text.contains('\u{09CB}'));
}

#[test]
fn latin_tokens_survive() {
    let out = convert("Avgvi `vwe 45 DLR 123 Ges AvBb");
    assert!(out.text.contains("45 DLR 123"));
    assert!(out.text.contains("আমার"));
    assert!(out.text.contains("আইন"));
    assert!(!out.malformed);
}

#[test]
fn exempt_english_words_are_kept() {
    let out = convert("Avgvi Appeal No. 45");
    assert!(out.text.contains("Appeal"));
    assert!(out.text.contains("No. 45"));
    assert!(out.text.contains("আমার"));
}

#[test]
fn unmapped_glyph_becomes_visible_marker() {
    let out = convert("Avgvi ¾b");
    assert_eq!(out.unmapped, 1);
    assert!(out.text.contains('\u{FFFD}'));
    assert!(out.text.contains("আমার"));
}

#[test]
fn dangling_pre_vowel_is_kept_raw() {
    let out = convert("Avgvi †");
    assert!(out.malformed);
    assert!(out.text.contains('†'));
}

#[test]
fn genuine_bangla_words_are_untouched() {
    let out = convert("আমার Avgvi");
    assert!(out.text.starts_with("আমার"));
    assert!(out.text.ends_with("আমার"));
}
