use std::collections::HashMap;

/// How a glyph participates in cluster assembly during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphClass {
    /// Full letter or conjunct; opens a new cluster.
    Base,
    /// Vowel sign stored before its consonant in keystroke order (ি ে ৈ);
    /// buffered and re-emitted after the cluster it modifies.
    PreSign,
    /// Vowel sign or modifier that follows its cluster (া ী ু ং ঃ ...).
    PostSign,
    /// Phala or half-form continuation (্য ্র ্ব ্ত ...); appends to the
    /// open cluster and keeps it open.
    Extension,
    /// Reph: typed after the cluster it precedes logically; emitted as র্
    /// before that cluster.
    Reph,
    /// Punctuation rendered by the legacy font; closes the cluster.
    Literal,
}

#[derive(Debug, Clone, Copy)]
pub struct GlyphEntry {
    pub bijoy: &'static str,
    pub unicode: &'static str,
    pub class: GlyphClass,
}

const fn e(bijoy: &'static str, unicode: &'static str, class: GlyphClass) -> GlyphEntry {
    GlyphEntry {
        bijoy,
        unicode,
        class,
    }
}

use GlyphClass::*;

// Bijoy ANSI code table. The font maps keystrokes to visual glyph positions;
// the byte values arrive here as the characters a CP1252 decode produces.
// Covers the independent vowels, the full consonant row, vowel signs, phalas,
// and the frequent conjunct ligatures; codes outside the table surface as
// replacement markers downstream.
static TABLE: &[GlyphEntry] = &[
    // Composite keystrokes resolved before single codes (longest match).
    e("Av", "\u{0986}", Base), // আ
    // Independent vowels.
    e("A", "\u{0985}", Base), // অ
    e("B", "\u{0987}", Base), // ই
    e("C", "\u{0988}", Base), // ঈ
    e("D", "\u{0989}", Base), // উ
    e("E", "\u{098A}", Base), // ঊ
    e("F", "\u{098B}", Base), // ঋ
    e("G", "\u{098F}", Base), // এ
    e("H", "\u{0990}", Base), // ঐ
    e("I", "\u{0993}", Base), // ও
    e("J", "\u{0994}", Base), // ঔ
    // Consonants.
    e("K", "\u{0995}", Base), // ক
    e("L", "\u{0996}", Base), // খ
    e("M", "\u{0997}", Base), // গ
    e("N", "\u{0998}", Base), // ঘ
    e("O", "\u{0999}", Base), // ঙ
    e("P", "\u{099A}", Base), // চ
    e("Q", "\u{099B}", Base), // ছ
    e("R", "\u{099C}", Base), // জ
    e("S", "\u{099D}", Base), // ঝ
    e("T", "\u{099E}", Base), // ঞ
    e("U", "\u{099F}", Base), // ট
    e("V", "\u{09A0}", Base), // ঠ
    e("W", "\u{09A1}", Base), // ড
    e("X", "\u{09A2}", Base), // ঢ
    e("Y", "\u{09A3}", Base), // ণ
    e("Z", "\u{09A4}", Base), // ত
    e("_", "\u{09A5}", Base), // থ
    e("`", "\u{09A6}", Base), // দ
    e("a", "\u{09A7}", Base), // ধ
    e("b", "\u{09A8}", Base), // ন
    e("c", "\u{09AA}", Base), // প
    e("d", "\u{09AB}", Base), // ফ
    e("e", "\u{09AC}", Base), // ব
    e("f", "\u{09AD}", Base), // ভ
    e("g", "\u{09AE}", Base), // ম
    e("h", "\u{09AF}", Base), // য
    e("i", "\u{09B0}", Base), // র
    e("j", "\u{09B2}", Base), // ল
    e("k", "\u{09B6}", Base), // শ
    e("l", "\u{09B7}", Base), // ষ
    e("m", "\u{09B8}", Base), // স
    e("n", "\u{09B9}", Base), // হ
    // Emitted decomposed (base + nukta): the precomposed codepoints are NFC
    // composition exclusions, so this is their canonical form.
    e("o", "\u{09A1}\u{09BC}", Base), // ড়
    e("p", "\u{09A2}\u{09BC}", Base), // ঢ়
    e("q", "\u{09AF}\u{09BC}", Base), // য়
    e("r", "\u{09CE}", Base), // ৎ
    // Alternate stem forms the font assigns separate codes.
    e("š", "\u{09A8}", Base), // ন
    e("¯", "\u{09B8}", Base), // স
    // Vowel signs and modifiers.
    e("v", "\u{09BE}", PostSign),  // া
    e("w", "\u{09BF}", PreSign),   // ি
    e("x", "\u{09C0}", PostSign),  // ী
    e("y", "\u{09C1}", PostSign),  // ু
    e("æ", "\u{09C1}", PostSign),  // ু (post-র form)
    e("z", "\u{09C2}", PostSign),  // ূ
    e("„", "\u{09C3}", PostSign),  // ৃ
    e("…", "\u{09C3}", PostSign),  // ৃ
    e("†", "\u{09C7}", PreSign),   // ে
    e("‡", "\u{09C7}", PreSign),   // ে
    e("ˆ", "\u{09C8}", PreSign),   // ৈ
    e("‰", "\u{09C8}", PreSign),   // ৈ
    e("Š", "\u{09D7}", PostSign),  // ৗ
    e("‹", "\u{09D7}", PostSign),  // ৗ
    e("s", "\u{0982}", PostSign),  // ং
    e("t", "\u{0983}", PostSign),  // ঃ
    e("u", "\u{0981}", PostSign),  // ঁ
    // Phalas and half-form continuations.
    e("¨", "\u{09CD}\u{09AF}", Extension), // ্য
    e("ª", "\u{09CD}\u{09B0}", Extension), // ্র
    e("Ö", "\u{09CD}\u{09B0}", Extension), // ্র (round-stem form)
    e("^", "\u{09CD}\u{09AC}", Extension), // ্ব
    e("¡", "\u{09CD}\u{09AC}", Extension), // ্ব (ligature form)
    e("Í", "\u{09CD}\u{09A4}", Extension), // ্ত
    e("‘", "\u{09CD}\u{09A4}\u{09C1}", Extension), // ্তু
    e("’", "\u{09CD}\u{09A5}", Extension), // ্থ
    e("&", "\u{09CD}", Extension),         // explicit hasanta
    // Reph.
    e("©", "\u{09B0}\u{09CD}", Reph), // র্ before the cluster
    // Frequent conjunct ligatures.
    e("³", "\u{0995}\u{09CD}\u{09A4}", Base), // ক্ত
    e("µ", "\u{0995}\u{09CD}\u{09B0}", Base), // ক্র
    e("¶", "\u{0995}\u{09CD}\u{09B7}", Base), // ক্ষ
    e("ÿ", "\u{0995}\u{09CD}\u{09B7}", Base), // ক্ষ
    e("Î", "\u{09A4}\u{09CD}\u{09B0}", Base), // ত্র
    e("Ð", "\u{09A3}\u{09CD}\u{09A1}", Base), // ণ্ড
    e("×", "\u{09A6}\u{09CD}\u{09A7}", Base), // দ্ধ
    e("Ø", "\u{09A6}\u{09CD}\u{09AC}", Base), // দ্ব
    e("ó", "\u{09B7}\u{09CD}\u{099F}", Base), // ষ্ট
    e("¸", "\u{0997}\u{09C1}", Base),         // গু
    e("ï", "\u{09B6}\u{09C1}", Base),         // শু
    e("û", "\u{09B9}\u{09C1}", Base),         // হু
    // Punctuation the font substitutes.
    e("|", "\u{0964}", Literal), // ।
    e("Ô", "\u{2018}", Literal),
    e("Õ", "\u{2019}", Literal),
    e("Ò", "\u{201C}", Literal),
    e("Ó", "\u{201D}", Literal),
];

/// Immutable legacy-glyph lookup table. Built once at process start and
/// passed by reference into the detector and converter; never mutated.
pub struct GlyphMapping {
    singles: HashMap<char, &'static GlyphEntry>,
    composites: Vec<&'static GlyphEntry>,
}

impl GlyphMapping {
    pub fn standard() -> Self {
        let mut singles = HashMap::new();
        let mut composites = Vec::new();
        for entry in TABLE {
            let mut chars = entry.bijoy.chars();
            let first = chars.next();
            match (first, chars.next()) {
                (Some(ch), None) => {
                    singles.insert(ch, entry);
                }
                (Some(_), Some(_)) => composites.push(entry),
                (None, _) => {}
            }
        }
        composites.sort_by(|a, b| b.bijoy.len().cmp(&a.bijoy.len()));
        Self {
            singles,
            composites,
        }
    }

    /// Longest-match lookup at the head of `rest`. Returns the entry and the
    /// number of bytes consumed.
    pub fn lookup_at(&self, rest: &str) -> Option<(&'static GlyphEntry, usize)> {
        for entry in &self.composites {
            if rest.starts_with(entry.bijoy) {
                return Some((*entry, entry.bijoy.len()));
            }
        }
        let ch = rest.chars().next()?;
        self.singles
            .get(&ch)
            .map(|entry| (*entry, ch.len_utf8()))
    }
}

impl Default for GlyphMapping {
    fn default() -> Self {
        Self::standard()
    }
}
