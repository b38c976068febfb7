//! Encoding Normalizer
//!
//! Source tables passed through at least one broken encode/decode cycle:
//! UTF-8 punctuation was decoded as Latin-1 and re-encoded, leaving two- and
//! three-character mojibake sequences in place of single characters. The
//! substitution table below maps each known corrupted sequence back to the
//! character it originally was. After repair, a matched pair of `**` bold
//! markers wrapping the whole trimmed string is stripped.

use once_cell::sync::Lazy;
use regex::Regex;

/// Known corrupted sequence → correct character.
///
/// Keys are the UTF-8 bytes of the original character, each byte read back
/// as its own Latin-1 codepoint.
const MOJIBAKE_MAP: &[(&str, &str)] = &[
    ("\u{e2}\u{80}\u{93}", "\u{2013}"), // en dash
    ("\u{e2}\u{80}\u{94}", "\u{2014}"), // em dash
    ("\u{e2}\u{80}\u{99}", "\u{2019}"), // right single quote
    ("\u{e2}\u{80}\u{9c}", "\u{201c}"), // left double quote
    ("\u{e2}\u{80}\u{9d}", "\u{201d}"), // right double quote
    ("\u{c2}\u{a7}", "\u{a7}"),         // section sign
    ("\u{c2}\u{b3}", "\u{b3}"),         // superscript three
    ("\u{e2}\u{89}\u{a4}", "\u{2264}"), // less than or equal
    ("\u{e2}\u{86}\u{92}", "\u{2192}"), // right arrow
];

static WRAPPED_BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*\*(.*)\*\*$").unwrap());

/// Repair mojibake and strip a bold pair wrapping the whole string.
pub fn clean_text(s: &str) -> String {
    let mut out = s.trim().to_string();
    for (bad, good) in MOJIBAKE_MAP {
        if out.contains(bad) {
            out = out.replace(bad, good);
        }
    }
    if let Some(caps) = WRAPPED_BOLD.captures(&out) {
        out = caps[1].to_string();
    }
    out
}

/// Remove every bold marker, wherever it appears.
///
/// Insight cells in older documents carry interior emphasis
/// (`likely **within 30 days**`); reports want the plain text.
pub fn strip_emphasis(s: &str) -> String {
    s.replace("**", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repairs_double_encoded_dashes() {
        assert_eq!(clean_text("2026\u{e2}\u{80}\u{93}2027"), "2026\u{2013}2027");
        assert_eq!(clean_text("x \u{e2}\u{80}\u{94} y"), "x \u{2014} y");
    }

    #[test]
    fn test_repairs_quotes_and_symbols() {
        assert_eq!(clean_text("don\u{e2}\u{80}\u{99}t"), "don\u{2019}t");
        assert_eq!(clean_text("\u{c2}\u{a7}4.2"), "\u{a7}4.2");
        assert_eq!(clean_text("\u{e2}\u{89}\u{a4}30 days"), "\u{2264}30 days");
        assert_eq!(clean_text("A \u{e2}\u{86}\u{92} B"), "A \u{2192} B");
    }

    #[test]
    fn test_strips_wrapping_bold_pair() {
        assert_eq!(clean_text("**Rising**"), "Rising");
        assert_eq!(clean_text("  **Rising due to Hormuz tension**  "), "Rising due to Hormuz tension");
    }

    #[test]
    fn test_interior_bold_untouched_by_clean_text() {
        // clean_text only strips a pair wrapping the entire string.
        assert_eq!(clean_text("a **bold** word"), "a **bold** word");
    }

    #[test]
    fn test_strip_emphasis_removes_interior_bold() {
        assert_eq!(strip_emphasis("likely **within 30 days**"), "likely within 30 days");
    }

    #[test]
    fn test_clean_ascii_passthrough() {
        assert_eq!(clean_text("  62%  "), "62%");
    }
}
