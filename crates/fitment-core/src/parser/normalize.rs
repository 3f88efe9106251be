//! Descriptor text normalization.
//!
//! Every extraction step downstream assumes this exact shape: upper-cased
//! text, single spaces, decimal dots, and punctuation already dissolved into
//! token boundaries.

use std::sync::LazyLock;

use regex::Regex;

/// Hard cap on descriptor length before normalization. Catalog descriptors
/// are one line of free text; anything longer is pasted garbage.
pub const MAX_DESCRIPTOR_LEN: usize = 512;

static DECIMAL_COMMA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]),([0-9])").unwrap());

static PUNCTUATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[()\[\]/,;]").unwrap());

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Normalize one raw descriptor for field extraction.
///
/// Decimal commas become dots (`1,6` → `1.6`), brackets/slashes/commas/
/// semicolons become spaces so that attached annotations turn into separate
/// tokens, the text is upper-cased, and whitespace is collapsed.
pub fn normalize_descriptor(raw: &str) -> String {
    let mut input = raw.trim();
    if input.len() > MAX_DESCRIPTOR_LEN {
        let mut cut = MAX_DESCRIPTOR_LEN;
        // Cyrillic input is multi-byte; back up to a char boundary.
        while !input.is_char_boundary(cut) {
            cut -= 1;
        }
        input = &input[..cut];
    }

    let dotted = DECIMAL_COMMA_RE.replace_all(input, "${1}.${2}");
    let spaced = PUNCTUATION_RE.replace_all(&dotted, " ");
    let upper = spaced.to_uppercase();
    let collapsed = WHITESPACE_RE.replace_all(&upper, " ");
    collapsed.trim().to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
