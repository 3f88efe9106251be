//! Signature extraction: one raw compatibility descriptor in, one
//! structured [`VehicleSignature`] out.
//!
//! Extraction never fails. Each field is pulled out by its own pattern,
//! independent of the others; whatever cannot be extracted stays empty and
//! is reported in `missing`. Word boundaries are ASCII (`(?-u:\b)`)
//! wherever the semantics rely on Cyrillic letters not counting as word
//! characters; the power pattern is the one deliberate exception, so that
//! Cyrillic unit spellings (`Л.С.`, `ЛС`) are recognized.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{DescriptorPreview, MissingField, VehicleSignature};
use crate::parser::lexicon::{
    ENGINE_FAMILY_PREFIXES, ENGINE_TOKEN_BLACKLIST, FIRST_GEN_IMPLICIT, MODEL_SYNONYMS,
    NON_NUMBERED_FAMILIES, ROMAN_NUMERALS,
};
use crate::parser::normalize::normalize_descriptor;

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

// -- Model and generation ---------------------------------------------------

static ROMAN_NUMERAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)(VI|V|IV|III|II|I)(?-u:\b)").unwrap());

static GENERATION_DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9])(?-u:\b)").unwrap());

// -- Modification fields ----------------------------------------------------

static VOLUME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)([0-9]\.[0-9])(?-u:\b)").unwrap());

static VALVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)(8|16)\s*(V|КЛ|KL|VALVE)").unwrap());

static ENGINE_SHAPE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z][0-9][A-Z]").unwrap());

// -- Year range and power ---------------------------------------------------

static YEAR_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(19[0-9]{2}|20[0-9]{2})\s*[-–]\s*(19[0-9]{2}|20[0-9]{2}|Н\.?В|НАСТ|\.\.\.)")
        .unwrap()
});

static POWER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b([0-9]{2,3})\s*(HP|LS|Л\.?С\.?|ЛС|CV|CH)\b").unwrap());

// ---------------------------------------------------------------------------
// Public operations
// ---------------------------------------------------------------------------

/// Parse one raw compatibility descriptor into a structured signature.
///
/// The descriptor is normalized first, then each field is extracted on its
/// own: model plus generation suffix, displacement, valve count, engine
/// code, year range, and the optional power annotation. Fields that cannot
/// be extracted stay empty and are listed in `missing` in the fixed order
/// model, years, volume, valves, engine.
///
/// # Arguments
/// * `raw` - free-text compatibility line as stored on a catalog item.
pub fn parse_descriptor(raw: &str) -> VehicleSignature {
    let clean = normalize_descriptor(raw);

    let family = detect_model(&clean);
    let mut suffix = detect_generation_suffix(&clean, family);
    if NON_NUMBERED_FAMILIES.contains(&family) {
        suffix.clear();
    }
    if FIRST_GEN_IMPLICIT.contains(&family) && suffix == "1" {
        suffix.clear();
    }
    let model_name = compose_model_name(family, &suffix);

    let volume = extract_volume(&clean);
    let valves = extract_valves(&clean);
    let engine = extract_engine(&clean);
    let year_range = extract_year_range(&clean);
    let power = extract_power(&clean);

    let mut missing = Vec::new();
    if model_name.is_empty() {
        missing.push(MissingField::Model);
    }
    if year_range.is_empty() {
        missing.push(MissingField::Years);
    }
    if volume.is_empty() {
        missing.push(MissingField::Volume);
    }
    if valves.is_empty() {
        missing.push(MissingField::Valves);
    }
    if engine.is_empty() {
        missing.push(MissingField::Engine);
    }
    let is_complete = missing.is_empty();

    let canonical_key = format!(
        "{} | {} | {} {} {}",
        model_name, year_range, volume, valves, engine
    );

    VehicleSignature {
        model_name,
        year_range,
        volume,
        valves,
        engine,
        power,
        missing,
        is_complete,
        canonical_key,
    }
}

/// Compose the canonical stored form for manually entered structured data:
/// `"<model> | <years> | <modification>"`. When the inputs are already
/// canonical the result parses back to the same fields.
pub fn format_descriptor(model: &str, years: &str, modification: &str) -> String {
    format!("{} | {} | {}", model, years, modification)
}

/// Parse a batch of import rows into per-row completeness reports, so a
/// human can fix rows before accepting a bulk upload.
pub fn preview_descriptors(rows: &[String]) -> Vec<DescriptorPreview> {
    rows.iter()
        .map(|raw| {
            let sig = parse_descriptor(raw);
            DescriptorPreview {
                raw: raw.clone(),
                missing: sig.missing,
                is_complete: sig.is_complete,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Field extraction
// ---------------------------------------------------------------------------

/// First synonym-table hit wins; scanning order is the table order.
fn detect_model(clean: &str) -> &'static str {
    MODEL_SYNONYMS
        .iter()
        .find(|(spelling, _)| clean.contains(*spelling))
        .map(|(_, canonical)| *canonical)
        .unwrap_or("")
}

/// Generation marker: a bare Roman numeral anywhere in the text wins;
/// otherwise a single digit directly after the model token.
fn detect_generation_suffix(clean: &str, family: &str) -> String {
    if let Some(caps) = ROMAN_NUMERAL_RE.captures(clean) {
        return roman_to_arabic(&caps[1]).to_string();
    }
    if family.is_empty() {
        return String::new();
    }

    let latin = family.to_uppercase();
    let after_model = clean
        .find(latin.as_str())
        .map(|at| at + latin.len())
        .or_else(|| {
            // The model was matched via another spelling; locate the first
            // table entry for this family instead.
            MODEL_SYNONYMS
                .iter()
                .find(|(_, canonical)| *canonical == family)
                .and_then(|(spelling, _)| clean.find(*spelling).map(|at| at + spelling.len()))
        });

    match after_model {
        Some(end) => {
            let rest = clean[end..].trim_start();
            match GENERATION_DIGIT_RE.captures(rest) {
                Some(caps) => caps[1].to_string(),
                None => String::new(),
            }
        }
        None => String::new(),
    }
}

fn roman_to_arabic<'a>(numeral: &'a str) -> &'a str {
    ROMAN_NUMERALS
        .iter()
        .find(|(roman, _)| *roman == numeral)
        .map(|(_, arabic)| *arabic)
        .unwrap_or(numeral)
}

/// `"<family> <suffix>"` with word-wise capitalization; purely numeric
/// words are kept as-is.
fn compose_model_name(family: &str, suffix: &str) -> String {
    if family.is_empty() {
        return String::new();
    }
    let joined = if suffix.is_empty() {
        family.to_string()
    } else {
        format!("{} {}", family, suffix)
    };
    joined
        .split(' ')
        .map(|word| {
            if !word.is_empty() && word.chars().all(|c| c.is_ascii_digit()) {
                word.to_string()
            } else {
                capitalize_word(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn extract_volume(clean: &str) -> String {
    match VOLUME_RE.captures(clean) {
        Some(caps) => caps[1].to_string(),
        None => String::new(),
    }
}

fn extract_valves(clean: &str) -> String {
    match VALVE_RE.captures(clean) {
        Some(caps) => format!("{}V", &caps[1]),
        None => String::new(),
    }
}

/// Token scan for manufacturer engine codes (`K4M`, `F4R` style): shape is
/// letter, digit, letter as a prefix. A code starting with a known engine
/// family letter wins immediately; otherwise the first shape match is kept
/// as a weak fallback.
fn extract_engine(clean: &str) -> String {
    let mut fallback = "";
    for token in clean.split(' ') {
        if token.chars().count() < 3 {
            continue;
        }
        if ENGINE_TOKEN_BLACKLIST.contains(&token) {
            continue;
        }
        if !ENGINE_SHAPE_RE.is_match(token) {
            continue;
        }
        if let Some(first) = token.chars().next() {
            if ENGINE_FAMILY_PREFIXES.contains(&first) {
                return token.to_string();
            }
        }
        if fallback.is_empty() {
            fallback = token;
        }
    }
    fallback.to_string()
}

fn extract_year_range(clean: &str) -> String {
    match YEAR_RANGE_RE.captures(clean) {
        Some(caps) => {
            let start = &caps[1];
            let end = &caps[2];
            // Any spelling of "to present" collapses to the literal form.
            if end.contains('Н') || end.contains('.') {
                format!("{}-н.в.", start)
            } else {
                format!("{}-{}", start, end)
            }
        }
        None => String::new(),
    }
}

fn extract_power(clean: &str) -> Option<String> {
    POWER_RE
        .captures(clean)
        .map(|caps| format!("{} л.с.", &caps[1]))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
