//! Lookup tables encoding one vehicle brand's naming conventions.
//!
//! These tables are data, not control flow: the parser consults them in the
//! order they are written here, and extending coverage (a new model spelling,
//! a new drivetrain token) means adding an entry, not touching the parsing
//! logic. Entry order is part of the contract wherever a scan stops at the
//! first hit.

// ---------------------------------------------------------------------------
// Model names
// ---------------------------------------------------------------------------

/// Known model spellings mapped to canonical Latin names.
///
/// The parser scans this slice top to bottom and takes the first spelling
/// found as a substring of the normalized descriptor. When a descriptor
/// mentions more than one model, the earlier entry wins; keep the order
/// stable.
pub const MODEL_SYNONYMS: &[(&str, &str)] = &[
    ("АРКАНА", "Arkana"),
    ("ARKANA", "Arkana"),
    ("ЛОГАН", "Logan"),
    ("LOGAN", "Logan"),
    ("ДАСТЕР", "Duster"),
    ("DUSTER", "Duster"),
    ("САНДЕРО", "Sandero"),
    ("SANDERO", "Sandero"),
    ("КАПТЮР", "Kaptur"),
    ("КАПТУР", "Kaptur"),
    ("KAPTUR", "Kaptur"),
    ("МЕГАН", "Megane"),
    ("MEGANE", "Megane"),
    ("КЛИО", "Clio"),
    ("CLIO", "Clio"),
    ("ФЛЮЕНС", "Fluence"),
    ("FLUENCE", "Fluence"),
    ("СИМБОЛ", "Symbol"),
    ("SYMBOL", "Symbol"),
    ("КАНГУ", "Kangoo"),
    ("KANGOO", "Kangoo"),
    ("МАСТЕР", "Master"),
    ("MASTER", "Master"),
    ("ТРАФИК", "Trafic"),
    ("TRAFIC", "Trafic"),
    ("ДОККЕР", "Dokker"),
    ("DOKKER", "Dokker"),
    ("ЛАРГУС", "Largus"),
    ("LARGUS", "Largus"),
    ("СЦЕНИК", "Scenic"),
    ("SCENIC", "Scenic"),
    ("ЭСПЕЙС", "Espace"),
    ("ESPACE", "Espace"),
    ("КОЛЕОС", "Koleos"),
    ("KOLEOS", "Koleos"),
    ("ЛАГУНА", "Laguna"),
    ("LAGUNA", "Laguna"),
    ("ЛАТИТЮД", "Latitude"),
    ("LATITUDE", "Latitude"),
    ("ТАЛИЯ", "Thalia"),
    ("THALIA", "Thalia"),
];

// ---------------------------------------------------------------------------
// Generation markers
// ---------------------------------------------------------------------------

/// Roman numerals accepted as generation markers, each listed ahead of the
/// numerals that prefix it so `VI` is never read as `V` followed by `I`.
pub const ROMAN_NUMERALS: &[(&str, &str)] = &[
    ("VI", "6"),
    ("V", "5"),
    ("IV", "4"),
    ("III", "3"),
    ("II", "2"),
    ("I", "1"),
];

/// Model families that are never numbered: any detected generation digit is
/// dropped from the canonical name.
pub const NON_NUMBERED_FAMILIES: &[&str] = &["Duster", "Arkana", "Kaptur", "Kangoo"];

/// Model families whose first generation carries no suffix: a detected
/// generation marker of exactly `1` collapses to no suffix.
pub const FIRST_GEN_IMPLICIT: &[&str] = &["Logan"];

// ---------------------------------------------------------------------------
// Engine codes
// ---------------------------------------------------------------------------

/// Drivetrain, transmission, and safety-system tokens that must never be
/// mistaken for an engine code during the token scan.
pub const ENGINE_TOKEN_BLACKLIST: &[&str] = &[
    "4X4", "4X2", "2WD", "4WD", "AWD", "FWD", "CVT", "ABS", "ESP", "GTE", "DCI", "16V", "MT",
    "AT", "AUTOMAT", "VARIATOR",
];

/// First letters of real manufacturer engine families (K4M, F4R, H4M, ...).
/// A shape-matching token starting with one of these ends the scan; other
/// shape matches are kept only as a weak fallback.
pub const ENGINE_FAMILY_PREFIXES: &[char] = &['K', 'F', 'H', 'M', 'D', 'E', 'R', 'V'];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_model_has_a_latin_spelling() {
        // The generation-digit scan locates the canonical name (or its first
        // listed spelling) back in the normalized text, so each canonical
        // name must appear among its own synonyms in upper case.
        for (_, canonical) in MODEL_SYNONYMS {
            let upper = canonical.to_uppercase();
            assert!(
                MODEL_SYNONYMS
                    .iter()
                    .any(|(spelling, c)| *spelling == upper && c == canonical),
                "missing Latin spelling for {canonical}"
            );
        }
    }

    #[test]
    fn test_exception_families_are_known_models() {
        for family in NON_NUMBERED_FAMILIES.iter().chain(FIRST_GEN_IMPLICIT) {
            assert!(
                MODEL_SYNONYMS.iter().any(|(_, c)| c == family),
                "{family} is not in the synonym table"
            );
        }
    }

    #[test]
    fn test_roman_numerals_prefix_ordered() {
        // The parser tries entries in this order; a numeral hidden behind
        // one of its own prefixes could only match via backtracking.
        for (i, (numeral, _)) in ROMAN_NUMERALS.iter().enumerate() {
            for (later, _) in &ROMAN_NUMERALS[i + 1..] {
                assert!(!later.starts_with(numeral), "{later} hidden behind {numeral}");
            }
        }
    }

    #[test]
    fn test_blacklist_is_upper_case() {
        // The scan runs over upper-cased text; a lower-case entry would be
        // dead weight.
        for token in ENGINE_TOKEN_BLACKLIST {
            assert_eq!(*token, token.to_uppercase());
        }
    }
}
