// crates/gazetteer-core/src/text.rs

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2\) Normalize to lowercase
/// 3\) Trim surrounding whitespace
///
/// # Examples
///
/// ```rust
/// use gazetteer_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key(" Zürich "), "zurich");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s.trim()).to_lowercase()
}

/// Rounds to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Formats a number without a trailing `.0` for whole values.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accents_and_case() {
        assert_eq!(fold_key("MÜNCHEN"), "munchen");
        assert_eq!(fold_key("Genève"), fold_key("geneve"));
        assert_ne!(fold_key("Bern"), fold_key("Basel"));
    }

    #[test]
    fn rounds_and_formats() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(format_number(round_to(8_670_300.0, 2)), "8670300");
        assert_eq!(format_number(2.5), "2.5");
    }
}
