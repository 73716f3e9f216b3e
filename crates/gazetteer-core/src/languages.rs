// crates/gazetteer-core/src/languages.rs
use isolang::Language;

/// Maps a two-letter language code to a display name.
pub trait LanguageNames: Send + Sync {
    fn name(&self, code: &str) -> Option<&str>;
}

/// English names of the ISO 639-1 languages.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoLanguageNames;

impl LanguageNames for IsoLanguageNames {
    fn name(&self, code: &str) -> Option<&str> {
        Language::from_639_1(&code.trim().to_ascii_lowercase()).map(|lang| lang.to_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        let names = IsoLanguageNames;
        assert_eq!(names.name("de"), Some("German"));
        assert_eq!(names.name("EN"), Some("English"));
        assert_eq!(names.name(" fr "), Some("French"));
        assert_eq!(names.name("it"), Some("Italian"));
    }

    #[test]
    fn unknown_and_empty_codes() {
        let names = IsoLanguageNames;
        assert_eq!(names.name("xx"), None);
        assert_eq!(names.name(""), None);
        // Three-letter codes are not ISO 639-1.
        assert_eq!(names.name("deu"), None);
    }
}
