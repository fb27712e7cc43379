//! # Language Catalog
//!
//! The set of language codes the assistant can answer in, fetched from
//! `/api/languages` at startup. Codes map to native-script labels through a
//! static table; unknown codes are shown as-is.

/// Code used before (or instead of) a successful catalog load.
pub const DEFAULT_LANGUAGE: &str = "en";

const DEFAULT_LABEL: &str = "English";

/// Display labels for the languages the backend is known to support.
const LANGUAGE_LABELS: &[(&str, &str)] = &[
    ("en", "English"),
    ("hi", "हिंदी"),
    ("mr", "मराठी"),
    ("bn", "বাংলা"),
    ("ta", "தமிழ்"),
    ("te", "తెలుగు"),
    ("gu", "ગુજરાતી"),
];

/// Returns the display label for a code, falling back to the code itself.
pub fn label_for(code: &str) -> &str {
    LANGUAGE_LABELS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
}

/// A selectable entry in the language picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: String,
    pub label: String,
}

impl LanguageOption {
    fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            label: label_for(code).to_string(),
        }
    }

    fn fallback() -> Self {
        Self {
            code: DEFAULT_LANGUAGE.to_string(),
            label: DEFAULT_LABEL.to_string(),
        }
    }
}

/// Available language codes, in server order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageCatalog {
    codes: Vec<String>,
}

impl LanguageCatalog {
    pub fn new(codes: Vec<String>) -> Self {
        Self { codes }
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    /// Builds the picker entries. Blank codes are skipped; if nothing usable
    /// remains, a single English entry is returned so the picker always has
    /// something to show.
    pub fn options(&self) -> Vec<LanguageOption> {
        let options: Vec<LanguageOption> = self
            .codes
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(LanguageOption::new)
            .collect();

        if options.is_empty() {
            vec![LanguageOption::fallback()]
        } else {
            options
        }
    }
}
