//! Language Preference
//!
//! The active language is stored in local storage and read once at startup.
//! Hebrew flips the document text direction to right-to-left.

use leptos::*;

use crate::storage::{local_get, local_set};

/// Local storage key for the active language
pub const LANGUAGE_KEY: &str = "trimly_language";

const DEFAULT_LANGUAGE: &str = "en";

/// Languages offered by the switcher
pub const LANGUAGES: [(&str, &str); 3] = [("en", "English"), ("ru", "Русский"), ("he", "עברית")];

/// Reactive language preference provided to all components
#[derive(Clone, Copy)]
pub struct LanguagePref {
    pub language: RwSignal<String>,
}

/// Whether a language is written right-to-left
pub fn is_rtl(language: &str) -> bool {
    language == "he"
}

/// Provide the language preference, rehydrated from local storage
pub fn provide_language() {
    let language = local_get(LANGUAGE_KEY).unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
    apply_direction(&language);

    provide_context(LanguagePref {
        language: create_rw_signal(language),
    });
}

impl LanguagePref {
    /// Switch language, persist it and update the document direction
    pub fn set(&self, language: &str) {
        local_set(LANGUAGE_KEY, language);
        apply_direction(language);
        self.language.set(language.to_string());
    }
}

/// Set the `dir` attribute on the document element
fn apply_direction(language: &str) {
    let dir = if is_rtl(language) { "rtl" } else { "ltr" };
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("dir", dir);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hebrew_is_rtl() {
        assert!(is_rtl("he"));
        assert!(!is_rtl("en"));
        assert!(!is_rtl("ru"));
    }
}
