//! The per-locale template store backing a translation handle.

use std::collections::BTreeMap;

use crate::parser::{Template, parse_template};
use crate::resolver::error::{CreateError, compute_suggestions};
use crate::types::LocaleId;

/// A validated mapping from every declared locale to a template or an
/// explicit absent marker.
///
/// Construction tokenizes each template once and enforces the store
/// invariants; after that the store is read-only. Lookups never re-scan
/// template text.
#[derive(Debug, Clone)]
pub struct TranslationSet {
    entries: BTreeMap<LocaleId, Option<Template>>,
}

impl TranslationSet {
    /// Build a store from raw per-locale entries.
    ///
    /// Validation order:
    /// 1. every entry key is a declared locale;
    /// 2. every declared locale has an entry (absent counts as covered);
    /// 3. the fallback locale's entry is non-absent;
    /// 4. every non-absent template's placeholder set equals the fallback
    ///    template's placeholder set.
    pub(crate) fn new(
        entries: BTreeMap<LocaleId, Option<String>>,
        declared: &[LocaleId],
        fallback: &LocaleId,
    ) -> Result<Self, CreateError> {
        for locale in entries.keys() {
            if !declared.contains(locale) {
                let declared_names: Vec<String> =
                    declared.iter().map(ToString::to_string).collect();
                return Err(CreateError::UndeclaredLocale {
                    locale: locale.clone(),
                    suggestions: compute_suggestions(locale.as_str(), &declared_names),
                    declared: declared_names,
                });
            }
        }
        for locale in declared {
            if !entries.contains_key(locale) {
                return Err(CreateError::MissingEntry {
                    locale: locale.clone(),
                });
            }
        }

        let parsed: BTreeMap<LocaleId, Option<Template>> = entries
            .into_iter()
            .map(|(locale, entry)| (locale, entry.map(|source| parse_template(&source))))
            .collect();

        let Some(Some(fallback_template)) = parsed.get(fallback) else {
            return Err(CreateError::AbsentFallback {
                locale: fallback.clone(),
            });
        };

        let expected = fallback_template.placeholders();
        for (locale, entry) in &parsed {
            let Some(template) = entry else { continue };
            let found = template.placeholders();
            if found != expected {
                return Err(CreateError::PlaceholderMismatch {
                    locale: locale.clone(),
                    expected: expected.iter().map(ToString::to_string).collect(),
                    found: found.iter().map(ToString::to_string).collect(),
                });
            }
        }

        Ok(Self { entries: parsed })
    }

    /// Look up the template for a locale.
    ///
    /// Returns `None` when the entry is absent or the locale has no entry at
    /// all (an undeclared locale passed as a per-call override).
    pub fn get(&self, locale: &LocaleId) -> Option<&Template> {
        self.entries.get(locale).and_then(|entry| entry.as_ref())
    }

    /// Build a store directly from parsed entries, bypassing validation.
    #[cfg(test)]
    pub(crate) fn from_parsed(entries: BTreeMap<LocaleId, Option<Template>>) -> Self {
        Self { entries }
    }
}
