//! Error types for engine configuration, handle construction, and resolution.

use thiserror::Error;

use crate::types::LocaleId;

/// Errors raised while constructing an [`Engine`](crate::Engine).
///
/// Configuration errors are fatal: the caller must fix the setup before any
/// resolution can run.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Current locale not in the declared locale set.
    #[error("current locale '{locale}' is not in the declared locale set{}", suggestion_suffix(suggestions))]
    UnknownCurrentLocale {
        locale: LocaleId,
        suggestions: Vec<String>,
    },

    /// Fallback locale not in the declared locale set.
    #[error("fallback locale '{locale}' is not in the declared locale set{}", suggestion_suffix(suggestions))]
    UnknownFallbackLocale {
        locale: LocaleId,
        suggestions: Vec<String>,
    },
}

/// Errors raised while building a translation handle via `create` or
/// `variation`.
///
/// These fail fast and block handle creation; other handles are unaffected.
#[derive(Debug, Error)]
pub enum CreateError {
    /// A translation entry or variation override names an undeclared locale.
    #[error("undeclared locale '{locale}', declared: {}{}", declared.join(", "), suggestion_suffix(suggestions))]
    UndeclaredLocale {
        locale: LocaleId,
        declared: Vec<String>,
        suggestions: Vec<String>,
    },

    /// A declared locale has no entry in the translation set.
    #[error("no entry for declared locale '{locale}'; mark it absent explicitly if untranslated")]
    MissingEntry { locale: LocaleId },

    /// The fallback locale's entry is marked absent.
    #[error("fallback locale '{locale}' is marked absent; the fallback template must always be present")]
    AbsentFallback { locale: LocaleId },

    /// A locale's template uses a different placeholder set than the fallback
    /// template.
    #[error("template for locale '{locale}' uses placeholders [{}], fallback template uses [{}]", found.join(", "), expected.join(", "))]
    PlaceholderMismatch {
        locale: LocaleId,
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// A variation override uses placeholders the fallback template does not.
    #[error("variation override for locale '{locale}' uses unknown placeholders: {}", unknown.join(", "))]
    UnknownPlaceholders {
        locale: LocaleId,
        unknown: Vec<String>,
    },
}

/// An error that occurred during one resolution call.
///
/// Local to that call: the handle is not corrupted and subsequent calls are
/// unaffected.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Neither the requested locale nor the fallback locale yields a template.
    #[error("no translation for locale '{locale}' and no fallback template for '{fallback}'")]
    MissingTranslation {
        locale: LocaleId,
        fallback: LocaleId,
    },
}

/// Rank `candidates` by similarity to `input`, returning the closest matches.
///
/// Used for "did you mean" hints in configuration and construction errors.
/// Returns at most three candidates above the similarity threshold, best
/// first.
pub fn compute_suggestions(input: &str, candidates: &[String]) -> Vec<String> {
    let mut scored: Vec<(f64, &String)> = candidates
        .iter()
        .map(|candidate| (strsim::jaro_winkler(input, candidate), candidate))
        .filter(|(score, _)| *score >= 0.7)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}

/// Render a ", did you mean ...?" message suffix, empty without suggestions.
fn suggestion_suffix(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean '{}'?", suggestions.join("', '"))
    }
}
