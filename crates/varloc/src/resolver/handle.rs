//! Translation handles: a per-string template store, its ordered variation
//! list, and the resolution algorithm.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::parser::{Template, parse_template};
use crate::resolver::engine::EngineShared;
use crate::resolver::error::{CreateError, ResolveError, compute_suggestions};
use crate::resolver::interpolate::interpolate;
use crate::resolver::translation_set::TranslationSet;
use crate::types::{LocaleId, Variables};

/// A predicate over the caller-supplied variables of one resolution call.
pub type Predicate = Box<dyn Fn(&Variables) -> bool + Send + Sync>;

/// A conditional override: when the predicate matches, the override templates
/// shadow the base translation set for the locales they define.
struct Variation {
    predicate: Predicate,
    overrides: BTreeMap<LocaleId, Template>,
}

impl std::fmt::Debug for Variation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Variation")
            .field("predicate", &"<predicate>")
            .field("overrides", &self.overrides)
            .finish()
    }
}

/// The unit of translation: one base translation set plus an ordered list of
/// conditional variations, bound to the engine that created it.
///
/// A handle is created once per distinct translatable string via
/// [`Engine::create`](crate::Engine::create) and reused across many `get`
/// calls. The variation list is append-only; everything else is immutable
/// after construction.
pub struct TranslationHandle {
    shared: Arc<EngineShared>,
    set: TranslationSet,
    variations: Vec<Variation>,
}

impl std::fmt::Debug for TranslationHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationHandle")
            .field("shared", &self.shared)
            .field("set", &self.set)
            .field("variations", &self.variations)
            .finish()
    }
}

impl TranslationHandle {
    pub(crate) fn new(shared: Arc<EngineShared>, set: TranslationSet) -> Self {
        Self {
            shared,
            set,
            variations: Vec::new(),
        }
    }

    /// Append a conditional override, returning the handle for chaining.
    ///
    /// Variations are evaluated in insertion order on every `get`; the first
    /// matching predicate wins and later variations are ignored even when
    /// they also match. An override need not define every locale, and may use
    /// only placeholders that the base fallback template uses (a form for
    /// "one" may drop the count, but cannot introduce new names).
    ///
    /// # Example
    ///
    /// ```
    /// use varloc::{Engine, Value, translations, vars};
    ///
    /// let engine = Engine::with_locales(["en", "ba"], "en", "ba").unwrap();
    /// let dollars = engine
    ///     .create(translations! {
    ///         "en" => "You have var{amount} dollars",
    ///         "ba" => "Imate var{amount} dolara",
    ///     })
    ///     .unwrap()
    ///     .variation(
    ///         |vars| vars.get("amount").and_then(Value::coerce_number) == Some(1),
    ///         [("en", "You have var{amount} dollar"), ("ba", "Imate var{amount} dolar")],
    ///     )
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     dollars.get(&vars! { "amount" => "1" }).unwrap(),
    ///     "You have 1 dollar",
    /// );
    /// assert_eq!(
    ///     dollars.get(&vars! { "amount" => "21" }).unwrap(),
    ///     "You have 21 dollars",
    /// );
    /// ```
    pub fn variation<P, I, K, V>(mut self, predicate: P, overrides: I) -> Result<Self, CreateError>
    where
        P: Fn(&Variables) -> bool + Send + Sync + 'static,
        I: IntoIterator<Item = (K, V)>,
        K: Into<LocaleId>,
        V: Into<String>,
    {
        let allowed: BTreeSet<String> = self
            .set
            .get(&self.shared.fallback)
            .map(|template| template.placeholders().iter().map(ToString::to_string).collect())
            .unwrap_or_default();

        let mut parsed = BTreeMap::new();
        for (locale, source) in overrides {
            let locale = locale.into();
            if !self.shared.locales.contains(&locale) {
                let declared: Vec<String> =
                    self.shared.locales.iter().map(ToString::to_string).collect();
                return Err(CreateError::UndeclaredLocale {
                    suggestions: compute_suggestions(locale.as_str(), &declared),
                    locale,
                    declared,
                });
            }

            let template = parse_template(&source.into());
            let unknown: Vec<String> = template
                .placeholders()
                .into_iter()
                .filter(|name| !allowed.contains(*name))
                .map(ToString::to_string)
                .collect();
            if !unknown.is_empty() {
                return Err(CreateError::UnknownPlaceholders { locale, unknown });
            }

            parsed.insert(locale, template);
        }

        self.variations.push(Variation {
            predicate: Box::new(predicate),
            overrides: parsed,
        });
        Ok(self)
    }

    /// Resolve and interpolate using the engine's current locale.
    pub fn get(&self, variables: &Variables) -> Result<String, ResolveError> {
        let locale = self.shared.context.current();
        let template = self.resolve(&locale, variables)?;
        Ok(interpolate(template, variables))
    }

    /// Resolve and interpolate with an explicit per-call locale.
    ///
    /// Does not read or modify the engine's current-locale context, so
    /// concurrent callers needing different locales can use this without
    /// racing on `change_locale`.
    pub fn get_in(
        &self,
        locale: impl Into<LocaleId>,
        variables: &Variables,
    ) -> Result<String, ResolveError> {
        let locale = locale.into();
        let template = self.resolve(&locale, variables)?;
        Ok(interpolate(template, variables))
    }

    /// Pick the template for one call.
    ///
    /// Walks the variation list in insertion order and keeps the first
    /// predicate match. The candidate chain is: matched override for the
    /// requested locale, base entry for the requested locale, matched
    /// override for the fallback locale. When the chain yields nothing, the
    /// base fallback entry is used and a non-fatal "fallback used" diagnostic
    /// is emitted.
    fn resolve(&self, locale: &LocaleId, variables: &Variables) -> Result<&Template, ResolveError> {
        let matched = self
            .variations
            .iter()
            .find(|variation| (variation.predicate)(variables));

        let candidate = matched
            .and_then(|variation| variation.overrides.get(locale))
            .or_else(|| self.set.get(locale))
            .or_else(|| matched.and_then(|variation| variation.overrides.get(&self.shared.fallback)));

        if let Some(template) = candidate {
            return Ok(template);
        }

        match self.set.get(&self.shared.fallback) {
            Some(template) => {
                tracing::warn!(
                    requested = %locale,
                    fallback = %self.shared.fallback,
                    "no translation for requested locale, using fallback template"
                );
                Ok(template)
            }
            None => Err(ResolveError::MissingTranslation {
                locale: locale.clone(),
                fallback: self.shared.fallback.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::context::LocaleContext;

    fn shared(locales: &[&str], current: &str, fallback: &str) -> Arc<EngineShared> {
        Arc::new(EngineShared {
            locales: locales.iter().map(|locale| LocaleId::from(*locale)).collect(),
            fallback: LocaleId::from(fallback),
            context: LocaleContext::new(LocaleId::from(current)),
        })
    }

    // `Engine::create` rejects an absent fallback entry, so the last resort
    // of `resolve` can only be reached through an unvalidated store. It must
    // degrade into an error, not a panic.
    #[test]
    fn test_missing_fallback_template_is_an_error() {
        let entries = BTreeMap::from([
            (LocaleId::from("en"), None),
            (LocaleId::from("ba"), None),
        ]);
        let handle = TranslationHandle::new(
            shared(&["en", "ba"], "en", "ba"),
            TranslationSet::from_parsed(entries),
        );

        let err = handle.get(&Variables::new()).unwrap_err();
        assert!(matches!(err, ResolveError::MissingTranslation { .. }));
        assert_eq!(
            err.to_string(),
            "no translation for locale 'en' and no fallback template for 'ba'"
        );
    }

    #[test]
    fn test_missing_translation_names_the_requested_locale() {
        let entries = BTreeMap::from([
            (LocaleId::from("en"), None),
            (LocaleId::from("ba"), None),
        ]);
        let handle = TranslationHandle::new(
            shared(&["en", "ba"], "en", "ba"),
            TranslationSet::from_parsed(entries),
        );

        let err = handle.get_in("en", &Variables::new()).unwrap_err();
        let ResolveError::MissingTranslation { locale, fallback } = err;
        assert_eq!(locale.as_str(), "en");
        assert_eq!(fallback.as_str(), "ba");
    }
}
