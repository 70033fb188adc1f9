//! Engine configuration and construction.
//!
//! The engine is the entry point of the crate: it owns the declared locale
//! set, the fallback locale, and the shared current-locale context, and it
//! constructs validated translation handles.

use std::collections::BTreeMap;
use std::sync::Arc;

use bon::Builder;

use crate::resolver::context::LocaleContext;
use crate::resolver::error::{ConfigError, CreateError, compute_suggestions};
use crate::resolver::handle::TranslationHandle;
use crate::resolver::translation_set::TranslationSet;
use crate::types::LocaleId;

/// Declarative engine configuration: the declared locale set, the locale
/// selected at startup, and the fallback locale.
///
/// # Example
///
/// ```
/// use varloc::{Engine, EngineConfig};
///
/// let config = EngineConfig::builder()
///     .locales(vec!["en".to_string(), "de".to_string(), "ba".to_string()])
///     .current_locale("en")
///     .fallback_locale("ba")
///     .build();
///
/// let engine = Engine::new(config).unwrap();
/// assert_eq!(engine.current_locale().as_str(), "en");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct EngineConfig {
    /// Declared locale identifiers, in declaration order.
    pub locales: Vec<String>,

    /// The locale selected until the first `change_locale` call.
    pub current_locale: String,

    /// The locale guaranteed to carry a template in every translation set.
    pub fallback_locale: String,
}

/// State shared between an engine and every handle it creates.
#[derive(Debug)]
pub(crate) struct EngineShared {
    /// Declared locale set, in declaration order.
    pub(crate) locales: Vec<LocaleId>,
    /// The fallback locale; always a member of `locales`.
    pub(crate) fallback: LocaleId,
    /// The mutable current-locale cell.
    pub(crate) context: LocaleContext,
}

/// The resolution engine.
///
/// Holds the validated locale configuration and the shared current-locale
/// context. Cloning is cheap: clones share the context, so a `change_locale`
/// through any clone is observed by every handle of this engine.
///
/// # Example
///
/// ```
/// use varloc::{Engine, translations, vars};
///
/// let engine = Engine::with_locales(["en", "ba", "fr"], "en", "ba").unwrap();
/// let hello = engine
///     .create(translations! {
///         "en" => "Hello var{name}!",
///         "ba" => "Zdravo var{name}!",
///         "fr" => absent,
///     })
///     .unwrap();
///
/// assert_eq!(hello.get(&vars! { "name" => "Mira" }).unwrap(), "Hello Mira!");
///
/// // fr has no template of its own, so the fallback template is used.
/// engine.change_locale("fr");
/// assert_eq!(hello.get(&vars! { "name" => "Mira" }).unwrap(), "Zdravo Mira!");
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    shared: Arc<EngineShared>,
}

impl Engine {
    /// Construct an engine from a configuration.
    ///
    /// Fails when the current or fallback locale is not in the declared set.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let EngineConfig {
            locales,
            current_locale,
            fallback_locale,
        } = config;

        let locales: Vec<LocaleId> = locales.into_iter().map(LocaleId::from).collect();
        let current = LocaleId::from(current_locale);
        let fallback = LocaleId::from(fallback_locale);

        if !locales.contains(&current) {
            let declared: Vec<String> = locales.iter().map(ToString::to_string).collect();
            return Err(ConfigError::UnknownCurrentLocale {
                suggestions: compute_suggestions(current.as_str(), &declared),
                locale: current,
            });
        }
        if !locales.contains(&fallback) {
            let declared: Vec<String> = locales.iter().map(ToString::to_string).collect();
            return Err(ConfigError::UnknownFallbackLocale {
                suggestions: compute_suggestions(fallback.as_str(), &declared),
                locale: fallback,
            });
        }

        Ok(Self {
            shared: Arc::new(EngineShared {
                locales,
                fallback,
                context: LocaleContext::new(current),
            }),
        })
    }

    /// Construct an engine without going through [`EngineConfig`].
    ///
    /// Shorthand for the common case where the locale set is a literal list.
    pub fn with_locales<L, I>(
        locales: L,
        current_locale: impl Into<String>,
        fallback_locale: impl Into<String>,
    ) -> Result<Self, ConfigError>
    where
        L: IntoIterator<Item = I>,
        I: Into<String>,
    {
        Self::new(
            EngineConfig::builder()
                .locales(locales.into_iter().map(Into::into).collect())
                .current_locale(current_locale)
                .fallback_locale(fallback_locale)
                .build(),
        )
    }

    // =========================================================================
    // Locale Management
    // =========================================================================

    /// The declared locale set, in declaration order.
    pub fn locales(&self) -> &[LocaleId] {
        &self.shared.locales
    }

    /// Read the current locale.
    pub fn current_locale(&self) -> LocaleId {
        self.shared.context.current()
    }

    /// The fallback locale.
    pub fn fallback_locale(&self) -> &LocaleId {
        &self.shared.fallback
    }

    /// Replace the current locale for every subsequent `get` call, on every
    /// handle of this engine, that does not pass an explicit per-call locale.
    ///
    /// The new locale must be one of the declared locales; passing an
    /// undeclared locale is a caller bug and is not validated at this layer.
    pub fn change_locale(&self, locale: impl Into<LocaleId>) {
        self.shared.context.set(locale.into());
    }

    // =========================================================================
    // Handle Creation
    // =========================================================================

    /// Create a translation handle from a per-locale template table.
    ///
    /// The table must cover every declared locale, with `None` as the
    /// explicit absent marker, and the fallback locale's entry must be
    /// non-absent; every non-absent template must use the same placeholder
    /// set as the fallback template. The [`translations!`](crate::translations)
    /// macro builds the table.
    ///
    /// Returns a handle with an empty variation list.
    pub fn create(
        &self,
        translations: BTreeMap<LocaleId, Option<String>>,
    ) -> Result<TranslationHandle, CreateError> {
        let set = TranslationSet::new(translations, &self.shared.locales, &self.shared.fallback)?;
        Ok(TranslationHandle::new(Arc::clone(&self.shared), set))
    }
}
