//! The resolution engine.
//!
//! This module provides locale configuration, the validated per-locale
//! template store, the ordered variation list, the template-selection
//! algorithm, and placeholder interpolation.

mod context;
mod engine;
mod error;
mod handle;
mod interpolate;
mod translation_set;

pub use engine::{Engine, EngineConfig};
pub use error::{ConfigError, CreateError, ResolveError, compute_suggestions};
pub use handle::{Predicate, TranslationHandle};
pub use interpolate::interpolate;
pub use translation_set::TranslationSet;
