pub mod parser;
pub mod resolver;
pub mod types;

pub use parser::{Segment, Template, parse_template};
pub use resolver::{
    ConfigError, CreateError, Engine, EngineConfig, Predicate, ResolveError, TranslationHandle,
    TranslationSet, compute_suggestions, interpolate,
};
pub use types::{LocaleId, Value, Variables};

/// Creates a `HashMap<String, Value>` from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, or strings directly.
///
/// # Example
///
/// ```
/// use varloc::{Value, vars};
///
/// let v = vars! { "amount" => 3, "name" => "Alice" };
/// assert_eq!(v.len(), 2);
/// assert_eq!(v["amount"].as_number(), Some(3));
/// assert_eq!(v["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! vars {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}

/// Creates a `BTreeMap<LocaleId, Option<String>>` translation table from
/// locale-to-template pairs.
///
/// The bare word `absent` marks a locale that deliberately has no template;
/// it becomes a `None` entry, which counts as covering the locale.
///
/// # Example
///
/// ```
/// use varloc::{LocaleId, translations};
///
/// let table = translations! {
///     "en" => "Hello!",
///     "ba" => "Zdravo!",
///     "fr" => absent,
/// };
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.get(&LocaleId::new("fr")), Some(&None));
/// ```
#[macro_export]
macro_rules! translations {
    (@entry absent) => {
        ::std::option::Option::None
    };
    (@entry $template:expr) => {
        ::std::option::Option::Some(::std::string::String::from($template))
    };
    {} => {
        ::std::collections::BTreeMap::<$crate::LocaleId, ::std::option::Option<String>>::new()
    };
    { $($locale:expr => $entry:tt),+ $(,)? } => {
        {
            let mut map =
                ::std::collections::BTreeMap::<$crate::LocaleId, ::std::option::Option<String>>::new();
            $(
                map.insert($crate::LocaleId::new($locale), $crate::translations!(@entry $entry));
            )+
            map
        }
    };
}
