mod locale;
mod value;

pub use locale::LocaleId;
pub use value::{Value, Variables};
