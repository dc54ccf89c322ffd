pub mod catalog;
pub mod locale;

pub use catalog::{Catalog, TranslationCatalog};
pub use locale::{Locale, locale_chain, system_locale};
