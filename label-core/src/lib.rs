//! Translated labels for admin resources.
//!
//! Given an entity name such as `Product` and a field reference such as
//! `owner.name`, the [`LabelResolver`] derives a catalog key
//! (`products.fields.owner`), looks it up for the active locale, and falls
//! back to a humanized label when no translation exists.

pub mod error;
pub mod inflect;
pub mod key_path;
pub mod lang;
pub mod resolver;

pub use error::CatalogError;
pub use key_path::{Category, KeyPath};
pub use lang::{Catalog, Locale, TranslationCatalog, system_locale};
pub use resolver::{Diagnostic, FieldContext, LabelResolver, LabelSource, Resolution};
