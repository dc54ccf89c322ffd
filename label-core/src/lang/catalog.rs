//! Translation catalogs: one nested TOML table per locale.
//!
//! A catalog file is named after its locale (`en.toml`, `pt-BR.toml`) and
//! holds one top-level table per entity slug:
//!
//! ```toml
//! [products]
//! label = "Product"
//! plural = "Products"
//!
//! [products.navigation]
//! label = "Catalog"
//! group = "Shop"
//!
//! [products.pages.create]
//! title = "New product"
//!
//! [products.fields]
//! name = "Product Name"
//! owner = "Owner"
//! ```

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use toml::Table;
use tracing::{debug, warn};

use crate::{error::CatalogError, key_path::KeyPath, lang::locale::Locale};

/// Read-only access to translated strings.
pub trait TranslationCatalog {
    /// The non-empty string stored at `path` for `locale`, if any.
    fn lookup(&self, locale: &str, path: &KeyPath) -> Option<&str>;
}

impl<C: TranslationCatalog + ?Sized> TranslationCatalog for &C {
    fn lookup(&self, locale: &str, path: &KeyPath) -> Option<&str> {
        (**self).lookup(locale, path)
    }
}

impl<C: TranslationCatalog + ?Sized> TranslationCatalog for std::sync::Arc<C> {
    fn lookup(&self, locale: &str, path: &KeyPath) -> Option<&str> {
        (**self).lookup(locale, path)
    }
}

#[derive(Debug, Default, Clone)]
pub struct Catalog {
    locales: HashMap<String, Table>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `<locale>.toml` file in `dir`.
    ///
    /// Files whose stem is not a valid locale tag are skipped with a warning.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(CatalogError::NotADirectory(dir.to_path_buf()));
        }
        let entries = fs::read_dir(dir).map_err(|source| CatalogError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut catalog = Catalog::new();
        for entry in entries {
            let path = entry
                .map_err(|source| CatalogError::Io {
                    path: dir.to_path_buf(),
                    source,
                })?
                .path();
            if path.extension().and_then(|e| e.to_str()) != Some("toml") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let locale = match Locale::parse(stem) {
                Ok(locale) => locale,
                Err(err) => {
                    warn!("Skipping catalog {}: {}", path.display(), err);
                    continue;
                }
            };
            catalog.load_file(&locale, &path)?;
        }
        debug!(
            "Loaded {} catalog locale(s) from {}",
            catalog.locales.len(),
            dir.display()
        );
        Ok(catalog)
    }

    /// Parse `path` and merge it into the entries for `locale`.
    pub fn load_file(&mut self, locale: &Locale, path: &Path) -> Result<(), CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.insert_toml(locale, &content)
            .map_err(|source| CatalogError::Parse {
                path: PathBuf::from(path),
                source,
            })
    }

    /// Parse TOML source and merge it into the entries for `locale`.
    /// Later keys override earlier ones.
    pub fn insert_toml(&mut self, locale: &Locale, source: &str) -> Result<(), toml::de::Error> {
        let table: Table = toml::from_str(source)?;
        let entry = self.locales.entry(locale.as_str().to_string()).or_default();
        merge(entry, table);
        Ok(())
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

fn merge(into: &mut Table, from: Table) {
    for (key, value) in from {
        let toml::Value::Table(incoming) = value else {
            into.insert(key, value);
            continue;
        };
        if let Some(toml::Value::Table(existing)) = into.get_mut(&key) {
            merge(existing, incoming);
            continue;
        }
        into.insert(key, toml::Value::Table(incoming));
    }
}

impl TranslationCatalog for Catalog {
    fn lookup(&self, locale: &str, path: &KeyPath) -> Option<&str> {
        let (last, parents) = path.segments().split_last()?;
        let mut table = self.locales.get(locale)?;
        for segment in parents {
            table = table.get(segment)?.as_table()?;
        }
        table
            .get(last)?
            .as_str()
            .filter(|value| !value.trim().is_empty())
    }
}
