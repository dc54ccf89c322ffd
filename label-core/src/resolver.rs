//! Label resolution: derive a key path, look it up, fall back to a
//! humanized segment.

use tracing::{debug, warn};

use crate::{
    inflect,
    key_path::{Category, KeyPath},
    lang::{
        catalog::{Catalog, TranslationCatalog},
        locale::{Locale, locale_chain},
    },
};

/// How the host is using a field reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldContext {
    #[default]
    Plain,
    /// Rendered through a relationship-aware component, so the reference
    /// must name a subfield (`owner.name`).
    Relationship,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelSource {
    Catalog { locale: String },
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    MissingSubfield { entity: String, field: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub label: String,
    pub path: KeyPath,
    pub source: LabelSource,
    pub diagnostic: Option<Diagnostic>,
}

/// Resolves display labels against a catalog for a fixed locale.
///
/// The resolver holds no mutable state; share it behind an `Arc` or
/// borrow it per request with [`LabelResolver::for_locale`].
#[derive(Debug, Clone)]
pub struct LabelResolver<C = Catalog> {
    catalog: C,
    locale: Locale,
    fallback_locale: Locale,
}

impl<C: TranslationCatalog> LabelResolver<C> {
    pub fn new(catalog: C, locale: Locale) -> Self {
        Self {
            catalog,
            locale,
            fallback_locale: Locale::default(),
        }
    }

    pub fn with_fallback_locale(mut self, fallback_locale: Locale) -> Self {
        self.fallback_locale = fallback_locale;
        self
    }

    /// A resolver over the same catalog for another active locale.
    pub fn for_locale(&self, locale: Locale) -> LabelResolver<&C> {
        LabelResolver {
            catalog: &self.catalog,
            locale,
            fallback_locale: self.fallback_locale.clone(),
        }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn fallback_locale(&self) -> &Locale {
        &self.fallback_locale
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn entity_slug(&self, entity: &str) -> String {
        inflect::entity_slug(entity)
    }

    pub fn resolve(&self, entity: &str, category: Category, field: &str) -> String {
        self.resolve_in(entity, category, field, FieldContext::Plain)
    }

    pub fn resolve_relationship(&self, entity: &str, category: Category, field: &str) -> String {
        self.resolve_in(entity, category, field, FieldContext::Relationship)
    }

    pub fn resolve_in(
        &self,
        entity: &str,
        category: Category,
        field: &str,
        context: FieldContext,
    ) -> String {
        self.resolve_detailed(entity, category, field, context).label
    }

    pub fn resolve_detailed(
        &self,
        entity: &str,
        category: Category,
        field: &str,
        context: FieldContext,
    ) -> Resolution {
        let path = KeyPath::for_field(entity, category, field);

        let missing_subfield = field
            .split_once('.')
            .is_none_or(|(_, subfield)| subfield.is_empty());
        let diagnostic = if context == FieldContext::Relationship && missing_subfield {
            warn!(
                entity,
                field,
                key = %path,
                "relationship field missing subfield"
            );
            Some(Diagnostic::MissingSubfield {
                entity: entity.to_string(),
                field: field.to_string(),
            })
        } else {
            None
        };

        let fallback = inflect::humanize(path.last());
        let mut resolution = self.resolve_path(path, fallback);
        resolution.diagnostic = diagnostic;
        resolution
    }

    /// `<slug>.label`, falling back to the humanized entity name.
    pub fn resource_label(&self, entity: &str) -> String {
        let path = KeyPath::for_entity(entity, &["label"]);
        let fallback = humanize_slug(&inflect::kebab(entity));
        self.resolve_path(path, fallback).label
    }

    /// `<slug>.plural`, falling back to the humanized plural slug.
    pub fn plural_resource_label(&self, entity: &str) -> String {
        let path = KeyPath::for_entity(entity, &["plural"]);
        let fallback = humanize_slug(&inflect::entity_slug(entity));
        self.resolve_path(path, fallback).label
    }

    /// `<slug>.navigation.label`, falling back to the plural resource label.
    pub fn navigation_label(&self, entity: &str) -> String {
        let path = KeyPath::for_entity(entity, &["navigation", "label"]);
        match self.lookup(&path) {
            Some((_, label)) => label.to_string(),
            None => self.plural_resource_label(entity),
        }
    }

    /// `<slug>.navigation.group`; `None` leaves the entry ungrouped.
    pub fn navigation_group(&self, entity: &str) -> Option<String> {
        let path = KeyPath::for_entity(entity, &["navigation", "group"]);
        self.lookup(&path).map(|(_, group)| group.to_string())
    }

    /// `<slug>.pages.<page>.title`, falling back to the humanized page name.
    pub fn page_title(&self, entity: &str, page: &str) -> String {
        let path = KeyPath::for_entity(entity, &["pages", page, "title"]);
        self.resolve_path(path, inflect::humanize(page)).label
    }

    fn resolve_path(&self, path: KeyPath, fallback: String) -> Resolution {
        match self.lookup(&path) {
            Some((locale, label)) => Resolution {
                label: label.to_string(),
                source: LabelSource::Catalog {
                    locale: locale.to_string(),
                },
                path,
                diagnostic: None,
            },
            None => {
                debug!(key = %path, label = %fallback, "no translation, using fallback");
                Resolution {
                    label: fallback,
                    source: LabelSource::Fallback,
                    path,
                    diagnostic: None,
                }
            }
        }
    }

    fn lookup(&self, path: &KeyPath) -> Option<(&str, &str)> {
        locale_chain(&self.locale, &self.fallback_locale)
            .into_iter()
            .find_map(|locale| {
                self.catalog
                    .lookup(locale, path)
                    .map(|label| (locale, label))
            })
    }
}

fn humanize_slug(slug: &str) -> String {
    inflect::humanize(&slug.replace('-', "_"))
}
