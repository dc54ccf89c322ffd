use std::fmt;

use crate::inflect;

/// Section of an entity's catalog entry a label lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Fields,
    Navigation,
    Pages,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fields => "fields",
            Category::Navigation => "navigation",
            Category::Pages => "pages",
        }
    }

    pub fn from_name(name: &str) -> Option<Category> {
        match name {
            "fields" => Some(Category::Fields),
            "navigation" => Some(Category::Navigation),
            "pages" => Some(Category::Pages),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered catalog segments, e.g. `["products", "fields", "name"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// `[slug, category, segment]` for a field or page reference.
    ///
    /// A dotted relationship reference only contributes the part before
    /// the first `.`: `owner.name` is keyed as `owner`.
    pub fn for_field(entity: &str, category: Category, field: &str) -> Self {
        let segment = field.split_once('.').map_or(field, |(relation, _)| relation);
        Self::new([inflect::entity_slug(entity), category.as_str().into(), segment.into()])
    }

    /// `[slug, ...tail]` for resource-level keys such as `label`.
    pub fn for_entity(entity: &str, tail: &[&str]) -> Self {
        let mut segments = vec![inflect::entity_slug(entity)];
        segments.extend(tail.iter().map(|s| s.to_string()));
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn last(&self) -> &str {
        self.0.last().map_or("", String::as_str)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_path() {
        let path = KeyPath::for_field("Product", Category::Fields, "name");
        assert_eq!(path.segments(), ["products", "fields", "name"]);
        assert_eq!(path.to_string(), "products.fields.name");
    }

    #[test]
    fn test_relationship_path_drops_subfield() {
        let path = KeyPath::for_field("Product", Category::Fields, "owner.name");
        assert_eq!(path.to_string(), "products.fields.owner");

        let path = KeyPath::for_field("Product", Category::Fields, "owner.address.city");
        assert_eq!(path.to_string(), "products.fields.owner");
    }

    #[test]
    fn test_path_is_deterministic() {
        let a = KeyPath::for_field("OrderItem", Category::Pages, "edit");
        let b = KeyPath::for_field("OrderItem", Category::Pages, "edit");
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "order-items.pages.edit");
    }

    #[test]
    fn test_entity_path() {
        let path = KeyPath::for_entity("Category", &["navigation", "label"]);
        assert_eq!(path.to_string(), "categories.navigation.label");
        assert_eq!(path.last(), "label");
    }

    #[test]
    fn test_category_names() {
        for category in [Category::Fields, Category::Navigation, Category::Pages] {
            assert_eq!(Category::from_name(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_name("label"), None);
    }
}
