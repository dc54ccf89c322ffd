use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use label_core::{
    CatalogError, Category, FieldContext, LabelResolver, Locale, TranslationCatalog, inflect,
};

#[derive(Parser, Debug)]
#[command(
    name = "labels",
    version = "0.1.0",
    about = "Resolve translated labels for admin resources"
)]
pub struct Cli {
    #[arg(short = 'c', long = "config", global = true, help = "YAML config file")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short = 'l',
        long = "locale",
        global = true,
        value_parser = parse_locale,
        help = "Override the configured locale"
    )]
    pub locale: Option<Locale>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a field, navigation or page label
    Resolve {
        entity: String,
        field: String,
        #[arg(long, value_enum, default_value = "fields")]
        category: CategoryArg,
        /// The field is rendered through a relationship component
        #[arg(short = 'r', long)]
        relationship: bool,
    },
    /// Singular (or plural) resource label
    Resource {
        entity: String,
        #[arg(short = 'p', long)]
        plural: bool,
    },
    /// Navigation label and group
    Navigation { entity: String },
    /// Page title
    Page { entity: String, page: String },
    /// Catalog slug of an entity; needs no config
    Slug { entity: String },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryArg {
    Fields,
    Navigation,
    Pages,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Fields => Category::Fields,
            CategoryArg::Navigation => Category::Navigation,
            CategoryArg::Pages => Category::Pages,
        }
    }
}

fn parse_locale(tag: &str) -> Result<Locale, CatalogError> {
    Locale::parse(tag)
}

impl Command {
    pub fn needs_catalog(&self) -> bool {
        !matches!(self, Command::Slug { .. })
    }
}

/// Output line(s) for a command.
pub fn execute<C: TranslationCatalog>(resolver: &LabelResolver<C>, command: &Command) -> String {
    match command {
        Command::Resolve {
            entity,
            field,
            category,
            relationship,
        } => {
            let context = if *relationship {
                FieldContext::Relationship
            } else {
                FieldContext::Plain
            };
            resolver.resolve_in(entity, (*category).into(), field, context)
        }
        Command::Resource { entity, plural } => {
            if *plural {
                resolver.plural_resource_label(entity)
            } else {
                resolver.resource_label(entity)
            }
        }
        Command::Navigation { entity } => match resolver.navigation_group(entity) {
            Some(group) => format!("{}\n{}", resolver.navigation_label(entity), group),
            None => resolver.navigation_label(entity),
        },
        Command::Page { entity, page } => resolver.page_title(entity, page),
        Command::Slug { entity } => inflect::entity_slug(entity),
    }
}

#[cfg(test)]
mod tests {
    use label_core::Catalog;

    use super::*;

    const EN: &str = r#"
[products]
label = "Product"

[products.navigation]
group = "Shop"

[products.fields]
owner = "Owner"
"#;

    fn resolver() -> LabelResolver {
        let mut catalog = Catalog::new();
        catalog.insert_toml(&Locale::default(), EN).unwrap();
        LabelResolver::new(catalog, Locale::default())
    }

    fn run(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        execute(&resolver(), &cli.command)
    }

    #[test]
    fn test_parse_global_options() {
        let cli =
            Cli::try_parse_from(["labels", "slug", "Category", "-c", "labels.yml", "-l", "de_DE"])
                .unwrap();
        assert_eq!(cli.config_file, Some(PathBuf::from("labels.yml")));
        assert_eq!(cli.locale, Some(Locale::parse("de-DE").unwrap()));
        assert!(!cli.command.needs_catalog());
    }

    #[test]
    fn test_parse_rejects_bad_locale() {
        assert!(Cli::try_parse_from(["labels", "-l", "en US", "slug", "Bus"]).is_err());
    }

    #[test]
    fn test_resolve() {
        assert_eq!(run(&["labels", "resolve", "Product", "owner.name", "-r"]), "Owner");
        assert_eq!(run(&["labels", "resolve", "Product", "created_at"]), "Created At");
        assert_eq!(
            run(&["labels", "resolve", "Product", "edit", "--category", "pages"]),
            "Edit"
        );
    }

    #[test]
    fn test_resource_and_navigation() {
        assert_eq!(run(&["labels", "resource", "Product"]), "Product");
        assert_eq!(run(&["labels", "resource", "Product", "--plural"]), "Products");
        assert_eq!(run(&["labels", "navigation", "Product"]), "Products\nShop");
        assert_eq!(run(&["labels", "page", "Product", "create"]), "Create");
    }

    #[test]
    fn test_slug() {
        assert_eq!(run(&["labels", "slug", "Category"]), "categories");
        assert_eq!(run(&["labels", "slug", "Bus"]), "buses");
    }
}
