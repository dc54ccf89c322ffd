//! Lexical helpers used to turn class names into catalog slugs and
//! catalog segments back into display text.

use convert_case::{Boundary, Case, Converter};

/// Words whose plural is the singular.
const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "deer",
    "news",
    "media",
    "data",
    "metadata",
    "feedback",
    "software",
    "staff",
];

/// `(singular, plural, matches as a compound suffix)`. `man` and `ox` only
/// match whole words so `human` and `box` stay regular.
const IRREGULAR: &[(&str, &str, bool)] = &[
    ("person", "people", true),
    ("child", "children", true),
    ("man", "men", false),
    ("woman", "women", true),
    ("mouse", "mice", true),
    ("goose", "geese", true),
    ("tooth", "teeth", true),
    ("foot", "feet", true),
    ("ox", "oxen", false),
];

/// Nouns ending in `f`/`fe` that take `ves`, also as the tail of a
/// compound (`bookshelf`). Everything else (`roof`,
/// `chief`, `safe`) takes a plain `s`.
const F_TO_VES: &[&str] = &[
    "leaf", "loaf", "thief", "wolf", "shelf", "half", "calf", "knife", "life", "wife", "elf",
    "self",
];

/// Nouns ending in consonant + `o` that take `es`. The rest (`photo`,
/// `video`, `logo`) take a plain `s`.
const O_TO_OES: &[&str] = &[
    "hero", "potato", "tomato", "echo", "veto", "torpedo", "embargo",
];

/// Reduce a namespaced class name to its final segment.
///
/// `App\Models\Product` and `app::models::Product` both become `Product`.
pub fn base_name(name: &str) -> &str {
    let name = name.trim();
    let name = name.rsplit('\\').next().unwrap_or(name);
    name.rsplit("::").next().unwrap_or(name)
}

/// `OrderItem` -> `order-item`, `HTTPRequest` -> `http-request`.
///
/// Digits stay attached to their word: `Product2` -> `product2`.
pub fn kebab(name: &str) -> String {
    Converter::new()
        .to_case(Case::Kebab)
        .remove_boundaries(&Boundary::digits())
        .convert(base_name(name))
}

/// Pluralize the last segment of a kebab-case slug.
///
/// `order-item` -> `order-items`, `category` -> `categories`.
pub fn pluralize(slug: &str) -> String {
    match slug.rsplit_once('-') {
        Some((head, last)) => format!("{head}-{}", pluralize_word(last)),
        None => pluralize_word(slug),
    }
}

fn pluralize_word(word: &str) -> String {
    if word.is_empty() || UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    for &(singular, plural, compound) in IRREGULAR {
        if compound {
            if word.ends_with(plural) {
                return word.to_string();
            }
            if let Some(head) = word.strip_suffix(singular) {
                return format!("{head}{plural}");
            }
        } else if word == plural {
            return word.to_string();
        } else if word == singular {
            return plural.to_string();
        }
    }
    if let Some(stem) = word.strip_suffix("is") {
        // analysis -> analyses
        if !stem.is_empty() {
            return format!("{stem}es");
        }
    }
    if F_TO_VES.iter().any(|noun| word.ends_with(noun)) {
        let stem = word
            .strip_suffix("fe")
            .or_else(|| word.strip_suffix('f'))
            .unwrap_or(word);
        return format!("{stem}ves");
    }
    if O_TO_OES.contains(&word) {
        return format!("{word}es");
    }
    if ["s", "x", "z", "ch", "sh"].iter().any(|s| word.ends_with(s)) {
        return format!("{word}es");
    }
    if let Some(stem) = word.strip_suffix('y') {
        if stem.chars().last().is_some_and(|c| !is_vowel(c)) {
            return format!("{stem}ies");
        }
    }
    format!("{word}s")
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Kebab-case and pluralize an entity name: `Category` -> `categories`.
pub fn entity_slug(name: &str) -> String {
    pluralize(&kebab(name))
}

/// `created_at` -> `Created At`
pub fn humanize(segment: &str) -> String {
    segment
        .split('_')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
