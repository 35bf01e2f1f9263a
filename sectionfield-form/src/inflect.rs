//! English inflection for handles.
//!
//! Only the last word of a camelCase, snake_case or kebab-case handle is
//! inflected; the prefix is kept as written (`mistletoeRedpole` →
//! `mistletoeRedpoles`).

/// Words with the same singular and plural form.
const UNINFLECTED: &[&str] = &[
    "data",
    "deer",
    "equipment",
    "fish",
    "information",
    "media",
    "metadata",
    "money",
    "news",
    "rice",
    "series",
    "sheep",
    "species",
];

/// Singular words ending in `s` that the suffix rules would otherwise strip.
const SINGULAR_IN_S: &[&str] = &[
    "alias", "atlas", "bias", "canvas", "chaos", "cosmos", "gas", "iris", "lens", "octopus",
    "pancreas",
];

/// (singular, plural) pairs that do not follow the suffix rules.
const IRREGULAR: &[(&str, &str)] = &[
    ("child", "children"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("man", "men"),
    ("mouse", "mice"),
    ("person", "people"),
    ("status", "statuses"),
    ("tooth", "teeth"),
    ("woman", "women"),
];

/// Pluralize the last word of a handle.
pub fn pluralize(handle: &str) -> String {
    let (prefix, word) = split_last_word(handle);
    format!("{prefix}{}", pluralize_word(word))
}

/// Singularize the last word of a handle.
pub fn singularize(handle: &str) -> String {
    let (prefix, word) = split_last_word(handle);
    format!("{prefix}{}", singularize_word(word))
}

fn split_last_word(handle: &str) -> (&str, &str) {
    let camel = handle
        .char_indices()
        .filter(|&(i, c)| i > 0 && c.is_uppercase())
        .map(|(i, _)| i)
        .last();
    let separated = handle.rfind(['_', '-']).map(|i| i + 1);
    handle.split_at(camel.max(separated).unwrap_or(0))
}

fn pluralize_word(word: &str) -> String {
    let lower = word.to_lowercase();
    if lower.is_empty() || UNINFLECTED.contains(&lower.as_str()) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == lower) {
        return match_case(word, plural);
    }
    if IRREGULAR.iter().any(|(_, plural)| *plural == lower) {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix('y') {
        if ends_with_consonant(stem) {
            return format!("{stem}ies");
        }
    }
    if ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        return format!("{word}es");
    }
    format!("{word}s")
}

fn singularize_word(word: &str) -> String {
    let lower = word.to_lowercase();
    if lower.is_empty() || UNINFLECTED.contains(&lower.as_str()) {
        return word.to_string();
    }
    if let Some((singular, _)) = IRREGULAR.iter().find(|(_, plural)| *plural == lower) {
        return match_case(word, singular);
    }
    if IRREGULAR.iter().any(|(singular, _)| *singular == lower) {
        return word.to_string();
    }

    if SINGULAR_IN_S.contains(&lower.as_str()) {
        return word.to_string();
    }
    if let Some(stem) = lower.strip_suffix("es") {
        if SINGULAR_IN_S.contains(&stem) {
            return word[..word.len() - 2].to_string();
        }
    }

    if lower.len() > 3 && lower.ends_with("ies") {
        return format!("{}y", &word[..word.len() - 3]);
    }
    if ["sses", "xes", "zes", "ches", "shes"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        return word[..word.len() - 2].to_string();
    }
    if ["ss", "us", "is"].iter().any(|suffix| lower.ends_with(suffix)) {
        return word.to_string();
    }
    match word.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => word.to_string(),
    }
}

fn ends_with_consonant(stem: &str) -> bool {
    stem.chars()
        .last()
        .is_some_and(|c| c.is_alphabetic() && !"aeiouAEIOU".contains(c))
}

/// Carry the capitalization of `original`'s first letter over to `replacement`.
fn match_case(original: &str, replacement: &str) -> String {
    let capitalized = original.chars().next().is_some_and(char::is_uppercase);
    if !capitalized {
        return replacement.to_string();
    }
    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
