//! Shared string utilities for code generation.

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a kebab-case name to PascalCase (e.g., "product-item" -> "ProductItem")
pub fn to_pascal_case(s: &str) -> String {
    s.split('-').map(capitalize).collect()
}

/// Convert a kebab-case name to a display name (e.g., "product-item" -> "Product Item")
pub fn to_formal_case(s: &str) -> String {
    s.split('-')
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Drop the separators of a kebab-case name (e.g., "product-item" -> "productitem")
///
/// Used for route paths and menu links.
pub fn to_flat_case(s: &str) -> String {
    s.split('-').collect()
}

/// Convert a camelCase field name to a human label (e.g., "createdAt" -> "Created At")
pub fn to_label(s: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in s.chars() {
        if c == '_' || c == '-' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check that a name is lowercase kebab-case: one or more words of lowercase
/// letters and digits, each starting with a letter, joined by single hyphens.
pub fn is_kebab_case(s: &str) -> bool {
    !s.is_empty()
        && s.split('-').all(|word| {
            let mut chars = word.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
                && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}
