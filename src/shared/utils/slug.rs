use once_cell::sync::Lazy;
use regex::Regex;

static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9_-]").expect("valid slug regex"));

/// URL-safe identifier of a display name: "Stock Ledger" -> "stock-ledger"
pub fn slug(name: &str) -> String {
    let lowered = name.trim().to_lowercase().replace(' ', "-");
    NON_SLUG_CHARS.replace_all(&lowered, "").into_owned()
}

/// Best-effort reverse of [`slug`], used when no title is known for a slug
pub fn unslug(slug: &str) -> String {
    to_title_case(&slug.replace(['-', '_'], " "))
}

/// "help_menu" -> "Help Menu"
pub fn to_title_case(text: &str) -> String {
    text.split([' ', '_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
