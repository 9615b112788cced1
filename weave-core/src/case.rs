//! Identifier decomposition, case rendering and pluralization.

/// Nouns whose plural is the singular.
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
    "metadata",
    "feedback",
];

/// Irregular singular/plural pairs, lowercase.
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("ox", "oxen"),
    ("criterion", "criteria"),
    ("datum", "data"),
    ("index", "indices"),
];

/// Split an identifier into words.
///
/// Words break on any non-alphanumeric character, on a lowercase letter
/// followed by an uppercase one, and between letters and digits. Letters keep
/// their original case.
///
/// Input without any alphanumeric character is returned as a single word so
/// that callers always get something to render; empty input yields one empty
/// word.
///
/// ```
/// use weave_core::split_words;
///
/// assert_eq!(split_words("customerId"), vec!["customer", "Id"]);
/// assert_eq!(split_words("order-line_item"), vec!["order", "line", "item"]);
/// assert_eq!(split_words("Get2Fa"), vec!["Get", "2", "Fa"]);
/// ```
pub fn split_words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in s.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }

        if let Some(p) = prev {
            let case_break = p.is_lowercase() && c.is_uppercase();
            let digit_break = p.is_ascii_digit() != c.is_ascii_digit();
            if case_break || digit_break {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
        prev = Some(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    if words.is_empty() {
        words.push(s.to_string());
    }

    words
}

/// Upper-case the first character, keep the rest.
///
/// A first character whose upper-case form spans several characters (`ﬁ`,
/// `ß`) is kept as is, so the word still splits back into the same words.
pub(crate) fn capitalize(word: &str) -> String {
    map_first(word, char::to_uppercase)
}

/// Lower-case the first character, keep the rest.
///
/// Same single-character rule as [`capitalize`] (`İ` stays `İ`).
pub(crate) fn decapitalize(word: &str) -> String {
    map_first(word, char::to_lowercase)
}

fn map_first<I>(word: &str, map: impl Fn(char) -> I) -> String
where
    I: Iterator<Item = char>,
{
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut mapped = map(first);
    let first = match (mapped.next(), mapped.next()) {
        (Some(single), None) => single,
        _ => first,
    };

    let mut out = String::with_capacity(word.len());
    out.push(first);
    out.extend(chars);
    out
}

pub(crate) fn join_pascal(words: &[String]) -> String {
    words.iter().map(|w| capitalize(w)).collect()
}

pub(crate) fn join_camel(words: &[String]) -> String {
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            out.push_str(&decapitalize(word));
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

pub(crate) fn join_lower(words: &[String], sep: &str) -> String {
    words
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Convert to PascalCase (e.g., "customer_id" -> "CustomerId").
pub fn to_pascal_case(s: &str) -> String {
    join_pascal(&split_words(s))
}

/// Convert to camelCase (e.g., "CustomerId" -> "customerId").
pub fn to_camel_case(s: &str) -> String {
    join_camel(&split_words(s))
}

/// Convert to snake_case (e.g., "CustomerId" -> "customer_id").
pub fn to_snake_case(s: &str) -> String {
    join_lower(&split_words(s), "_")
}

/// Convert to kebab-case (e.g., "CustomerId" -> "customer-id").
pub fn to_kebab_case(s: &str) -> String {
    join_lower(&split_words(s), "-")
}

/// Convert to UPPER_SNAKE_CASE (e.g., "CustomerId" -> "CUSTOMER_ID").
pub fn to_upper_snake_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Pluralize a single word.
///
/// ```
/// use weave_core::pluralize;
///
/// assert_eq!(pluralize("Customer"), "Customers");
/// assert_eq!(pluralize("Category"), "Categories");
/// assert_eq!(pluralize("Address"), "Addresses");
/// assert_eq!(pluralize("Person"), "People");
/// ```
pub fn pluralize(word: &str) -> String {
    if word.is_empty() || !word.chars().any(char::is_alphabetic) {
        return word.to_string();
    }

    let lower = word.to_lowercase();

    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }

    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == lower) {
        return match_case(word, plural);
    }

    let shouting = word.len() > 1 && !word.chars().any(char::is_lowercase);

    let mut chars = lower.chars().rev();
    let last = chars.next();
    let before_last = chars.next();

    let (stem, suffix) = match (before_last, last) {
        (Some(b), Some('y')) if !"aeiou".contains(b) => (&word[..word.len() - 1], "ies"),
        _ if ["s", "x", "z", "ch", "sh"].iter().any(|s| lower.ends_with(s)) => (word, "es"),
        _ => (word, "s"),
    };

    if shouting {
        format!("{}{}", stem, suffix.to_uppercase())
    } else {
        format!("{}{}", stem, suffix)
    }
}

/// Pluralize the final word of a word list.
pub(crate) fn pluralize_last(words: &[String]) -> Vec<String> {
    let mut words = words.to_vec();
    if let Some(last) = words.last_mut() {
        *last = pluralize(last);
    }
    words
}

/// Apply the capitalization of `original` to a lowercase replacement.
fn match_case(original: &str, replacement: &str) -> String {
    if original.len() > 1 && !original.chars().any(char::is_lowercase) {
        replacement.to_uppercase()
    } else if original.chars().next().is_some_and(char::is_uppercase) {
        capitalize(replacement)
    } else {
        replacement.to_string()
    }
}
