//! Identifier tokens and their rendered variants.

use std::{cell::OnceCell, fmt, sync::Arc};

use crate::{
    MemoCache,
    case::{join_camel, join_lower, join_pascal, pluralize_last, split_words},
};

/// Every case and plural rendering of one identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variants {
    /// `CustomerAddress`
    pub pascal: String,
    /// `customerAddress`
    pub camel: String,
    /// `customer_address`
    pub snake: String,
    /// `customer-address`
    pub kebab: String,
    /// `CUSTOMER_ADDRESS`
    pub upper_snake: String,
    /// `Customer Address`
    pub title: String,
    /// `CustomerAddresses`
    pub pascal_plural: String,
    /// `customerAddresses`
    pub camel_plural: String,
    /// `customer_addresses`
    pub snake_plural: String,
    /// `customer-addresses`
    pub kebab_plural: String,
}

impl Variants {
    /// Compute the variants of an identifier.
    pub fn of(identifier: &str) -> Self {
        let words = split_words(identifier);
        let plural = pluralize_last(&words);

        Self {
            pascal: join_pascal(&words),
            camel: join_camel(&words),
            snake: join_lower(&words, "_"),
            kebab: join_lower(&words, "-"),
            upper_snake: words
                .iter()
                .map(|w| w.to_uppercase())
                .collect::<Vec<_>>()
                .join("_"),
            title: words
                .iter()
                .map(|w| crate::case::capitalize(w))
                .collect::<Vec<_>>()
                .join(" "),
            pascal_plural: join_pascal(&plural),
            camel_plural: join_camel(&plural),
            snake_plural: join_lower(&plural, "_"),
            kebab_plural: join_lower(&plural, "-"),
        }
    }

    /// Named variants in a stable order, keyed by their template suffix.
    pub fn named(&self) -> [(&'static str, &str); 10] {
        [
            ("PascalCase", self.pascal.as_str()),
            ("CamelCase", self.camel.as_str()),
            ("SnakeCase", self.snake.as_str()),
            ("KebabCase", self.kebab.as_str()),
            ("UpperSnakeCase", self.upper_snake.as_str()),
            ("TitleCase", self.title.as_str()),
            ("PascalCasePlural", self.pascal_plural.as_str()),
            ("CamelCasePlural", self.camel_plural.as_str()),
            ("SnakeCasePlural", self.snake_plural.as_str()),
            ("KebabCasePlural", self.kebab_plural.as_str()),
        ]
    }
}

/// Compute the case and plural variants of an identifier.
///
/// Never fails: empty or delimiter-only input produces variants of a single
/// as-is word.
///
/// ```
/// use weave_core::variants;
///
/// let v = variants("customer_address");
/// assert_eq!(v.pascal, "CustomerAddress");
/// assert_eq!(v.camel_plural, "customerAddresses");
/// ```
pub fn variants(identifier: &str) -> Variants {
    Variants::of(identifier)
}

/// A raw identifier whose variants are computed on first use.
#[derive(Debug, Clone)]
pub struct Token {
    raw: String,
    variants: OnceCell<Variants>,
}

impl Token {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            variants: OnceCell::new(),
        }
    }

    /// The identifier as given.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// All variants, computed once.
    pub fn variants(&self) -> &Variants {
        self.variants.get_or_init(|| Variants::of(&self.raw))
    }

    pub fn pascal(&self) -> &str {
        &self.variants().pascal
    }

    pub fn camel(&self) -> &str {
        &self.variants().camel
    }

    pub fn snake(&self) -> &str {
        &self.variants().snake
    }

    pub fn kebab(&self) -> &str {
        &self.variants().kebab
    }

    pub fn upper_snake(&self) -> &str {
        &self.variants().upper_snake
    }

    pub fn title(&self) -> &str {
        &self.variants().title
    }

    pub fn pascal_plural(&self) -> &str {
        &self.variants().pascal_plural
    }

    pub fn camel_plural(&self) -> &str {
        &self.variants().camel_plural
    }

    pub fn snake_plural(&self) -> &str {
        &self.variants().snake_plural
    }

    pub fn kebab_plural(&self) -> &str {
        &self.variants().kebab_plural
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Token {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Token {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

/// Memoizing front for [`variants`], shared across a generation run.
///
/// Template flattening derives the same handful of identifiers over and
/// over; the inflector computes each once.
#[derive(Debug, Default)]
pub struct Inflector {
    cache: MemoCache<String, Arc<Variants>>,
}

impl Inflector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Variants of `identifier`, computed at most once per distinct input.
    pub fn variants(&self, identifier: &str) -> Arc<Variants> {
        if let Some(hit) = self.cache.get(identifier) {
            return hit;
        }
        self.cache
            .get_or_insert_with(identifier.to_string(), || Arc::new(Variants::of(identifier)))
    }

    /// Number of distinct identifiers seen.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_single_word() {
        let v = variants("Customer");
        assert_eq!(v.pascal, "Customer");
        assert_eq!(v.camel, "customer");
        assert_eq!(v.snake, "customer");
        assert_eq!(v.kebab, "customer");
        assert_eq!(v.upper_snake, "CUSTOMER");
        assert_eq!(v.title, "Customer");
        assert_eq!(v.pascal_plural, "Customers");
        assert_eq!(v.camel_plural, "customers");
    }

    #[test]
    fn test_variants_plural_applies_to_last_word() {
        let v = variants("ProductCategory");
        assert_eq!(v.pascal_plural, "ProductCategories");
        assert_eq!(v.kebab_plural, "product-categories");
        assert_eq!(v.snake_plural, "product_categories");
        assert_eq!(v.title, "Product Category");
    }

    #[test]
    fn test_variants_empty() {
        let v = variants("");
        assert_eq!(v.pascal, "");
        assert_eq!(v.camel, "");
        assert_eq!(v.pascal_plural, "");
    }

    #[test]
    fn test_named_order() {
        let v = variants("order");
        let names: Vec<_> = v.named().iter().map(|(k, _)| *k).collect();
        assert_eq!(names[0], "PascalCase");
        assert_eq!(names[6], "PascalCasePlural");
    }

    #[test]
    fn test_token_lazy() {
        let token = Token::new("line_item");
        assert_eq!(token.raw(), "line_item");
        assert_eq!(token.pascal(), "LineItem");
        assert_eq!(token.camel_plural(), "lineItems");
        assert_eq!(token.to_string(), "line_item");
    }

    #[test]
    fn test_inflector_memoizes() {
        let inflector = Inflector::new();
        let first = inflector.variants("customer");
        let second = inflector.variants("customer");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(inflector.cached(), 1);

        inflector.variants("order");
        assert_eq!(inflector.cached(), 2);
    }
}
