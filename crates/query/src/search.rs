//! Free-text search over product name and SKU.

use serde::{Deserialize, Serialize};

use stockboard_core::ValueObject;
use stockboard_products::Product;

/// A normalized search term.
///
/// The term is trimmed on entry and matched as a literal, case-insensitive
/// substring of the product name or SKU. Nothing in it is interpreted as a
/// pattern, so `"a.b"` or `"(x*"` only match text containing exactly that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SearchTerm {
    term: String,
    folded: String,
}

impl SearchTerm {
    pub fn new(raw: &str) -> Self {
        let term = raw.trim().to_string();
        let folded = fold(&term);
        Self { term, folded }
    }

    /// Replace the term. Returns `false` when the normalized term is unchanged.
    pub fn set_term(&mut self, raw: &str) -> bool {
        let next = SearchTerm::new(raw);
        if next == *self {
            return false;
        }
        *self = next;
        true
    }

    /// Reset to match-all. Returns `false` if the term was already empty.
    pub fn clear(&mut self) -> bool {
        self.set_term("")
    }

    pub fn as_str(&self) -> &str {
        &self.term
    }

    /// Whether a term is present (the clear control is shown).
    pub fn is_active(&self) -> bool {
        !self.term.is_empty()
    }

    pub fn matches(&self, product: &Product) -> bool {
        if self.folded.is_empty() {
            return true;
        }
        contains_folded(product.name(), &self.folded)
            || contains_folded(product.sku(), &self.folded)
    }
}

/// Per-character lowercase. `str::to_lowercase` maps a final sigma by
/// context, which would make a term and its host text fold differently.
fn fold(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    fold(haystack).contains(folded_needle)
}

impl ValueObject for SearchTerm {}

impl From<String> for SearchTerm {
    fn from(value: String) -> Self {
        SearchTerm::new(&value)
    }
}

impl From<SearchTerm> for String {
    fn from(value: SearchTerm) -> Self {
        value.term
    }
}
