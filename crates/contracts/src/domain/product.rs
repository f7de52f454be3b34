use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::fields;
use super::reference::UNKNOWN;

/// Canonical product record. Missing numeric fields default to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

impl Product {
    pub fn from_raw(raw: &Value) -> Self {
        let id = fields::id_of(raw, fields::PRODUCT_ID_KEYS).unwrap_or_default();
        let name = fields::string_of(raw, fields::PRODUCT_NAME_KEYS).unwrap_or_else(|| {
            if id.is_empty() {
                UNKNOWN.to_string()
            } else {
                id.clone()
            }
        });
        let price = fields::f64_of(raw, fields::PRODUCT_PRICE_KEYS).unwrap_or(0.0);
        let stock = fields::i64_of(raw, fields::PRODUCT_STOCK_KEYS).unwrap_or(0);
        Self {
            id,
            name,
            price,
            stock,
        }
    }

    /// Exact-match dialect of the products view: the query must equal
    /// the id, the name (case-insensitive) or the price's textual form.
    pub fn matches_exact(&self, term: &str) -> bool {
        self.id == term
            || self.name.to_lowercase() == term.to_lowercase()
            || self.price.to_string() == term
    }
}

/// Products view filter. An empty or whitespace-only query passes every
/// product through unchanged.
pub fn filter_exact(products: &[Product], query: &str) -> Vec<Product> {
    let term = query.trim();
    if term.is_empty() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|product| product.matches_exact(term))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn notebook() -> Product {
        Product::from_raw(&json!({ "id": 1, "nome": "Notebook", "preco": 3500.0, "estoque": 12 }))
    }

    #[test]
    fn normalizes_synonym_keys_and_defaults() {
        let product = Product::from_raw(&json!({ "produto_id": 9, "name": "Mouse" }));
        assert_eq!(product.id, "9");
        assert_eq!(product.name, "Mouse");
        assert_eq!(product.price, 0.0);
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn exact_match_accepts_id_name_or_price() {
        let product = notebook();
        assert!(product.matches_exact("1"));
        assert!(product.matches_exact("notebook"));
        assert!(product.matches_exact("3500"));
        assert!(!product.matches_exact("note"));
        assert!(!product.matches_exact("3500.5"));
    }

    #[test]
    fn fractional_price_matches_its_textual_form() {
        let product = Product::from_raw(&json!({ "id": 2, "nome": "Cabo", "preco": 10.5 }));
        assert!(product.matches_exact("10.5"));
    }

    #[test]
    fn blank_query_is_a_pass_through() {
        let products = vec![notebook()];
        assert_eq!(filter_exact(&products, ""), products);
        assert_eq!(filter_exact(&products, "   "), products);
        assert!(filter_exact(&products, "teclado").is_empty());
    }
}
