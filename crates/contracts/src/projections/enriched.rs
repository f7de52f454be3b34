//! Sales joined to their resolved customer and product names.

use serde::{Deserialize, Serialize};

use crate::domain::{NameIndex, Sale};

/// A sale augmented with display names for both parties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedSale {
    pub id: String,
    pub customer_name: String,
    pub product_name: String,
    pub quantity: Option<i64>,
    pub total: f64,
}

/// Attaches resolved names to every sale. Order-preserving, inputs are
/// untouched; the same inputs always produce the same output.
pub fn join_sales(
    sales: &[Sale],
    customers: &NameIndex,
    products: &NameIndex,
) -> Vec<EnrichedSale> {
    sales
        .iter()
        .map(|sale| EnrichedSale {
            id: sale.id.clone(),
            customer_name: customers.resolve(&sale.customer),
            product_name: products.resolve(&sale.product),
            quantity: sale.quantity,
            total: sale.total,
        })
        .collect()
}

/// Which fields the dashboard's free-text filter matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Case-insensitive substring match on the customer name.
    Customer,
    /// Case-insensitive substring match on the product name.
    Product,
    /// Exact string equality on the sale id.
    Sale,
    /// Any of the above.
    #[default]
    All,
}

impl FilterMode {
    /// Maps the filter select's option value to a mode. Unrecognized
    /// keys fall back to [`FilterMode::All`].
    pub fn from_key(key: &str) -> Self {
        match key {
            "cliente" => FilterMode::Customer,
            "produto" => FilterMode::Product,
            "venda" => FilterMode::Sale,
            _ => FilterMode::All,
        }
    }
}

/// Dashboard filter. The query is trimmed and lowercased once; an empty
/// or whitespace-only query passes every sale through unchanged.
pub fn filter_by_query(sales: &[EnrichedSale], query: &str, mode: FilterMode) -> Vec<EnrichedSale> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return sales.to_vec();
    }
    sales
        .iter()
        .filter(|sale| matches(sale, &term, mode))
        .cloned()
        .collect()
}

fn matches(sale: &EnrichedSale, term: &str, mode: FilterMode) -> bool {
    let customer_hit = || sale.customer_name.to_lowercase().contains(term);
    let product_hit = || sale.product_name.to_lowercase().contains(term);
    let id_hit = || sale.id == term;
    match mode {
        FilterMode::Customer => customer_hit(),
        FilterMode::Product => product_hit(),
        FilterMode::Sale => id_hit(),
        FilterMode::All => customer_hit() || product_hit() || id_hit(),
    }
}

/// One row of the joined sales tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRow {
    pub id: String,
    pub customer: String,
    pub product: String,
    pub quantity: Option<i64>,
    pub total: f64,
}

/// Identity projection into the fields the sales tables render.
/// Formatting (currency, placeholders) is the presentation layer's job.
pub fn to_table_rows(sales: &[EnrichedSale]) -> Vec<SaleRow> {
    sales
        .iter()
        .map(|sale| SaleRow {
            id: sale.id.clone(),
            customer: sale.customer_name.clone(),
            product: sale.product_name.clone(),
            quantity: sale.quantity,
            total: sale.total,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Customer, Product, Sale};
    use serde_json::json;

    fn fixture() -> Vec<EnrichedSale> {
        let sales = vec![
            Sale::from_raw(&json!({ "id": 1, "cliente_id": 1, "produto_id": 10 })),
            Sale::from_raw(&json!({ "id": 2, "cliente_id": 2, "produto_id": 11 })),
        ];
        let customers =
            NameIndex::from_customers(&[Customer::from_raw(&json!({ "id": 1, "nome": "Ana" }))]);
        let products = NameIndex::from_products(&[
            Product::from_raw(&json!({ "id": 10, "nome": "Notebook" })),
            Product::from_raw(&json!({ "id": 11, "nome": "Mouse" })),
        ]);
        join_sales(&sales, &customers, &products)
    }

    #[test]
    fn join_resolves_names_and_degrades_missing_keys() {
        let enriched = fixture();
        assert_eq!(enriched[0].customer_name, "Ana");
        assert_eq!(enriched[0].product_name, "Notebook");
        // customer 2 is not in the index: the raw id stands in
        assert_eq!(enriched[1].customer_name, "2");
    }

    #[test]
    fn join_is_idempotent_over_immutable_inputs() {
        let sales = vec![Sale::from_raw(&json!({ "id": 1, "cliente_id": 1 }))];
        let customers =
            NameIndex::from_customers(&[Customer::from_raw(&json!({ "id": 1, "nome": "Ana" }))]);
        let products = NameIndex::default();
        let first = join_sales(&sales, &customers, &products);
        let second = join_sales(&sales, &customers, &products);
        assert_eq!(first, second);
    }

    #[test]
    fn customer_mode_matches_substring_case_insensitively() {
        let hits = filter_by_query(&fixture(), "an", FilterMode::Customer);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
    }

    #[test]
    fn sale_mode_requires_exact_id_equality() {
        let enriched = fixture();
        assert_eq!(filter_by_query(&enriched, "2", FilterMode::Sale).len(), 1);
        assert!(filter_by_query(&enriched, "20", FilterMode::Sale).is_empty());
    }

    #[test]
    fn all_mode_matches_any_field() {
        let enriched = fixture();
        assert_eq!(filter_by_query(&enriched, "mouse", FilterMode::All).len(), 1);
        assert_eq!(filter_by_query(&enriched, "1", FilterMode::All).len(), 1);
    }

    #[test]
    fn whitespace_only_query_is_a_pass_through() {
        let enriched = fixture();
        assert_eq!(filter_by_query(&enriched, "   ", FilterMode::All), enriched);
        assert_eq!(filter_by_query(&enriched, "", FilterMode::Customer), enriched);
    }

    #[test]
    fn table_rows_are_an_identity_projection() {
        let rows = to_table_rows(&fixture());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].customer, "Ana");
        assert_eq!(rows[0].product, "Notebook");
    }
}
