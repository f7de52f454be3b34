use serde::{Deserialize, Serialize};

use crate::domain::{Customer, Product, Sale};

/// Summary counters for the dashboard stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub sale_count: usize,
    pub customer_count: usize,
    pub product_count: usize,
    pub total_stock: i64,
}

pub fn compute_totals(customers: &[Customer], products: &[Product], sales: &[Sale]) -> Totals {
    Totals {
        sale_count: sales.len(),
        customer_count: customers.len(),
        product_count: products.len(),
        total_stock: products.iter().map(|product| product.stock).sum(),
    }
}
