//! Chart series for the dashboard.

use serde::{Deserialize, Serialize};

use crate::domain::Product;

use super::enriched::EnrichedSale;

/// Labels plus per-label sale counts, aligned by position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Distinct product names, in first-seen order.
    pub labels: Vec<String>,
    pub sales_counts: Vec<u32>,
}

pub fn to_chart_series(sales: &[EnrichedSale]) -> ChartSeries {
    let mut series = ChartSeries::default();
    for sale in sales {
        match series
            .labels
            .iter()
            .position(|label| label == &sale.product_name)
        {
            Some(i) => series.sales_counts[i] += 1,
            None => {
                series.labels.push(sale.product_name.clone());
                series.sales_counts.push(1);
            }
        }
    }
    series
}

/// Stock level per chart label, matched by product name. Labels without
/// a matching product (unresolved names, the unknown sentinel) get 0.
pub fn stock_series(series: &ChartSeries, products: &[Product]) -> Vec<i64> {
    series
        .labels
        .iter()
        .map(|label| {
            products
                .iter()
                .find(|product| &product.name == label)
                .map(|product| product.stock)
                .unwrap_or(0)
        })
        .collect()
}
