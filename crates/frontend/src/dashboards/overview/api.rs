use contracts::domain::{Customer, Product, Sale};
use futures::join;

use crate::shared::api;

/// The dashboard's three collections, normalized.
pub struct OverviewData {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub sales: Vec<Sale>,
}

/// Fetches all three collections concurrently. All-or-nothing: if any
/// request fails, the whole snapshot fails with that request's message.
pub async fn fetch_overview() -> Result<OverviewData, String> {
    let (sales, customers, products) = join!(
        api::fetch_sales(),
        api::fetch_customers(),
        api::fetch_products()
    );
    let (sales, customers, products) = (sales?, customers?, products?);

    Ok(OverviewData {
        customers: customers.iter().map(Customer::from_raw).collect(),
        products: products.iter().map(Product::from_raw).collect(),
        sales: sales.iter().map(Sale::from_raw).collect(),
    })
}
