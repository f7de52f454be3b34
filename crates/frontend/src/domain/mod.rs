pub mod customers;
pub mod products;
pub mod sales;
