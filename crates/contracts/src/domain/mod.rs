pub mod customer;
pub mod fields;
pub mod product;
pub mod reference;
pub mod sale;

pub use customer::Customer;
pub use product::Product;
pub use reference::NameIndex;
pub use sale::{PartyRef, Sale};
