//! Id-to-display-name lookup for sale parties.

use std::collections::HashMap;

use super::customer::Customer;
use super::product::Product;
use super::sale::PartyRef;

/// Sentinel returned when no resolution rule succeeds.
pub const UNKNOWN: &str = "Desconhecido";

/// Id → display-name map built from a normalized reference collection.
///
/// Records without an id are skipped; duplicate ids are last-write-wins
/// and are not deduplicated further.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameIndex {
    names: HashMap<String, String>,
}

impl NameIndex {
    pub fn from_customers(customers: &[Customer]) -> Self {
        Self {
            names: customers
                .iter()
                .filter(|customer| !customer.id.is_empty())
                .map(|customer| (customer.id.clone(), customer.name.clone()))
                .collect(),
        }
    }

    pub fn from_products(products: &[Product]) -> Self {
        Self {
            names: products
                .iter()
                .filter(|product| !product.id.is_empty())
                .map(|product| (product.id.clone(), product.name.clone()))
                .collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Resolves a party reference to a display name. Total function:
    /// an embedded or denormalized name is returned as-is, a foreign
    /// key not present in the index degrades to the id itself, and an
    /// absent reference yields the [`UNKNOWN`] sentinel.
    pub fn resolve(&self, party: &PartyRef) -> String {
        match party {
            PartyRef::Embedded(name) | PartyRef::Inline(name) => name.clone(),
            PartyRef::Key(id) => self
                .names
                .get(id)
                .cloned()
                .unwrap_or_else(|| id.clone()),
            PartyRef::Unknown => UNKNOWN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn index() -> NameIndex {
        let customers = vec![
            Customer::from_raw(&json!({ "id": 7, "nome": "Ana" })),
            Customer::from_raw(&json!({ "id": 8, "nome": "Bruno" })),
        ];
        NameIndex::from_customers(&customers)
    }

    #[test]
    fn foreign_key_resolves_through_the_index() {
        assert_eq!(index().resolve(&PartyRef::Key("7".to_string())), "Ana");
    }

    #[test]
    fn embedded_name_wins_even_with_an_index_present() {
        let party = PartyRef::Embedded("Bruno".to_string());
        assert_eq!(index().resolve(&party), "Bruno");
    }

    #[test]
    fn missing_key_degrades_to_the_id_itself() {
        assert_eq!(index().resolve(&PartyRef::Key("99".to_string())), "99");
    }

    #[test]
    fn absent_reference_yields_the_sentinel() {
        assert_eq!(index().resolve(&PartyRef::Unknown), UNKNOWN);
    }

    #[test]
    fn duplicate_ids_are_last_write_wins() {
        let customers = vec![
            Customer::from_raw(&json!({ "id": 1, "nome": "Primeira" })),
            Customer::from_raw(&json!({ "id": 1, "nome": "Segunda" })),
        ];
        let index = NameIndex::from_customers(&customers);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("1"), Some("Segunda"));
    }

    #[test]
    fn records_without_an_id_are_skipped() {
        let customers = vec![Customer::from_raw(&json!({ "nome": "Sem id" }))];
        assert!(NameIndex::from_customers(&customers).is_empty());
    }
}
