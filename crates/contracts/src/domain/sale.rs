use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::fields;

/// How a sale refers to one of its parties (customer or product).
///
/// The variant order mirrors the resolution rules: an embedded record
/// wins over a foreign key, a foreign key over a denormalized name
/// carried on the sale itself. The reference is captured once at
/// normalization time so resolving it later against an index stays a
/// pure lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartyRef {
    /// The sale embeds the full party record; its display name (or,
    /// failing that, its own id) was extracted up front.
    Embedded(String),
    /// Foreign-key id, to be resolved against a [`NameIndex`].
    ///
    /// [`NameIndex`]: super::reference::NameIndex
    Key(String),
    /// Denormalized display name carried directly on the sale.
    Inline(String),
    /// No reference of any recognized shape was present.
    Unknown,
}

impl PartyRef {
    /// Foreign-key id, when the reference is a plain key.
    pub fn key(&self) -> Option<&str> {
        match self {
            PartyRef::Key(id) => Some(id),
            _ => None,
        }
    }
}

struct PartyKeys {
    object: &'static str,
    embedded_names: &'static [&'static str],
    embedded_ids: &'static [&'static str],
    foreign: &'static [&'static str],
    inline_names: &'static [&'static str],
}

const CUSTOMER_KEYS: PartyKeys = PartyKeys {
    object: fields::SALE_CUSTOMER_OBJECT_KEY,
    embedded_names: fields::CUSTOMER_NAME_KEYS,
    embedded_ids: fields::CUSTOMER_ID_KEYS,
    foreign: fields::SALE_CUSTOMER_FK_KEYS,
    inline_names: fields::SALE_CUSTOMER_NAME_KEYS,
};

const PRODUCT_KEYS: PartyKeys = PartyKeys {
    object: fields::SALE_PRODUCT_OBJECT_KEY,
    embedded_names: fields::PRODUCT_NAME_KEYS,
    embedded_ids: fields::PRODUCT_ID_KEYS,
    foreign: fields::SALE_PRODUCT_FK_KEYS,
    inline_names: fields::SALE_PRODUCT_NAME_KEYS,
};

fn extract_party(raw: &Value, keys: &PartyKeys) -> PartyRef {
    if let Some(embedded) = raw.get(keys.object).filter(|value| value.is_object()) {
        let name = fields::string_of(embedded, keys.embedded_names)
            .or_else(|| fields::id_of(embedded, keys.embedded_ids));
        if let Some(name) = name {
            return PartyRef::Embedded(name);
        }
        // An embedded object with neither name nor id tells us nothing;
        // fall through to the remaining rules.
    }
    if let Some(id) = fields::id_of(raw, keys.foreign) {
        return PartyRef::Key(id);
    }
    if let Some(name) = fields::string_of(raw, keys.inline_names) {
        return PartyRef::Inline(name);
    }
    PartyRef::Unknown
}

/// Canonical sale record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: String,
    pub customer: PartyRef,
    pub product: PartyRef,
    pub quantity: Option<i64>,
    pub unit_price: Option<f64>,
    /// Resolved at normalization time by the fixed fallback chain:
    /// explicit total key, then `quantity * unit_price`, then zero.
    pub total: f64,
}

impl Sale {
    pub fn from_raw(raw: &Value) -> Self {
        let id = fields::id_of(raw, fields::SALE_ID_KEYS).unwrap_or_default();
        let customer = extract_party(raw, &CUSTOMER_KEYS);
        let product = extract_party(raw, &PRODUCT_KEYS);
        let quantity = fields::i64_of(raw, fields::SALE_QUANTITY_KEYS);
        let unit_price = fields::f64_of(raw, fields::SALE_UNIT_PRICE_KEYS);
        let total = match fields::f64_of(raw, fields::SALE_TOTAL_KEYS) {
            Some(total) => total,
            None => match (quantity, unit_price) {
                (Some(quantity), Some(unit_price)) => quantity as f64 * unit_price,
                _ => 0.0,
            },
        };
        Self {
            id,
            customer,
            product,
            quantity,
            unit_price,
            total,
        }
    }

    /// Exact-match dialect of the sales view: the query must equal the
    /// customer foreign-key id. Sales that carry the customer in any
    /// other shape never match.
    pub fn matches_customer_id(&self, term: &str) -> bool {
        self.customer.key() == Some(term)
    }
}

/// Sales view filter. An empty or whitespace-only query passes every
/// sale through unchanged.
pub fn filter_by_customer_id(sales: &[Sale], query: &str) -> Vec<Sale> {
    let term = query.trim();
    if term.is_empty() {
        return sales.to_vec();
    }
    sales
        .iter()
        .filter(|sale| sale.matches_customer_id(term))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn embedded_customer_wins_over_foreign_key() {
        let sale = Sale::from_raw(&json!({
            "id": 1,
            "cliente": { "id": 1, "name": "Bruno" },
            "cliente_id": 7
        }));
        assert_eq!(sale.customer, PartyRef::Embedded("Bruno".to_string()));
    }

    #[test]
    fn embedded_record_without_name_uses_its_own_id() {
        let sale = Sale::from_raw(&json!({ "id": 1, "cliente": { "id": 3 } }));
        assert_eq!(sale.customer, PartyRef::Embedded("3".to_string()));
    }

    #[test]
    fn empty_embedded_record_falls_through_to_foreign_key() {
        let sale = Sale::from_raw(&json!({ "id": 1, "cliente": {}, "clienteId": 7 }));
        assert_eq!(sale.customer, PartyRef::Key("7".to_string()));
    }

    #[test]
    fn bare_party_key_may_hold_the_foreign_key_itself() {
        let sale = Sale::from_raw(&json!({ "id": 1, "cliente": 9, "produto": "p-2" }));
        assert_eq!(sale.customer, PartyRef::Key("9".to_string()));
        assert_eq!(sale.product, PartyRef::Key("p-2".to_string()));
    }

    #[test]
    fn denormalized_name_is_the_last_resort_before_unknown() {
        let sale = Sale::from_raw(&json!({ "id": 1, "cliente_nome": "Ana" }));
        assert_eq!(sale.customer, PartyRef::Inline("Ana".to_string()));

        let sale = Sale::from_raw(&json!({ "id": 2 }));
        assert_eq!(sale.customer, PartyRef::Unknown);
        assert_eq!(sale.product, PartyRef::Unknown);
    }

    #[test]
    fn total_prefers_the_explicit_key() {
        let sale = Sale::from_raw(&json!({
            "id": 1,
            "valorTotal": 99.9,
            "quantidade": 3,
            "preco_unitario": 10.0
        }));
        assert_eq!(sale.total, 99.9);
    }

    #[test]
    fn total_derives_from_quantity_and_unit_price() {
        let sale = Sale::from_raw(&json!({ "id": 1, "quantidade": 3, "preco_unitario": 10.0 }));
        assert_eq!(sale.total, 30.0);
    }

    #[test]
    fn total_defaults_to_zero() {
        assert_eq!(Sale::from_raw(&json!({ "id": 1 })).total, 0.0);
        assert_eq!(Sale::from_raw(&json!({ "id": 1, "quantidade": 3 })).total, 0.0);
    }

    #[test]
    fn customer_id_filter_is_exact_and_trimmed() {
        let sales = vec![
            Sale::from_raw(&json!({ "id": 1, "clienteId": 1 })),
            Sale::from_raw(&json!({ "id": 2, "cliente_id": 12 })),
        ];
        let hits = filter_by_customer_id(&sales, " 1 ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
        assert_eq!(filter_by_customer_id(&sales, "").len(), 2);
    }
}
