use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::fields;
use super::reference::UNKNOWN;

/// Canonical customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
}

impl Customer {
    /// Normalizes a raw backend record. Never fails: a record with no
    /// recognizable name falls back to its stringified id, and a record
    /// with neither gets an empty id and the unknown sentinel.
    pub fn from_raw(raw: &Value) -> Self {
        let id = fields::id_of(raw, fields::CUSTOMER_ID_KEYS).unwrap_or_default();
        let name = fields::string_of(raw, fields::CUSTOMER_NAME_KEYS).unwrap_or_else(|| {
            if id.is_empty() {
                UNKNOWN.to_string()
            } else {
                id.clone()
            }
        });
        Self { id, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_every_id_and_name_synonym() {
        let records = [
            json!({ "id": 1, "nome": "Ana" }),
            json!({ "cliente_id": 2, "name": "Bruno" }),
            json!({ "clienteId": 3, "fullName": "Carla Souza" }),
            json!({ "_id": "x4", "nome_cliente": "Davi" }),
        ];
        let expected = [
            ("1", "Ana"),
            ("2", "Bruno"),
            ("3", "Carla Souza"),
            ("x4", "Davi"),
        ];
        for (raw, (id, name)) in records.iter().zip(expected) {
            let customer = Customer::from_raw(raw);
            assert_eq!(customer.id, id);
            assert_eq!(customer.name, name);
        }
    }

    #[test]
    fn name_falls_back_to_stringified_id() {
        let customer = Customer::from_raw(&json!({ "id": 42 }));
        assert_eq!(customer.id, "42");
        assert_eq!(customer.name, "42");
    }

    #[test]
    fn empty_record_degrades_to_defaults() {
        let customer = Customer::from_raw(&json!({}));
        assert_eq!(customer.id, "");
        assert_eq!(customer.name, UNKNOWN);
    }
}
