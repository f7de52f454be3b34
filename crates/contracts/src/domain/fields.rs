//! Synonym-key tolerance for raw backend records.
//!
//! The backend does not guarantee stable field names: the same logical
//! attribute may arrive in camelCase, snake_case or under an alternate
//! spelling depending on which endpoint produced the record. Each
//! logical field therefore has an ordered table of accepted keys, and a
//! single generic extractor picks the first defined, non-null value.
//! The tables are data, not code, so the fallback order stays auditable.

use serde_json::Value;

pub const CUSTOMER_ID_KEYS: &[&str] = &["id", "cliente_id", "clienteId", "_id"];
pub const CUSTOMER_NAME_KEYS: &[&str] = &["nome", "name", "fullName", "nome_cliente"];

pub const PRODUCT_ID_KEYS: &[&str] = &["id", "produto_id", "produtoId", "_id"];
pub const PRODUCT_NAME_KEYS: &[&str] = &["nome", "name"];
pub const PRODUCT_PRICE_KEYS: &[&str] = &["preco", "price", "preco_unitario"];
pub const PRODUCT_STOCK_KEYS: &[&str] = &["estoque", "stock", "quantidade_estoque"];

pub const SALE_ID_KEYS: &[&str] = &["id", "_id"];
pub const SALE_QUANTITY_KEYS: &[&str] = &["quantidade", "quantity"];
pub const SALE_UNIT_PRICE_KEYS: &[&str] = &["preco_unitario", "precoUnitario", "unit_price"];
pub const SALE_TOTAL_KEYS: &[&str] = &["valorTotal", "valor_total", "total"];

// Sale-side party references. The bare "cliente"/"produto" key may hold
// either an embedded record (an object) or a plain foreign-key id, so it
// appears both as the embedded-object key and at the end of the fk table.
pub const SALE_CUSTOMER_OBJECT_KEY: &str = "cliente";
pub const SALE_CUSTOMER_FK_KEYS: &[&str] = &["clienteId", "cliente_id", "cliente"];
pub const SALE_CUSTOMER_NAME_KEYS: &[&str] = &["cliente_nome", "nome_cliente", "clienteNome"];

pub const SALE_PRODUCT_OBJECT_KEY: &str = "produto";
pub const SALE_PRODUCT_FK_KEYS: &[&str] = &["produtoId", "produto_id", "produto"];
pub const SALE_PRODUCT_NAME_KEYS: &[&str] = &["produto_nome", "produtoNome"];

/// First defined, non-null value among `keys`, in table order.
pub fn first_defined<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let map = record.as_object()?;
    keys.iter()
        .filter_map(|key| map.get(*key))
        .find(|value| !value.is_null())
}

/// Canonical textual form of an id value.
///
/// Ids arrive as JSON strings or numbers; both canonicalize to their
/// textual form so index lookups and exact-equality filters behave the
/// same regardless of the wire type.
pub fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub fn id_of(record: &Value, keys: &[&str]) -> Option<String> {
    first_defined(record, keys).and_then(id_text)
}

pub fn string_of(record: &Value, keys: &[&str]) -> Option<String> {
    first_defined(record, keys).and_then(|value| value.as_str().map(str::to_string))
}

pub fn f64_of(record: &Value, keys: &[&str]) -> Option<f64> {
    first_defined(record, keys).and_then(Value::as_f64)
}

pub fn i64_of(record: &Value, keys: &[&str]) -> Option<i64> {
    first_defined(record, keys).and_then(Value::as_i64)
}

/// A payload that is not a JSON array degrades to an empty list instead
/// of failing the view.
pub fn coerce_array(payload: Value) -> Vec<Value> {
    match payload {
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_defined_respects_table_order() {
        let record = json!({ "cliente_id": 5, "id": 1 });
        let value = first_defined(&record, CUSTOMER_ID_KEYS).unwrap();
        assert_eq!(value, &json!(1));
    }

    #[test]
    fn first_defined_skips_null_values() {
        let record = json!({ "id": null, "cliente_id": 5 });
        let value = first_defined(&record, CUSTOMER_ID_KEYS).unwrap();
        assert_eq!(value, &json!(5));
    }

    #[test]
    fn first_defined_handles_non_object_records() {
        assert!(first_defined(&json!("not a record"), CUSTOMER_ID_KEYS).is_none());
        assert!(first_defined(&json!(null), CUSTOMER_ID_KEYS).is_none());
    }

    #[test]
    fn id_text_canonicalizes_numbers_and_strings() {
        assert_eq!(id_text(&json!(7)), Some("7".to_string()));
        assert_eq!(id_text(&json!("abc-1")), Some("abc-1".to_string()));
        assert_eq!(id_text(&json!({ "id": 1 })), None);
    }

    #[test]
    fn coerce_array_degrades_non_arrays_to_empty() {
        assert_eq!(coerce_array(json!([1, 2])), vec![json!(1), json!(2)]);
        assert!(coerce_array(json!({ "error": "oops" })).is_empty());
        assert!(coerce_array(json!(null)).is_empty());
    }
}
