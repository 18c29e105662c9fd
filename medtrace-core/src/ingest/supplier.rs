use serde_json::Value;

use super::fields;
use crate::constants::UNKNOWN_SUPPLIER_NAME;
use crate::errors::RecordError;
use crate::models::{SupplierEntry, SupplierId};

const KIND: &str = "supplier";

/// Parse one supplier document into a directory entry.
///
/// `blacklisted` counts only when it is the literal `true`.
pub fn parse_supplier(value: &Value) -> Result<SupplierEntry, RecordError> {
    let obj = fields::as_object(value, KIND)?;
    let id = fields::record_id(obj, KIND)?;

    Ok(SupplierEntry {
        id: SupplierId::from(id),
        name: fields::opt_string(obj, &["name"])
            .unwrap_or_else(|| UNKNOWN_SUPPLIER_NAME.to_string()),
        blacklisted: obj.get("blacklisted").and_then(Value::as_bool) == Some(true),
    })
}
