use serde_json::Value;

use super::fields;
use crate::constants::UNKNOWN_ZONE_LABEL;
use crate::errors::RecordError;
use crate::models::{AlertRecord, Severity};

const KIND: &str = "alert";

/// Parse one alert document.
///
/// Only `id` is required. The zone is read from `region`, then `area`,
/// then `zone`; a missing or unrecognized severity becomes
/// [`Severity::Unknown`]. `supply_id` links the alert to a supply.
pub fn parse_alert(value: &Value) -> Result<AlertRecord, RecordError> {
    let obj = fields::as_object(value, KIND)?;
    let id = fields::record_id(obj, KIND)?;

    Ok(AlertRecord {
        id,
        severity: obj
            .get("severity")
            .and_then(Value::as_str)
            .map(Severity::parse)
            .unwrap_or(Severity::Unknown),
        zone: fields::opt_string(obj, &["region", "area", "zone"])
            .unwrap_or_else(|| UNKNOWN_ZONE_LABEL.to_string()),
        medicine_name: fields::opt_string(obj, &["medicine_name"]),
        supply_id: obj.get("supply_id").and_then(fields::id_like),
        created_at: obj.get("created_at").and_then(fields::timestamp),
    })
}
