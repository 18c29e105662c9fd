use serde_json::Value;

use super::fields;
use crate::errors::RecordError;
use crate::models::{ComplianceStatus, FakeStatus, SupplierId, SupplyRecord};

const KIND: &str = "supply";

/// Parse one supply document.
///
/// `id` and a recognized `compliance_status` are required. Every other
/// field degrades to its neutral value when absent or unreadable, except a
/// negative `quantity`, which marks the record as malformed.
pub fn parse_supply(value: &Value) -> Result<SupplyRecord, RecordError> {
    let obj = fields::as_object(value, KIND)?;
    let id = fields::record_id(obj, KIND)?;

    let compliance_status = match fields::first(obj, &["compliance_status"]) {
        None => {
            return Err(RecordError::MissingField {
                kind: KIND,
                field: "compliance_status",
            })
        }
        Some(raw) => raw
            .as_str()
            .and_then(ComplianceStatus::parse)
            .ok_or_else(|| RecordError::InvalidValue {
                kind: KIND,
                field: "compliance_status",
                value: raw.to_string(),
            })?,
    };

    Ok(SupplyRecord {
        id,
        supplier_id: fields::first(obj, &["supplier_id"])
            .and_then(fields::id_like)
            .map(SupplierId::from),
        compliance_status,
        risk_flags: fields::string_list(obj.get("risk_flags")),
        fake_status: obj
            .get("fake_status")
            .and_then(Value::as_str)
            .and_then(FakeStatus::parse),
        expiry_date: obj.get("expiry_date").and_then(fields::date),
        quantity: quantity(obj.get("quantity"))?,
        temperature: obj.get("temperature").and_then(number),
        medicine_id: fields::first(obj, &["medicine_id"]).and_then(fields::id_like),
        batch_number: fields::opt_string(obj, &["batch_number"]),
    })
}

fn number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

fn quantity(value: Option<&Value>) -> Result<u64, RecordError> {
    let Some(n) = value.and_then(number) else {
        return Ok(0);
    };
    if n < 0.0 {
        return Err(RecordError::InvalidValue {
            kind: KIND,
            field: "quantity",
            value: n.to_string(),
        });
    }
    Ok(n.trunc() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn full_document_parses() {
        let record = parse_supply(&json!({
            "_id": {"$oid": "65f0aa"},
            "supplier_id": "S1",
            "medicine_id": "M9",
            "batch_number": "B-001",
            "compliance_status": "WARNING",
            "risk_flags": ["TEMPERATURE_EXCURSION"],
            "fake_status": "SUSPICIOUS",
            "expiry_date": "2025-06-01T00:00:00",
            "quantity": 250,
            "temperature": 9.5
        }))
        .unwrap();

        assert_eq!(record.id, "65f0aa");
        assert_eq!(record.supplier_id, Some(SupplierId::from("S1")));
        assert_eq!(record.compliance_status, ComplianceStatus::Warning);
        assert_eq!(record.risk_flags, vec!["TEMPERATURE_EXCURSION".to_string()]);
        assert_eq!(record.fake_status, Some(FakeStatus::Suspicious));
        assert_eq!(record.expiry_date, NaiveDate::from_ymd_opt(2025, 6, 1));
        assert_eq!(record.quantity, 250);
        assert_eq!(record.temperature, Some(9.5));
        assert_eq!(record.batch_number.as_deref(), Some("B-001"));
    }

    #[test]
    fn non_string_flags_each_count() {
        let record = parse_supply(&json!({
            "id": "x",
            "compliance_status": "APPROVED",
            "risk_flags": ["A", {"code": "B"}]
        }))
        .unwrap();
        assert_eq!(record.compliance_status, ComplianceStatus::Accepted);
        assert_eq!(record.flag_count(), 2);
    }

    #[test]
    fn optional_fields_default_to_neutral() {
        let record = parse_supply(&json!({"id": "x", "compliance_status": "accepted"})).unwrap();
        assert!(record.supplier_id.is_none());
        assert!(record.risk_flags.is_empty());
        assert!(record.fake_status.is_none());
        assert!(record.expiry_date.is_none());
        assert_eq!(record.quantity, 0);
        assert!(record.temperature.is_none());
    }

    #[test]
    fn unreadable_optional_fields_do_not_reject_the_record() {
        let record = parse_supply(&json!({
            "id": "x",
            "compliance_status": "PENDING",
            "risk_flags": "TEMP",
            "fake_status": "MAYBE",
            "expiry_date": "soon",
            "quantity": "lots",
            "temperature": null
        }))
        .unwrap();
        assert!(record.risk_flags.is_empty());
        assert!(record.fake_status.is_none());
        assert!(record.expiry_date.is_none());
        assert_eq!(record.quantity, 0);
    }

    #[test]
    fn missing_status_is_malformed() {
        let err = parse_supply(&json!({"id": "x"})).unwrap_err();
        assert_eq!(
            err,
            RecordError::MissingField {
                kind: "supply",
                field: "compliance_status"
            }
        );
    }

    #[test]
    fn unknown_status_is_malformed() {
        let err = parse_supply(&json!({"id": "x", "compliance_status": "LOST"})).unwrap_err();
        assert!(matches!(
            err,
            RecordError::InvalidValue {
                field: "compliance_status",
                ..
            }
        ));
    }

    #[test]
    fn negative_quantity_is_malformed() {
        let err =
            parse_supply(&json!({"id": "x", "compliance_status": "ACCEPTED", "quantity": -4}))
                .unwrap_err();
        assert!(matches!(err, RecordError::InvalidValue { field: "quantity", .. }));
    }

    #[test]
    fn non_object_is_rejected() {
        assert_eq!(
            parse_supply(&json!([1, 2])).unwrap_err(),
            RecordError::NotAnObject { kind: "supply" }
        );
    }
}
