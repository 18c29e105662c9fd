//! Structured log events for the aggregation passes.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a completed trust pass.
pub fn trust_scores_computed(suppliers: usize, returned: usize, at_risk: usize) {
    tracing::info!(
        event = "trust_scores_computed",
        suppliers = suppliers,
        returned = returned,
        at_risk = at_risk,
        "trust scores computed"
    );
}

/// Log a completed zone rollup.
pub fn zones_aggregated(total_alerts: usize, zones: usize, critical_zones: usize) {
    tracing::info!(
        event = "zones_aggregated",
        total_alerts = total_alerts,
        zones = zones,
        critical_zones = critical_zones,
        "risk zones aggregated"
    );
}

/// Log a completed priority pass.
pub fn priority_ranked(supplies: usize, expired: usize, undated: usize) {
    tracing::info!(
        event = "priority_ranked",
        supplies = supplies,
        expired = expired,
        undated = undated,
        "usage priority ranked"
    );
}

/// Log a dashboard snapshot.
pub fn dashboard_built(total_supplies: usize, near_expiry: usize, suppliers: usize) {
    tracing::info!(
        event = "dashboard_built",
        total_supplies = total_supplies,
        near_expiry = near_expiry,
        suppliers = suppliers,
        "dashboard analytics built"
    );
}

/// Log a supplier risk map.
pub fn risk_map_built(suppliers: usize, red: usize, yellow: usize) {
    tracing::info!(
        event = "risk_map_built",
        suppliers = suppliers,
        red = red,
        yellow = yellow,
        "supplier risk map built"
    );
}

/// Log a corruption-pattern scan. Any flag raises the level to `warn`.
pub fn corruption_scanned(suppliers: usize, flags: usize, critical: usize) {
    if flags == 0 {
        tracing::info!(
            event = "corruption_scanned",
            suppliers = suppliers,
            flags = flags,
            critical = critical,
            "no corruption patterns found"
        );
    } else {
        tracing::warn!(
            event = "corruption_scanned",
            suppliers = suppliers,
            flags = flags,
            critical = critical,
            "corruption patterns found"
        );
    }
}

/// Log an ingestion pass that dropped records.
pub fn records_skipped(kind: &str, skipped: usize, accepted: usize) {
    tracing::warn!(
        event = "records_skipped",
        kind = %kind,
        skipped = skipped,
        accepted = accepted,
        "malformed records skipped"
    );
}
