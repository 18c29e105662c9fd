use chrono::{Days, NaiveDate};
use medtrace_core::config::{PriorityConfig, TrustConfig};
use medtrace_core::models::{
    AlertRecord, ComplianceStatus, FakeStatus, Severity, SupplierDirectory, SupplyRecord,
    ZoneSeverity,
};
use medtrace_scoring::priority::priority_score;
use medtrace_scoring::trust::clamp_score;
use medtrace_scoring::{
    aggregate_zones, compute_trust_scores, detect_corruption, risk_map, SupplierTally,
    TrustScorer,
};
use proptest::prelude::*;

fn arb_status() -> impl Strategy<Value = ComplianceStatus> {
    prop_oneof![
        Just(ComplianceStatus::Accepted),
        Just(ComplianceStatus::Rejected),
        Just(ComplianceStatus::Warning),
        Just(ComplianceStatus::Pending),
    ]
}

fn arb_fake() -> impl Strategy<Value = Option<FakeStatus>> {
    prop_oneof![
        Just(None),
        Just(Some(FakeStatus::None)),
        Just(Some(FakeStatus::Suspicious)),
        Just(Some(FakeStatus::Fake)),
    ]
}

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Low),
        Just(Severity::Medium),
        Just(Severity::High),
        Just(Severity::Critical),
        Just(Severity::Unknown),
    ]
}

fn arb_supply() -> impl Strategy<Value = SupplyRecord> {
    (
        0u32..1000,
        prop::option::of(0u8..6),
        arb_status(),
        0usize..4,
        arb_fake(),
    )
        .prop_map(|(id, supplier, status, flags, fake)| {
            let mut supply = SupplyRecord::new(id.to_string(), status)
                .with_flags((0..flags).map(|i| format!("flag{i}")));
            if let Some(s) = supplier {
                supply = supply.with_supplier(format!("S{s}"));
            }
            supply.fake_status = fake;
            supply
        })
}

fn arb_alert() -> impl Strategy<Value = AlertRecord> {
    (0u32..1000, arb_severity(), 0u8..4, prop::option::of(0u8..3)).prop_map(
        |(id, severity, zone, medicine)| {
            let alert = AlertRecord::new(id.to_string(), severity).in_zone(format!("Z{zone}"));
            match medicine {
                Some(m) => alert.for_medicine(format!("M{m}")),
                None => alert,
            }
        },
    )
}

fn zone_severity(alerts: &[AlertRecord], zone: &str) -> Option<ZoneSeverity> {
    aggregate_zones(alerts)
        .zones
        .into_iter()
        .find(|z| z.zone == zone)
        .map(|z| z.severity)
}

proptest! {
    #[test]
    fn score_stays_in_range(penalty in any::<u64>()) {
        let score = clamp_score(penalty);
        prop_assert!(score <= 100);
    }

    #[test]
    fn perfect_score_iff_no_findings(
        rejected in 0usize..5,
        warnings in 0usize..5,
        flags in 0usize..5,
        fake in 0usize..5,
    ) {
        let tally = SupplierTally { total: 10, rejected, warnings, flags, fake };
        let score = tally.score(&TrustConfig::default());
        prop_assert_eq!(score == 100, tally.is_clean());
    }

    #[test]
    fn trust_is_idempotent(supplies in prop::collection::vec(arb_supply(), 0..40)) {
        let directory = SupplierDirectory::new();
        prop_assert_eq!(
            compute_trust_scores(&supplies, &directory),
            compute_trust_scores(&supplies, &directory)
        );
    }

    #[test]
    fn trust_ignores_input_order(supplies in prop::collection::vec(arb_supply(), 0..40)) {
        let directory = SupplierDirectory::new();
        let mut reversed = supplies.clone();
        reversed.reverse();
        prop_assert_eq!(
            TrustScorer::default().compute_all(&supplies, &directory),
            TrustScorer::default().compute_all(&reversed, &directory)
        );
    }

    #[test]
    fn zones_ignore_input_order(alerts in prop::collection::vec(arb_alert(), 0..40)) {
        let mut reversed = alerts.clone();
        reversed.reverse();
        prop_assert_eq!(aggregate_zones(&alerts), aggregate_zones(&reversed));
    }

    #[test]
    fn adding_critical_makes_zone_critical(
        alerts in prop::collection::vec(arb_alert(), 0..40),
        zone in 0u8..4,
    ) {
        let zone = format!("Z{zone}");
        let mut more = alerts.clone();
        more.push(AlertRecord::new("extra", Severity::Critical).in_zone(zone.as_str()));
        let before = zone_severity(&alerts, &zone);
        let after = zone_severity(&more, &zone);
        prop_assert_eq!(after, Some(ZoneSeverity::Critical));
        prop_assert!(before.map_or(true, |b| b <= ZoneSeverity::Critical));
    }

    #[test]
    fn summary_total_matches_input(alerts in prop::collection::vec(arb_alert(), 0..40)) {
        let report = aggregate_zones(&alerts);
        prop_assert_eq!(report.summary.total_alerts, alerts.len());
        let zoned: usize = report.zones.iter().map(|z| z.alert_count).sum();
        prop_assert!(zoned <= alerts.len());
    }

    #[test]
    fn priority_non_increasing_in_days(
        days in -400i64..400,
        quantity in 0u64..10_000,
        flags in 0usize..5,
    ) {
        let config = PriorityConfig::default();
        let sooner = priority_score(Some(days), quantity, flags, &config);
        let later = priority_score(Some(days + 1), quantity, flags, &config);
        prop_assert!(later <= sooner);
        prop_assert!(sooner <= config.score_ceiling);
    }

    #[test]
    fn priority_non_decreasing_in_quantity_and_flags(
        days in prop::option::of(-100i64..100),
        quantity in 0u64..10_000,
        flags in 0usize..5,
    ) {
        let config = PriorityConfig::default();
        let base = priority_score(days, quantity, flags, &config);
        prop_assert!(priority_score(days, quantity + 5, flags, &config) >= base);
        prop_assert!(priority_score(days, quantity, flags + 1, &config) >= base);
    }

    #[test]
    fn days_to_expiry_matches_date_offset(offset in 0u64..2000) {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let supply = SupplyRecord::new("1", ComplianceStatus::Accepted)
            .with_expiry(today.checked_add_days(Days::new(offset)).unwrap());
        prop_assert_eq!(supply.days_to_expiry(today), Some(offset as i64));
    }

    #[test]
    fn risk_map_ignores_supply_order(supplies in prop::collection::vec(arb_supply(), 0..40)) {
        let directory = SupplierDirectory::new();
        let mut reversed = supplies.clone();
        reversed.reverse();
        prop_assert_eq!(
            risk_map(&supplies, &directory, &[]),
            risk_map(&reversed, &directory, &[])
        );
    }

    #[test]
    fn risk_map_zone_counts_cover_every_supplier(
        supplies in prop::collection::vec(arb_supply(), 0..40),
    ) {
        let map = risk_map(&supplies, &SupplierDirectory::new(), &[]);
        prop_assert_eq!(map.high_risk + map.medium_risk + map.low_risk, map.total_suppliers);
        prop_assert!(map.suppliers.windows(2).all(|w| w[0].risk_score >= w[1].risk_score));
    }

    #[test]
    fn corruption_ignores_supply_order(supplies in prop::collection::vec(arb_supply(), 0..60)) {
        let directory = SupplierDirectory::new();
        let mut reversed = supplies.clone();
        reversed.reverse();
        prop_assert_eq!(
            detect_corruption(&supplies, &directory),
            detect_corruption(&reversed, &directory)
        );
    }
}
