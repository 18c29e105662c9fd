//! Corruption-pattern detection over approval decisions.
//!
//! Each supplier's supplies are tallied into approvals (ACCEPTED) and
//! rejections (REJECTED); batch numbers are counted across every supply.
//! Five patterns are checked against those tallies:
//!
//! - `BLACKLIST_ACCEPTED` (CRITICAL): a blacklisted supplier has approvals
//! - `FAVORITISM_DETECTED` (HIGH): approvals above a floor and above a
//!   multiple of the average over suppliers with approvals
//! - `REPEATED_BATCH_APPROVAL` (MEDIUM): one batch number seen too often
//! - `TARGETED_REJECTION` (MEDIUM): many rejections, or a high rejection rate
//! - `BIAS_APPROVAL_PATTERN` (MEDIUM): a long record with zero rejections
//!
//! Flags are reported by kind, then by supplier id or batch number.

use std::collections::BTreeMap;

use medtrace_core::config::CorruptionConfig;
use medtrace_core::models::{
    ComplianceStatus, CorruptionFlag, CorruptionKind, CorruptionReport, CorruptionSummary,
    SupplierDirectory, SupplierId, SupplyRecord,
};
use medtrace_core::traits::ICorruptionDetector;

use crate::grouping::group_reduce;

/// Approval decisions for one supplier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecisionTally {
    pub approvals: usize,
    pub rejections: usize,
}

impl DecisionTally {
    pub fn observe(&mut self, supply: &SupplyRecord) {
        match supply.compliance_status {
            ComplianceStatus::Accepted => self.approvals += 1,
            ComplianceStatus::Rejected => self.rejections += 1,
            ComplianceStatus::Warning | ComplianceStatus::Pending => {}
        }
    }

    pub fn decisions(&self) -> usize {
        self.approvals + self.rejections
    }

    /// Rejections as a percentage of decisions, rounded to one decimal.
    pub fn rejection_rate(&self) -> f64 {
        if self.decisions() == 0 {
            return 0.0;
        }
        let rate = self.rejections as f64 * 100.0 / self.decisions() as f64;
        (rate * 10.0).round() / 10.0
    }
}

/// Scans supplies for corruption patterns.
#[derive(Debug, Clone, Default)]
pub struct CorruptionDetector {
    config: CorruptionConfig,
}

impl CorruptionDetector {
    pub fn new(config: &CorruptionConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &CorruptionConfig {
        &self.config
    }

    /// Suppliers with at least one decision. Supplies without a supplier are ignored.
    pub fn tally(supplies: &[SupplyRecord]) -> BTreeMap<SupplierId, DecisionTally> {
        let mut tallies = group_reduce(
            supplies,
            |supply| supply.supplier().cloned(),
            |tally: &mut DecisionTally, supply| tally.observe(supply),
        );
        tallies.retain(|_, tally| tally.decisions() > 0);
        tallies
    }

    /// Occurrences of each non-blank batch number, whatever the status.
    pub fn batch_counts(supplies: &[SupplyRecord]) -> BTreeMap<String, usize> {
        group_reduce(
            supplies,
            |supply| supply.batch().map(str::to_string),
            |count: &mut usize, _| *count += 1,
        )
    }

    pub fn detect(&self, supplies: &[SupplyRecord], directory: &SupplierDirectory) -> CorruptionReport {
        let tallies = Self::tally(supplies);
        let batches = Self::batch_counts(supplies);

        let mut flags = Vec::new();
        flags.extend(blacklist_accepted(&tallies, directory));
        flags.extend(self.favoritism(&tallies, directory));
        flags.extend(self.repeated_batches(&batches));
        flags.extend(self.targeted_rejection(&tallies, directory));
        flags.extend(self.bias_approval(&tallies, directory));

        CorruptionReport {
            total_flags: flags.len(),
            flags,
            summary: CorruptionSummary {
                total_suppliers: tallies.len(),
                total_approvals: tallies.values().map(|t| t.approvals).sum(),
                total_rejections: tallies.values().map(|t| t.rejections).sum(),
            },
        }
    }

    fn favoritism(
        &self,
        tallies: &BTreeMap<SupplierId, DecisionTally>,
        directory: &SupplierDirectory,
    ) -> Vec<CorruptionFlag> {
        let approving = tallies.values().filter(|t| t.approvals > 0).count();
        if approving == 0 {
            return Vec::new();
        }
        let total: usize = tallies.values().map(|t| t.approvals).sum();
        let average = total / approving;
        tallies
            .iter()
            .filter(|(_, t)| {
                t.approvals > self.config.favoritism_min_approvals
                    && t.approvals * approving > self.config.favoritism_ratio * total
            })
            .map(|(id, t)| {
                supplier_flag(
                    CorruptionKind::FavoritismDetected,
                    id,
                    directory,
                    t.approvals,
                    format!("Supplier has {} approvals (avg: {average})", t.approvals),
                )
            })
            .collect()
    }

    fn repeated_batches(&self, batches: &BTreeMap<String, usize>) -> Vec<CorruptionFlag> {
        batches
            .iter()
            .filter(|(_, count)| **count > self.config.repeated_batch_threshold)
            .map(|(batch, count)| CorruptionFlag {
                kind: CorruptionKind::RepeatedBatchApproval,
                severity: CorruptionKind::RepeatedBatchApproval.severity(),
                supplier_id: None,
                supplier_name: None,
                batch_number: Some(batch.clone()),
                count: *count,
                rejection_rate: None,
                detail: format!("Batch {batch} approved {count} times"),
            })
            .collect()
    }

    fn targeted_rejection(
        &self,
        tallies: &BTreeMap<SupplierId, DecisionTally>,
        directory: &SupplierDirectory,
    ) -> Vec<CorruptionFlag> {
        let config = &self.config;
        tallies
            .iter()
            .filter(|(_, t)| {
                t.rejections > config.targeted_rejection_count
                    || (t.decisions() > config.targeted_min_decisions
                        && t.rejections * 100 > config.targeted_rejection_rate_pct * t.decisions())
            })
            .map(|(id, t)| {
                let rate = t.rejection_rate();
                let mut flag = supplier_flag(
                    CorruptionKind::TargetedRejection,
                    id,
                    directory,
                    t.rejections,
                    format!("Supplier has {} rejections ({rate:.1}% rate)", t.rejections),
                );
                flag.rejection_rate = Some(rate);
                flag
            })
            .collect()
    }

    fn bias_approval(
        &self,
        tallies: &BTreeMap<SupplierId, DecisionTally>,
        directory: &SupplierDirectory,
    ) -> Vec<CorruptionFlag> {
        tallies
            .iter()
            .filter(|(_, t)| t.rejections == 0 && t.decisions() > self.config.bias_min_decisions)
            .map(|(id, t)| {
                supplier_flag(
                    CorruptionKind::BiasApprovalPattern,
                    id,
                    directory,
                    t.approvals,
                    format!("100% approval rate over {} supplies", t.decisions()),
                )
            })
            .collect()
    }
}

impl ICorruptionDetector for CorruptionDetector {
    fn scan(&self, supplies: &[SupplyRecord], directory: &SupplierDirectory) -> CorruptionReport {
        self.detect(supplies, directory)
    }
}

/// One flag per blacklisted supplier with approvals, carrying the approval count.
fn blacklist_accepted(
    tallies: &BTreeMap<SupplierId, DecisionTally>,
    directory: &SupplierDirectory,
) -> Vec<CorruptionFlag> {
    tallies
        .iter()
        .filter(|(id, t)| t.approvals > 0 && directory.is_blacklisted(id))
        .map(|(id, t)| {
            supplier_flag(
                CorruptionKind::BlacklistAccepted,
                id,
                directory,
                t.approvals,
                format!(
                    "Blacklisted supplier's supplies are being accepted ({} accepted)",
                    t.approvals
                ),
            )
        })
        .collect()
}

fn supplier_flag(
    kind: CorruptionKind,
    id: &SupplierId,
    directory: &SupplierDirectory,
    count: usize,
    detail: String,
) -> CorruptionFlag {
    CorruptionFlag {
        kind,
        severity: kind.severity(),
        supplier_id: Some(id.clone()),
        supplier_name: Some(directory.display_name(id).to_string()),
        batch_number: None,
        count,
        rejection_rate: None,
        detail,
    }
}

/// Corruption scan with the default thresholds.
pub fn detect_corruption(supplies: &[SupplyRecord], directory: &SupplierDirectory) -> CorruptionReport {
    CorruptionDetector::default().detect(supplies, directory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use medtrace_core::models::{Severity, SupplierEntry};

    /// `approvals` ACCEPTED then `rejections` REJECTED supplies for `supplier`.
    fn decisions(supplier: &str, approvals: usize, rejections: usize) -> Vec<SupplyRecord> {
        let accepted = (0..approvals).map(|i| {
            SupplyRecord::new(format!("{supplier}-a{i}"), ComplianceStatus::Accepted)
                .with_supplier(supplier)
        });
        let rejected = (0..rejections).map(|i| {
            SupplyRecord::new(format!("{supplier}-r{i}"), ComplianceStatus::Rejected)
                .with_supplier(supplier)
        });
        accepted.chain(rejected).collect()
    }

    fn kinds(report: &CorruptionReport) -> Vec<(CorruptionKind, String)> {
        report
            .flags
            .iter()
            .map(|f| {
                let key = f
                    .supplier_id
                    .as_ref()
                    .map(|id| id.to_string())
                    .or_else(|| f.batch_number.clone())
                    .unwrap_or_default();
                (f.kind, key)
            })
            .collect()
    }

    #[test]
    fn empty_input_has_no_flags() {
        let report = detect_corruption(&[], &SupplierDirectory::new());
        assert_eq!(report, CorruptionReport::default());
    }

    #[test]
    fn tally_ignores_pending_warning_and_unowned() {
        let mut supplies = decisions("S1", 2, 1);
        supplies.push(SupplyRecord::new("w", ComplianceStatus::Warning).with_supplier("S1"));
        supplies.push(SupplyRecord::new("p", ComplianceStatus::Pending).with_supplier("S2"));
        supplies.push(SupplyRecord::new("x", ComplianceStatus::Rejected));
        let tallies = CorruptionDetector::tally(&supplies);
        assert_eq!(tallies.len(), 1);
        assert_eq!(
            tallies[&SupplierId::from("S1")],
            DecisionTally {
                approvals: 2,
                rejections: 1
            }
        );
    }

    #[test]
    fn blacklisted_supplier_with_approvals_is_critical() {
        let directory: SupplierDirectory = [
            SupplierEntry::new("S1", "Acme").blacklisted(),
            SupplierEntry::new("S2", "Bolt").blacklisted(),
        ]
        .into_iter()
        .collect();
        let mut supplies = decisions("S1", 3, 0);
        supplies.extend(decisions("S2", 0, 2));
        let report = detect_corruption(&supplies, &directory);
        assert_eq!(report.total_flags, 1);
        let flag = &report.flags[0];
        assert_eq!(flag.kind, CorruptionKind::BlacklistAccepted);
        assert_eq!(flag.severity, Severity::Critical);
        assert_eq!(flag.count, 3);
        assert_eq!(flag.supplier_name.as_deref(), Some("Acme"));
    }

    #[test]
    fn favoritism_needs_floor_and_multiple_of_average() {
        // Approvals 25, 1, 1: total 27 over 3 suppliers, average 9; 25 > 18.
        let mut supplies = decisions("BIG", 25, 3);
        supplies.extend(decisions("S1", 1, 0));
        supplies.extend(decisions("S2", 1, 0));
        let report = detect_corruption(&supplies, &SupplierDirectory::new());
        let favoritism: Vec<&CorruptionFlag> = report
            .flags
            .iter()
            .filter(|f| f.kind == CorruptionKind::FavoritismDetected)
            .collect();
        assert_eq!(favoritism.len(), 1);
        assert_eq!(favoritism[0].count, 25);
        assert_eq!(favoritism[0].detail, "Supplier has 25 approvals (avg: 9)");

        // A lone supplier can never exceed twice its own average.
        let report = detect_corruption(&decisions("BIG", 25, 3), &SupplierDirectory::new());
        assert!(report
            .flags
            .iter()
            .all(|f| f.kind != CorruptionKind::FavoritismDetected));
    }

    #[test]
    fn repeated_batch_counts_every_supply() {
        let mut supplies = Vec::new();
        for i in 0..6 {
            let status = if i % 2 == 0 {
                ComplianceStatus::Accepted
            } else {
                ComplianceStatus::Pending
            };
            supplies.push(SupplyRecord::new(format!("b7-{i}"), status).with_batch("B-7"));
        }
        for i in 0..5 {
            supplies.push(SupplyRecord::new(format!("b8-{i}"), ComplianceStatus::Accepted).with_batch("B-8"));
        }
        supplies.push(SupplyRecord::new("blank", ComplianceStatus::Accepted).with_batch("  "));
        let report = detect_corruption(&supplies, &SupplierDirectory::new());
        assert_eq!(
            kinds(&report),
            vec![(CorruptionKind::RepeatedBatchApproval, "B-7".to_string())]
        );
        assert_eq!(report.flags[0].count, 6);
        assert_eq!(report.flags[0].supplier_id, None);
    }

    #[test]
    fn targeted_rejection_by_count_or_rate() {
        // 16 rejections trips the count; 2 approvals + 9 rejections is 81.8%
        // over 11 decisions; 2 + 8 is only 10 decisions.
        let mut supplies = decisions("COUNT", 30, 16);
        supplies.extend(decisions("RATE", 2, 9));
        supplies.extend(decisions("SMALL", 2, 8));
        let report = detect_corruption(&supplies, &SupplierDirectory::new());
        let targeted: Vec<(&str, Option<f64>)> = report
            .flags
            .iter()
            .filter(|f| f.kind == CorruptionKind::TargetedRejection)
            .map(|f| (f.supplier_id.as_ref().map_or("", |id| id.as_str()), f.rejection_rate))
            .collect();
        assert_eq!(targeted, vec![("COUNT", Some(34.8)), ("RATE", Some(81.8))]);
    }

    #[test]
    fn exact_rate_threshold_is_not_targeted() {
        // 3 approvals + 12 rejections is exactly 80.0%.
        let report = detect_corruption(&decisions("S1", 3, 12), &SupplierDirectory::new());
        assert!(report
            .flags
            .iter()
            .all(|f| f.kind != CorruptionKind::TargetedRejection));
    }

    #[test]
    fn bias_needs_more_than_ten_decisions_and_no_rejections() {
        let mut supplies = decisions("ELEVEN", 11, 0);
        supplies.extend(decisions("TEN", 10, 0));
        supplies.extend(decisions("MIXED", 11, 1));
        let report = detect_corruption(&supplies, &SupplierDirectory::new());
        assert_eq!(
            kinds(&report),
            vec![(CorruptionKind::BiasApprovalPattern, "ELEVEN".to_string())]
        );
        assert_eq!(report.flags[0].detail, "100% approval rate over 11 supplies");
    }

    #[test]
    fn flags_are_ordered_by_kind_then_key_and_summarized() {
        let directory: SupplierDirectory = [SupplierEntry::new("Z", "Zed").blacklisted()]
            .into_iter()
            .collect();
        let mut supplies = decisions("Z", 12, 0);
        supplies.extend(decisions("A", 0, 16));
        let report = detect_corruption(&supplies, &directory);
        assert_eq!(
            kinds(&report),
            vec![
                (CorruptionKind::BlacklistAccepted, "Z".to_string()),
                (CorruptionKind::TargetedRejection, "A".to_string()),
                (CorruptionKind::BiasApprovalPattern, "Z".to_string()),
            ]
        );
        assert_eq!(
            report.summary,
            CorruptionSummary {
                total_suppliers: 2,
                total_approvals: 12,
                total_rejections: 16,
            }
        );
    }
}
