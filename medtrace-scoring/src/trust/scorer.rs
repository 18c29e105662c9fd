//! TrustScorer: fold supplies into per-supplier trust.
//!
//! Score formula: `clamp(100 - (rejected×20 + warnings×8 + flags×2 + fake×25), 0, 100)`
//!
//! A flagged supply is penalised twice: once as a warning and once per
//! flag it carries. A supplier with one rejected supply and one accepted
//! supply carrying two flags:
//! - Penalty: 20 + 8 + 2×2 = 32
//! - Score: 68 → MODERATE

use std::collections::BTreeMap;

use medtrace_core::config::TrustConfig;
use medtrace_core::models::{SupplierDirectory, SupplierId, SupplierTrust, SupplyRecord, TrustLabel};
use medtrace_core::traits::ITrustScorer;

use super::tally::SupplierTally;
use crate::grouping::group_reduce;

/// Computes supplier trust scores.
#[derive(Debug, Clone, Default)]
pub struct TrustScorer {
    config: TrustConfig,
}

impl TrustScorer {
    /// Create a new TrustScorer with the given config.
    pub fn new(config: &TrustConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Get the config.
    pub fn config(&self) -> &TrustConfig {
        &self.config
    }

    /// Tally supplies per supplier. Supplies without a supplier id are ignored.
    pub fn tally(supplies: &[SupplyRecord]) -> BTreeMap<SupplierId, SupplierTally> {
        group_reduce(
            supplies,
            |supply| supply.supplier().cloned(),
            |tally: &mut SupplierTally, supply| tally.observe(supply),
        )
    }

    /// Turn one supplier's tally into its trust entry.
    pub fn assess(
        &self,
        supplier_id: SupplierId,
        tally: &SupplierTally,
        directory: &SupplierDirectory,
    ) -> SupplierTrust {
        let score = tally.score(&self.config);
        SupplierTrust {
            display_name: directory.display_name(&supplier_id).to_string(),
            supplier_id,
            score,
            label: TrustLabel::from_score(
                score,
                self.config.safe_threshold,
                self.config.moderate_threshold,
            ),
            total_supplies: tally.total,
        }
    }

    /// Trust for every supplier, in supplier-id order, without truncation.
    ///
    /// This is the building block for views other than the bottom-N ranking.
    pub fn compute_all(
        &self,
        supplies: &[SupplyRecord],
        directory: &SupplierDirectory,
    ) -> Vec<SupplierTrust> {
        Self::tally(supplies)
            .into_iter()
            .map(|(supplier_id, tally)| self.assess(supplier_id, &tally, directory))
            .collect()
    }

    /// The `bottom_n` lowest-scoring suppliers, worst first.
    ///
    /// Ties are broken by supplier id ascending so the ranking is stable
    /// across calls.
    pub fn compute_trust_scores(
        &self,
        supplies: &[SupplyRecord],
        directory: &SupplierDirectory,
    ) -> Vec<SupplierTrust> {
        self.rank_bottom(self.compute_all(supplies, directory))
    }

    /// Sort worst first and keep the configured `bottom_n`.
    pub fn rank_bottom(&self, mut entries: Vec<SupplierTrust>) -> Vec<SupplierTrust> {
        sort_worst_first(&mut entries);
        entries.truncate(self.config.bottom_n);
        entries
    }
}

/// Ascending score, then supplier id.
pub fn sort_worst_first(entries: &mut [SupplierTrust]) {
    entries.sort_by(|a, b| {
        a.score
            .cmp(&b.score)
            .then_with(|| a.supplier_id.cmp(&b.supplier_id))
    });
}

impl ITrustScorer for TrustScorer {
    fn score_all(
        &self,
        supplies: &[SupplyRecord],
        directory: &SupplierDirectory,
    ) -> Vec<SupplierTrust> {
        self.compute_all(supplies, directory)
    }

    fn bottom(&self, supplies: &[SupplyRecord], directory: &SupplierDirectory) -> Vec<SupplierTrust> {
        self.compute_trust_scores(supplies, directory)
    }
}

/// Bottom-5 trust ranking with the default weights.
///
/// # Examples
///
/// ```
/// use medtrace_core::models::{ComplianceStatus, SupplierDirectory, SupplyRecord, TrustLabel};
/// use medtrace_scoring::compute_trust_scores;
///
/// let supplies = vec![
///     SupplyRecord::new("1", ComplianceStatus::Rejected).with_supplier("S1"),
///     SupplyRecord::new("2", ComplianceStatus::Accepted)
///         .with_supplier("S1")
///         .with_flags(["a", "b"]),
/// ];
/// let trust = compute_trust_scores(&supplies, &SupplierDirectory::new());
/// assert_eq!(trust[0].score, 68);
/// assert_eq!(trust[0].label, TrustLabel::Moderate);
/// assert_eq!(trust[0].display_name, "Unknown");
/// ```
pub fn compute_trust_scores(
    supplies: &[SupplyRecord],
    directory: &SupplierDirectory,
) -> Vec<SupplierTrust> {
    TrustScorer::default().compute_trust_scores(supplies, directory)
}
