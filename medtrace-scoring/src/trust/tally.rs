use medtrace_core::config::TrustConfig;
use medtrace_core::constants::{MAX_TRUST_SCORE, MIN_TRUST_SCORE};
use medtrace_core::models::{ComplianceStatus, SupplyRecord};

/// Per-supplier counters accumulated over its supplies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SupplierTally {
    pub total: usize,
    pub rejected: usize,
    /// Supplies with at least one risk flag.
    pub warnings: usize,
    /// Sum of risk flags across all supplies.
    pub flags: usize,
    /// Supplies marked SUSPICIOUS or FAKE.
    pub fake: usize,
}

impl SupplierTally {
    /// Fold one supply into the tally.
    pub fn observe(&mut self, supply: &SupplyRecord) {
        self.total += 1;
        if supply.compliance_status == ComplianceStatus::Rejected {
            self.rejected += 1;
        }
        if supply.is_flagged() {
            self.warnings += 1;
        }
        self.flags += supply.flag_count();
        if supply.is_counterfeit_signal() {
            self.fake += 1;
        }
    }

    /// `rejected*w_r + warnings*w_w + flags*w_f + fake*w_k`, saturating.
    pub fn penalty(&self, config: &TrustConfig) -> u64 {
        let weighted = |count: usize, weight: u32| (count as u64).saturating_mul(u64::from(weight));
        weighted(self.rejected, config.rejected_penalty)
            .saturating_add(weighted(self.warnings, config.warning_penalty))
            .saturating_add(weighted(self.flags, config.flag_penalty))
            .saturating_add(weighted(self.fake, config.fake_penalty))
    }

    /// `clamp(100 - penalty, 0, 100)`.
    pub fn score(&self, config: &TrustConfig) -> u32 {
        clamp_score(self.penalty(config))
    }

    /// No finding of any kind.
    pub fn is_clean(&self) -> bool {
        self.rejected == 0 && self.warnings == 0 && self.flags == 0 && self.fake == 0
    }
}

/// Subtract a penalty from the maximum score without leaving `[0, 100]`.
pub fn clamp_score(penalty: u64) -> u32 {
    let remaining = u64::from(MAX_TRUST_SCORE).saturating_sub(penalty);
    // `remaining` is at most MAX_TRUST_SCORE, so the narrowing is lossless.
    (remaining as u32).clamp(MIN_TRUST_SCORE, MAX_TRUST_SCORE)
}
