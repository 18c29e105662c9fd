use chrono::NaiveDate;

use medtrace_core::config::PriorityConfig;
use medtrace_core::models::{PriorityEntry, SupplyRecord};
use medtrace_core::traits::IPriorityRanker;

use super::policy::{priority_score, recommend};

/// Ranks supplies by how urgently they should be used.
#[derive(Debug, Clone, Default)]
pub struct PriorityRanker {
    config: PriorityConfig,
}

impl PriorityRanker {
    pub fn new(config: &PriorityConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &PriorityConfig {
        &self.config
    }

    /// Priority view of a single supply.
    pub fn entry(&self, supply: &SupplyRecord, reference_date: NaiveDate) -> PriorityEntry {
        let days = supply.days_to_expiry(reference_date);
        PriorityEntry {
            supply_id: supply.id.clone(),
            days_to_expiry: days,
            priority_score: priority_score(
                days,
                supply.quantity,
                supply.flag_count(),
                &self.config,
            ),
            recommendation: recommend(days, supply.is_flagged(), &self.config),
            risk_flags: supply.risk_flags.clone(),
        }
    }

    /// One entry per supply, in input order.
    pub fn rank_priority(
        &self,
        supplies: &[SupplyRecord],
        reference_date: NaiveDate,
    ) -> Vec<PriorityEntry> {
        supplies
            .iter()
            .map(|supply| self.entry(supply, reference_date))
            .collect()
    }
}

impl IPriorityRanker for PriorityRanker {
    fn rank(&self, supplies: &[SupplyRecord], reference_date: NaiveDate) -> Vec<PriorityEntry> {
        self.rank_priority(supplies, reference_date)
    }
}

/// Priority entries with the default bands and weights.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use medtrace_core::models::{ComplianceStatus, Recommendation, SupplyRecord};
/// use medtrace_scoring::rank_priority;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
/// let supply = SupplyRecord::new("1", ComplianceStatus::Accepted)
///     .with_expiry(NaiveDate::from_ymd_opt(2024, 6, 7).unwrap());
/// let entries = rank_priority(&[supply], today);
/// assert_eq!(entries[0].days_to_expiry, Some(-3));
/// assert_eq!(entries[0].recommendation, Recommendation::Expired);
/// ```
pub fn rank_priority(supplies: &[SupplyRecord], reference_date: NaiveDate) -> Vec<PriorityEntry> {
    PriorityRanker::default().rank_priority(supplies, reference_date)
}

/// Copy of `entries`, highest score first (ties by supply id).
pub fn urgent_first(entries: &[PriorityEntry]) -> Vec<PriorityEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| {
        b.priority_score
            .cmp(&a.priority_score)
            .then_with(|| a.supply_id.cmp(&b.supply_id))
    });
    sorted
}
