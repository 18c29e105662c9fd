//! Recommendation bands and the priority score.
//!
//! Both are pure functions of the day count and the supply's quantity and
//! flags, parameterised by [`PriorityConfig`].

use medtrace_core::config::PriorityConfig;
use medtrace_core::models::Recommendation;

/// Map days-to-expiry onto a usage directive.
///
/// Bands are half-open. A supply with no usable expiry date gets
/// [`Recommendation::Normal`].
pub fn recommend(days: Option<i64>, flagged: bool, config: &PriorityConfig) -> Recommendation {
    let Some(days) = days else {
        return Recommendation::Normal;
    };
    if days < 0 {
        Recommendation::Expired
    } else if days < config.use_immediately_days {
        Recommendation::UseImmediately
    } else if days < config.use_soon_days {
        Recommendation::UseSoon
    } else if days >= config.hold_days && flagged {
        Recommendation::Hold
    } else {
        Recommendation::Normal
    }
}

/// Days inside the expiry horizon, weighted. Zero outside it or when undated.
fn expiry_term(days: Option<i64>, config: &PriorityConfig) -> u64 {
    days.map_or(0, |days| {
        let inside = config.expiry_horizon_days.saturating_sub(days).max(0);
        (inside as u64).saturating_mul(config.expiry_weight)
    })
}

/// `min(ceiling, expiry term + quantity / divisor + flags * flag weight)`.
pub fn priority_score(
    days: Option<i64>,
    quantity: u64,
    flag_count: usize,
    config: &PriorityConfig,
) -> u64 {
    let quantity_term = quantity.checked_div(config.quantity_divisor).unwrap_or(0);
    let flag_term = (flag_count as u64).saturating_mul(config.risk_flag_weight);
    expiry_term(days, config)
        .saturating_add(quantity_term)
        .saturating_add(flag_term)
        .min(config.score_ceiling)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(days: i64, flagged: bool) -> Recommendation {
        recommend(Some(days), flagged, &PriorityConfig::default())
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(rec(-1, false), Recommendation::Expired);
        assert_eq!(rec(0, false), Recommendation::UseImmediately);
        assert_eq!(rec(6, false), Recommendation::UseImmediately);
        assert_eq!(rec(7, false), Recommendation::UseSoon);
        assert_eq!(rec(29, false), Recommendation::UseSoon);
        assert_eq!(rec(30, false), Recommendation::Normal);
        assert_eq!(rec(59, true), Recommendation::Normal);
        assert_eq!(rec(60, false), Recommendation::Normal);
        assert_eq!(rec(60, true), Recommendation::Hold);
    }

    #[test]
    fn flags_do_not_override_urgent_bands() {
        assert_eq!(rec(-5, true), Recommendation::Expired);
        assert_eq!(rec(3, true), Recommendation::UseImmediately);
        assert_eq!(rec(10, true), Recommendation::UseSoon);
    }

    #[test]
    fn undated_is_normal_even_when_flagged() {
        let config = PriorityConfig::default();
        assert_eq!(recommend(None, true, &config), Recommendation::Normal);
        assert_eq!(recommend(None, false, &config), Recommendation::Normal);
    }

    #[test]
    fn score_terms() {
        let config = PriorityConfig::default();
        // (30 - 10) * 2 + 50 / 5 + 1 * 10
        assert_eq!(priority_score(Some(10), 50, 1, &config), 60);
        assert_eq!(priority_score(Some(45), 0, 0, &config), 0);
        assert_eq!(priority_score(None, 12, 0, &config), 2);
    }

    #[test]
    fn score_is_capped_at_ceiling() {
        let config = PriorityConfig::default();
        assert_eq!(priority_score(Some(-400), u64::MAX, usize::MAX, &config), 100);
        assert_eq!(priority_score(Some(i64::MIN), 0, 0, &config), 100);
    }

    #[test]
    fn zero_divisor_drops_quantity_term() {
        let config = PriorityConfig {
            quantity_divisor: 0,
            ..PriorityConfig::default()
        };
        assert_eq!(priority_score(None, 1_000, 0, &config), 0);
    }
}
