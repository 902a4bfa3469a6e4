//! Release and restructure cap accounting.
//!
//! The prorated signing-bonus model used by roster-management flows. This is
//! a parallel calculation path to the negotiation engine's flat APY cap hit:
//! here the bonus spreads over `total_length` seasons and accelerates when a
//! player is cut.

use serde::{Deserialize, Serialize};

use crate::error::{ContractError, Result};
use crate::models::{Contract, Money};

/// Veteran-minimum base salary a restructure must leave behind.
pub const VETERAN_MINIMUM: Money = 1.21;
/// League rule: signing-bonus proration can cover at most five seasons.
pub const MAX_PRORATION_YEARS: u8 = 5;
/// Hard cap on void years appended by a single restructure.
pub const MAX_VOID_YEARS: u8 = 4;

/// How a release is designated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReleaseDesignation {
    #[serde(rename = "STANDARD")]
    Standard,
    #[serde(rename = "POST_JUNE_1")]
    PostJune1,
}

/// Cap consequences of a cut, split across the two league years involved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeadCapBreakdown {
    /// Dead money charged to the current league year.
    pub current_year: Money,
    /// Dead money deferred to the following league year.
    pub next_year: Money,
    /// Cap space freed in the current league year.
    pub savings: Money,
}

/// A release decision packaged for the roster screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleasePlan {
    pub designation: ReleaseDesignation,
    pub immediate_dead_cap: Money,
    pub deferred_dead_cap: Money,
    pub net_savings: Money,
    pub note: String,
}

/// Restructure projection: base salary converted to signing bonus, spread
/// over the remaining term plus any appended void years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RestructurePlan {
    pub amount_converted: Money,
    pub yearly_proration: Money,
    pub current_year_savings: Money,
    /// Proration that lands on seasons the player will not play.
    pub future_dead_cap: Money,
    pub void_years: u8,
}

/// Dead-cap acceleration for cutting a player.
///
/// Standard cut: every remaining year of bonus proration lands on the current
/// league year. Post-June-1 designation (meaningful only with more than one
/// year left): the current year keeps its scheduled proration, the rest rolls
/// into next year, and the full base salary comes off the books now.
pub fn dead_cap(contract: &Contract, post_june_1: bool) -> Result<DeadCapBreakdown> {
    if contract.total_length == 0 {
        return Err(ContractError::ZeroProrationTerm);
    }
    let yearly_proration = contract.bonus / f64::from(contract.total_length);
    let remaining_proration = yearly_proration * f64::from(contract.years_left);

    if post_june_1 && contract.years_left > 1 {
        Ok(DeadCapBreakdown {
            current_year: yearly_proration,
            next_year: remaining_proration - yearly_proration,
            savings: contract.salary,
        })
    } else {
        Ok(DeadCapBreakdown {
            current_year: remaining_proration,
            next_year: 0.0,
            savings: contract.salary - remaining_proration,
        })
    }
}

/// Package a cut for the roster screen, with the league years named.
///
/// The designation is taken at face value here; the one-year-left guard on
/// deferral lives in [`dead_cap`].
pub fn plan_release(
    contract: &Contract,
    post_june_1: bool,
    league_year: u16,
) -> Result<ReleasePlan> {
    if contract.total_length == 0 {
        return Err(ContractError::ZeroProrationTerm);
    }
    let yearly_proration = contract.bonus / f64::from(contract.total_length);
    let remaining_proration = yearly_proration * f64::from(contract.years_left);

    if post_june_1 {
        Ok(ReleasePlan {
            designation: ReleaseDesignation::PostJune1,
            immediate_dead_cap: yearly_proration,
            deferred_dead_cap: remaining_proration - yearly_proration,
            net_savings: contract.salary,
            note: format!(
                "Savings applied to the {league_year} cap; balance moves to {}.",
                league_year + 1
            ),
        })
    } else {
        Ok(ReleasePlan {
            designation: ReleaseDesignation::Standard,
            immediate_dead_cap: remaining_proration,
            deferred_dead_cap: 0.0,
            net_savings: contract.salary - remaining_proration,
            note: format!("Entire dead cap hit taken in {league_year}."),
        })
    }
}

/// Most void years a restructure may append: the total proration term never
/// exceeds five league years.
pub fn max_void_years(contract: &Contract) -> u8 {
    MAX_VOID_YEARS.min(MAX_PRORATION_YEARS.saturating_sub(contract.years_left))
}

/// Project a maximum restructure: base salary down to the veteran minimum,
/// the difference converted to signing bonus over `years_left + void_years`.
pub fn plan_restructure(contract: &Contract, void_years: u8) -> Result<RestructurePlan> {
    let max = max_void_years(contract);
    if void_years > max {
        return Err(ContractError::TooManyVoidYears {
            requested: void_years,
            max,
        });
    }
    if contract.salary <= VETERAN_MINIMUM {
        return Err(ContractError::NothingToRestructure {
            salary: contract.salary,
            floor: VETERAN_MINIMUM,
        });
    }
    let proration_term = u16::from(contract.years_left) + u16::from(void_years);
    if proration_term == 0 {
        return Err(ContractError::ZeroProrationTerm);
    }

    let amount_converted = contract.salary - VETERAN_MINIMUM;
    let yearly_proration = amount_converted / f64::from(proration_term);

    Ok(RestructurePlan {
        amount_converted,
        yearly_proration,
        current_year_savings: amount_converted - yearly_proration,
        future_dead_cap: yearly_proration * f64::from(void_years),
        void_years,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract(salary: Money, bonus: Money, years_left: u8, total_length: u8) -> Contract {
        Contract {
            years: total_length,
            salary,
            bonus,
            guaranteed: bonus,
            years_left,
            total_value: salary * f64::from(total_length) + bonus,
            cap_hit: 0.0,
            dead_cap: 0.0,
            void_years: 0,
            start_year: 2024,
            total_length,
        }
    }

    #[test]
    fn standard_cut_accelerates_everything() {
        // $12M bonus over 4 years = $3M/yr; 3 years left = $9M remaining.
        let c = contract(10.0, 12.0, 3, 4);
        let split = dead_cap(&c, false).unwrap();
        assert_eq!(split.current_year, 9.0);
        assert_eq!(split.next_year, 0.0);
        assert_eq!(split.savings, 1.0);
    }

    #[test]
    fn post_june_1_defers_the_balance() {
        let c = contract(10.0, 12.0, 3, 4);
        let split = dead_cap(&c, true).unwrap();
        assert_eq!(split.current_year, 3.0);
        assert_eq!(split.next_year, 6.0);
        assert_eq!(split.savings, 10.0);
    }

    #[test]
    fn split_totals_always_equal_remaining_proration() {
        let c = contract(14.0, 20.0, 4, 5);
        let standard = dead_cap(&c, false).unwrap();
        let june = dead_cap(&c, true).unwrap();
        let remaining = 20.0 / 5.0 * 4.0;
        assert!((standard.current_year + standard.next_year - remaining).abs() < 1e-9);
        assert!((june.current_year + june.next_year - remaining).abs() < 1e-9);
    }

    #[test]
    fn post_june_1_with_one_year_left_falls_back_to_standard() {
        let c = contract(8.0, 10.0, 1, 5);
        let split = dead_cap(&c, true).unwrap();
        // Only one year of proration remains, so nothing defers.
        assert_eq!(split.current_year, 2.0);
        assert_eq!(split.next_year, 0.0);
        assert_eq!(split.savings, 6.0);
    }

    #[test]
    fn expired_proration_term_is_rejected() {
        let mut c = contract(8.0, 10.0, 1, 5);
        c.total_length = 0;
        assert_eq!(dead_cap(&c, false), Err(ContractError::ZeroProrationTerm));
    }

    #[test]
    fn release_plan_names_the_league_years() {
        let c = contract(10.0, 12.0, 3, 4);
        let plan = plan_release(&c, true, 2026).unwrap();
        assert_eq!(plan.designation, ReleaseDesignation::PostJune1);
        assert_eq!(plan.immediate_dead_cap, 3.0);
        assert_eq!(plan.deferred_dead_cap, 6.0);
        assert_eq!(plan.net_savings, 10.0);
        assert!(plan.note.contains("2026"));
        assert!(plan.note.contains("2027"));

        let standard = plan_release(&c, false, 2026).unwrap();
        assert_eq!(standard.designation, ReleaseDesignation::Standard);
        assert_eq!(standard.deferred_dead_cap, 0.0);
        assert!(standard.note.contains("2026"));
    }

    #[test]
    fn max_void_years_honors_five_year_rule() {
        assert_eq!(max_void_years(&contract(10.0, 5.0, 1, 4)), 4);
        assert_eq!(max_void_years(&contract(10.0, 5.0, 2, 4)), 3);
        assert_eq!(max_void_years(&contract(10.0, 5.0, 3, 4)), 2);
        assert_eq!(max_void_years(&contract(10.0, 5.0, 5, 5)), 0);
        // Saturates instead of wrapping past the rule.
        assert_eq!(max_void_years(&contract(10.0, 5.0, 7, 7)), 0);
    }

    #[test]
    fn restructure_math() {
        // $10M salary, floor 1.21 -> $8.79M converted over (2 + 2) years.
        let c = contract(10.0, 5.0, 2, 4);
        let plan = plan_restructure(&c, 2).unwrap();
        assert!((plan.amount_converted - 8.79).abs() < 1e-9);
        assert!((plan.yearly_proration - 2.1975).abs() < 1e-9);
        assert!((plan.current_year_savings - 6.5925).abs() < 1e-9);
        assert!((plan.future_dead_cap - 4.395).abs() < 1e-9);
        assert_eq!(plan.void_years, 2);
    }

    #[test]
    fn restructure_savings_plus_proration_is_amount() {
        let c = contract(24.5, 10.0, 3, 5);
        let plan = plan_restructure(&c, 1).unwrap();
        assert!(
            (plan.current_year_savings + plan.yearly_proration - plan.amount_converted).abs()
                < 1e-9
        );
    }

    #[test]
    fn restructure_without_void_years_has_no_future_bomb() {
        let c = contract(10.0, 5.0, 3, 4);
        let plan = plan_restructure(&c, 0).unwrap();
        assert_eq!(plan.future_dead_cap, 0.0);
    }

    #[test]
    fn restructure_rejects_excess_void_years() {
        let c = contract(10.0, 5.0, 3, 4);
        assert_eq!(
            plan_restructure(&c, 3),
            Err(ContractError::TooManyVoidYears {
                requested: 3,
                max: 2
            })
        );
    }

    #[test]
    fn restructure_rejects_minimum_salary() {
        let c = contract(1.21, 5.0, 3, 4);
        assert!(matches!(
            plan_restructure(&c, 0),
            Err(ContractError::NothingToRestructure { .. })
        ));
    }
}
