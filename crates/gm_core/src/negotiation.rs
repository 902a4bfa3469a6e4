//! Contract Negotiation Engine.
//!
//! Pure functions turning an offer and a demand into an acceptance decision,
//! and an accepted offer into a stored contract plus cap accounting. The
//! shell owns all negotiation session state; nothing here retains references
//! across calls.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ContractError, Result};
use crate::models::{Contract, ContractDemand, ContractOffer, DealStatus, Money};

/// Score at or above which the agent signs on the spot.
const ACCEPT_THRESHOLD: f64 = 95.0;
/// Score at or above which the agent asks for a bonus bump.
const CLOSE_THRESHOLD: f64 = 85.0;
/// Score at or above which the complaint is APY, not the whole package.
const LOWBALL_THRESHOLD: f64 = 70.0;

/// Deal status plus the agent's feedback line for one negotiation round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferEvaluation {
    pub status: DealStatus,
    pub feedback: String,
}

fn ensure_money(field: &'static str, value: Money) -> Result<()> {
    if value < 0.0 {
        return Err(ContractError::NegativeMoney { field, value });
    }
    Ok(())
}

fn ensure_offer(offer: &ContractOffer) -> Result<()> {
    if offer.years == 0 {
        return Err(ContractError::ZeroLengthTerm);
    }
    ensure_money("salary", offer.salary)?;
    ensure_money("bonus", offer.bonus)
}

/// Round to cents. Persisted monetary fields never carry more precision.
pub(crate) fn round_to_cents(value: Money) -> Money {
    (value * 100.0).round() / 100.0
}

/// Total contract value: `salary * years + bonus`.
pub fn calculate_total_value(salary: Money, years: u8, bonus: Money) -> Money {
    salary * f64::from(years) + bonus
}

/// Average value per year: `(salary * years + bonus) / years`.
///
/// `years` is at least 1 for every well-formed offer, but the zero case is
/// rejected here explicitly rather than left to divide.
pub fn calculate_apy(salary: Money, years: u8, bonus: Money) -> Result<Money> {
    if years == 0 {
        return Err(ContractError::ZeroLengthTerm);
    }
    ensure_money("salary", salary)?;
    ensure_money("bonus", bonus)?;
    Ok(calculate_total_value(salary, years, bonus) / f64::from(years))
}

/// How interested the player is in an offer, 0-100.
///
/// Total-value parity drives the score; every year of term mismatch costs 10
/// points in either direction. Players want their commitment horizon, not
/// just their number.
pub fn interest_score(offer: &ContractOffer, demand: &ContractDemand) -> Result<f64> {
    ensure_offer(offer)?;
    if demand.years == 0 {
        return Err(ContractError::ZeroLengthTerm);
    }
    ensure_money("demand salary", demand.salary)?;
    ensure_money("demand bonus", demand.bonus)?;

    let demand_value = calculate_total_value(demand.salary, demand.years, demand.bonus);
    if demand_value <= 0.0 {
        return Err(ContractError::WorthlessDemand(demand_value));
    }
    let offer_value = calculate_total_value(offer.salary, offer.years, offer.bonus);

    let base_score = offer_value / demand_value * 100.0;
    let penalty = f64::from(offer.years.abs_diff(demand.years)) * 10.0;

    Ok((base_score - penalty).clamp(0.0, 100.0))
}

/// Turn an interest score into a deal status and agent feedback.
///
/// Only `Accepted` and `Open` come out of here; a lowball offer leaves the
/// negotiation open rather than ending it.
pub fn evaluate_offer(score: f64) -> OfferEvaluation {
    if score >= ACCEPT_THRESHOLD {
        debug!(score, "offer accepted");
        OfferEvaluation {
            status: DealStatus::Accepted,
            feedback: "The client is thrilled. We have a deal!".to_string(),
        }
    } else if score >= CLOSE_THRESHOLD {
        OfferEvaluation {
            status: DealStatus::Open,
            feedback: "We're close. Increase the guaranteed money (bonus) slightly and we'll sign."
                .to_string(),
        }
    } else if score >= LOWBALL_THRESHOLD {
        OfferEvaluation {
            status: DealStatus::Open,
            feedback:
                "This is below market value. The years look okay, but the APY needs to come up significantly."
                    .to_string(),
        }
    } else {
        OfferEvaluation {
            status: DealStatus::Open,
            feedback: "This offer is insulting. We are far apart.".to_string(),
        }
    }
}

/// Affordability check: the offer's APY must fit in available cap space.
pub fn validate_cap_space(offer: &ContractOffer, available_cap_space: Money) -> Result<bool> {
    let apy = calculate_apy(offer.salary, offer.years, offer.bonus)?;
    Ok(apy <= available_cap_space)
}

/// Build the contract an accepted offer turns into.
///
/// Salary and bonus are rounded to cents first and the total is recomputed
/// from the rounded figures, so the stored total can drift a cent from the
/// raw offer's total. The stored total must agree with the fields the shell
/// displays, not with the slider positions that produced them.
pub fn contract_from_offer(offer: &ContractOffer, start_year: u16) -> Result<Contract> {
    ensure_offer(offer)?;

    let salary = round_to_cents(offer.salary);
    let bonus = round_to_cents(offer.bonus);
    let total_value = round_to_cents(calculate_total_value(salary, offer.years, bonus));
    let cap_hit = calculate_apy(salary, offer.years, bonus)?;

    Ok(Contract {
        years: offer.years,
        salary,
        bonus,
        guaranteed: bonus,
        years_left: offer.years,
        total_value,
        cap_hit,
        dead_cap: 0.0,
        void_years: 0,
        start_year,
        total_length: offer.years,
    })
}

/// Cap hit for a given contract year.
///
/// Year-independent for now: the charge is the contract's APY. The prorated
/// dead-cap model in the `cap` module is a separate calculation path used by
/// roster-management flows, not this one.
pub fn cap_hit(contract: &Contract, _year: u8) -> Result<Money> {
    calculate_apy(contract.salary, contract.years, contract.bonus)
}
