use serde::{Deserialize, Serialize};

/// Monetary amount in millions of currency units.
///
/// Every monetary field in the crate uses this unit. Display rounding is the
/// shell's concern; persisted contract fields are rounded to cents at signing.
pub type Money = f64;

/// A proposed contract. Exists only for the duration of a negotiation session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContractOffer {
    pub years: u8,
    /// Per-year base salary.
    pub salary: Money,
    /// Total signing bonus.
    pub bonus: Money,
}

/// What the player's agent is asking for while the player is open to
/// negotiation. Removed from the player once a contract is signed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractDemand {
    pub years: u8,
    /// Per-year base salary.
    pub salary: Money,
    /// Total signing bonus.
    pub bonus: Money,
    /// What the player cares about most in this negotiation.
    #[serde(default)]
    pub interest: Interest,
    /// Agent-quoted market value per year.
    #[serde(default)]
    pub market_value: Money,
}

/// Primary motivation driving a player's free-agency decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Interest {
    #[default]
    Security,
    Money,
    Championship,
    Loyalty,
}

/// A signed contract, owned exclusively by one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub years: u8,
    /// Per-year base salary.
    pub salary: Money,
    /// Total signing bonus.
    pub bonus: Money,
    /// Total guaranteed money.
    #[serde(default)]
    pub guaranteed: Money,
    /// Seasons remaining. 0 means expired/extendable.
    pub years_left: u8,
    /// `salary * years + bonus`, fixed at signing from the rounded fields.
    pub total_value: Money,
    #[serde(default)]
    pub cap_hit: Money,
    #[serde(default)]
    pub dead_cap: Money,
    /// Void years appended by restructures (0-4).
    #[serde(default)]
    pub void_years: u8,
    #[serde(default)]
    pub start_year: u16,
    /// Original length plus void years; the bonus-proration denominator.
    pub total_length: u8,
}

/// Outcome bucket for one negotiation round.
///
/// `Rejected` is carried for shell parity but the evaluator never produces
/// it: a lowball offer keeps the negotiation open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DealStatus {
    Open,
    Accepted,
    Rejected,
}
