use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::contract::{Contract, ContractDemand};

/// Roster slot positions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    OL,
    DL,
    LB,
    CB,
    S,
    K,
}

/// Growth ceiling tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum DevelopmentTrait {
    #[default]
    Normal,
    Star,
    Superstar,
    #[serde(rename = "X-Factor")]
    XFactor,
}

/// Season-to-date counting stats. Which fields apply depends on position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlayerStats {
    #[serde(default)]
    pub games_played: u16,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub yards: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub touchdowns: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub completions: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub attempts: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub interceptions: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub receptions: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tackles: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sacks: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub forced_fumbles: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rating: Option<f32>,
}

/// A rostered (or free-agent) player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub position: Position,
    pub age: u8,
    pub overall: u8,
    /// Overall adjusted for scheme fit.
    #[serde(default)]
    pub scheme_ovr: u8,
    /// 0-100.
    pub morale: u8,
    /// 0-100, 100 is fully fresh.
    pub fatigue: u8,
    pub archetype: String,
    /// Scheme the player fits, e.g. "Zone", "Man".
    #[serde(default)]
    pub scheme: String,
    #[serde(default)]
    pub development_trait: DevelopmentTrait,
    #[serde(default)]
    pub stats: PlayerStats,
    pub contract: Contract,
    /// Present only while a team is eligible to negotiate with this player.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub contract_demand: Option<ContractDemand>,
    /// Owning team, or "FA" while unsigned.
    #[serde(default)]
    pub team_id: String,
}

impl Player {
    /// A player is on the open market while unsigned.
    pub fn is_free_agent(&self) -> bool {
        self.team_id == "FA"
    }

    /// Negotiation is possible only while a demand is attached.
    pub fn is_negotiable(&self) -> bool {
        self.contract_demand.is_some()
    }
}
