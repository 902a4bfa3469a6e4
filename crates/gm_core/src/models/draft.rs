use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::player::Position;

/// Combine measurables attached to a prospect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombineStats {
    /// 40-yard dash, seconds.
    pub forty_yard: f32,
    /// Bench-press reps.
    pub bench: u8,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub vertical: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub broad_jump: Option<f32>,
}

/// An incoming-class prospect. Read-only scouting reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftProspect {
    pub id: Uuid,
    pub name: String,
    pub position: Position,
    pub school: String,
    pub projected_round: u8,
    /// 0-100 scouting grade.
    pub scouting_grade: u8,
    /// True overall, hidden until drafted.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub overall: Option<u8>,
    pub combine_stats: CombineStats,
    #[serde(default)]
    pub traits: Vec<String>,
}

/// A tradeable draft selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftPick {
    pub round: u8,
    pub pick_number: u16,
    pub original_team_id: String,
    pub current_team_id: String,
    pub year: u16,
    /// Trade-chart value of the slot.
    pub value: f32,
}
