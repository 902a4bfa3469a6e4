use super::constants::win_prob;
use crate::models::GameEvent;

/// Nudge the win-probability readout for the latest event.
///
/// A coarse display heuristic, not a calibrated model: +5 for a score, +2 for
/// a chunk gain, -2 for any loss. The result always lands in [1, 99], so the
/// meter never reads the game as over.
pub fn calculate_win_probability(current: f64, event: &GameEvent) -> f64 {
    let adjustment = if event.is_score {
        win_prob::SCORE_SWING
    } else if event.yardage > win_prob::CHUNK_THRESHOLD {
        win_prob::CHUNK_SWING
    } else if event.yardage < 0 {
        win_prob::LOSS_SWING
    } else {
        0.0
    };

    (current + adjustment).clamp(win_prob::FLOOR, win_prob::CEILING)
}
