use super::constants::{field, scoring};
use crate::models::{GameEvent, GameState};

/// Fold a resolved play into the down-and-distance state.
///
/// A score credits the home side (+7, automatic extra point) and resets the
/// drive to the 25. Otherwise the ball, down and distance advance; gaining
/// the line to gain resets to 1st and 10, and so does failing on 4th down.
/// Possession never flips here; that bookkeeping belongs to the caller, as
/// does the clock. Quarter, time, the untouched score and possession pass
/// through unchanged.
pub fn update_game_state(current: &GameState, event: &GameEvent) -> GameState {
    if event.is_score {
        return GameState {
            home_score: current.home_score + scoring::TOUCHDOWN_POINTS,
            ball_on: field::DRIVE_START,
            down: 1,
            distance: field::FIRST_DOWN_DISTANCE,
            ..current.clone()
        };
    }

    let mut next = current.clone();
    next.ball_on += event.yardage;
    next.down += 1;
    next.distance -= event.yardage;

    // First down conversion.
    if next.distance <= 0 {
        next.down = 1;
        next.distance = field::FIRST_DOWN_DISTANCE;
    }

    // Turnover on downs.
    if next.down > field::DOWNS_PER_SERIES {
        next.down = 1;
        next.distance = field::FIRST_DOWN_DISTANCE;
    }

    next
}
