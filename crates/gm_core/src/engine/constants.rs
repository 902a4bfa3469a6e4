//! Tuning constants for the play-by-play simulator.
//!
//! These are contract values, not sliders: the shell and the tests both
//! assert on them literally.

pub mod odds {
    /// Flat interception chance on any snap, regardless of the call.
    pub const TURNOVER_RATE: f64 = 0.05;

    /// Chance a failed dropback turns into a sack.
    pub const SACK_RATE: f64 = 0.2;

    /// Big-play probability is `reward / BIG_PLAY_DIVISOR`.
    pub const BIG_PLAY_DIVISOR: f64 = 20.0;
}

pub mod yardage {
    /// Minimum gain on a successful play.
    pub const BASE_GAIN_MIN: i16 = 2;

    /// Width of the base-gain draw (2..=10 yards total).
    pub const BASE_GAIN_SPREAD: i16 = 8;

    /// Minimum bonus yardage when the big play hits.
    pub const BIG_PLAY_MIN: i16 = 10;

    /// Width of the big-play bonus draw (10..=29 yards total).
    pub const BIG_PLAY_SPREAD: i16 = 20;

    /// Largest possible sack loss (1..=8 yards).
    pub const SACK_SPREAD: i16 = 8;
}

pub mod field {
    /// Yards from the own goal line to the opposing end zone.
    pub const GOAL_LINE: i16 = 100;

    /// Drive start after a score (touchback, no return modeled).
    pub const DRIVE_START: i16 = 25;

    /// Yards to gain for a fresh set of downs.
    pub const FIRST_DOWN_DISTANCE: i16 = 10;

    /// Downs in a series.
    pub const DOWNS_PER_SERIES: u8 = 4;
}

pub mod scoring {
    /// Touchdown plus automatic extra point.
    pub const TOUCHDOWN_POINTS: u16 = 7;
}

pub mod win_prob {
    /// Swing for a score.
    pub const SCORE_SWING: f64 = 5.0;

    /// Swing for a chunk gain.
    pub const CHUNK_SWING: f64 = 2.0;

    /// Swing for any loss of yardage.
    pub const LOSS_SWING: f64 = -2.0;

    /// Gain must exceed this to count as a chunk play.
    pub const CHUNK_THRESHOLD: i16 = 10;

    /// Display floor: the game is never shown as decided.
    pub const FLOOR: f64 = 1.0;

    /// Display ceiling.
    pub const CEILING: f64 = 99.0;
}
