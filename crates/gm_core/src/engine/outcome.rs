use rand::Rng;
use tracing::trace;

use super::constants::{field, odds, yardage};
use crate::models::{EventType, GameEvent, Play, PlayType};

/// Resolve a called play at the given field position.
///
/// Draws come off the generator in a fixed order, so a seeded generator
/// replays the same drive identically:
///
/// 1. main roll — below [`odds::TURNOVER_RATE`] is an interception; below
///    `play.success_rate` is a success
/// 2. on success — big-play check at `reward / 20`, then the base-gain draw
///    (2-10), then the bonus draw (10-29) when the big play hits
/// 3. on failure — sack check for passes only (loss of 1-8 on a hit);
///    a failed run is a stuff for no gain and consumes no further draws
///
/// The touchdown clamp runs after all yardage math, including the big-play
/// bonus: the event never reports the ball past the goal line.
pub fn calculate_outcome<R: Rng + ?Sized>(play: &Play, ball_on: i16, rng: &mut R) -> GameEvent {
    let roll: f64 = rng.gen();

    let mut event_type = EventType::from(play.play_type);
    let mut yards: i16 = 0;
    let mut is_score = false;
    let mut description;

    if roll < odds::TURNOVER_RATE {
        event_type = EventType::Turnover;
        description = format!(
            "INTERCEPTED! The defender jumps the route on the {}.",
            play.name
        );
    } else if roll < play.success_rate {
        let big_play = rng.gen::<f64>() < f64::from(play.reward) / odds::BIG_PLAY_DIVISOR;
        let base_gain =
            (rng.gen::<f64>() * f64::from(yardage::BASE_GAIN_SPREAD)) as i16 + yardage::BASE_GAIN_MIN;
        yards = if big_play {
            base_gain
                + (rng.gen::<f64>() * f64::from(yardage::BIG_PLAY_SPREAD)) as i16
                + yardage::BIG_PLAY_MIN
        } else {
            base_gain
        };
        let verb = match play.play_type {
            PlayType::Pass => "Complete",
            PlayType::Run => "Run",
        };
        description = format!("{verb} for {yards} yards using {}.", play.name);
    } else {
        let sacked = play.play_type == PlayType::Pass && rng.gen::<f64>() < odds::SACK_RATE;
        description = if sacked {
            yards = -((rng.gen::<f64>() * f64::from(yardage::SACK_SPREAD)) as i16) - 1;
            format!("SACKED! Loss of {} on the play.", -yards)
        } else if play.play_type == PlayType::Pass {
            "Incomplete pass intended for the slot receiver.".to_string()
        } else {
            "Stuffed at the line of scrimmage. No gain.".to_string()
        };
    }

    if ball_on + yards >= field::GOAL_LINE {
        is_score = true;
        yards = field::GOAL_LINE - ball_on;
        description = format!("TOUCHDOWN! Explosive play on the {}!", play.name);
    }

    trace!(play = %play.name, yardage = yards, is_score, "play resolved");

    GameEvent {
        description,
        yardage: yards,
        is_score,
        event_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    /// Replays a scripted list of unit-interval draws through the `Rng`
    /// front end. Panics when a test consumes more draws than it scripted,
    /// which pins the draw count per branch.
    struct ScriptedRng {
        rolls: Vec<f64>,
        next: usize,
    }

    impl ScriptedRng {
        fn new(rolls: &[f64]) -> Self {
            Self {
                rolls: rolls.to_vec(),
                next: 0,
            }
        }
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            (self.next_u64() >> 32) as u32
        }

        fn next_u64(&mut self) -> u64 {
            let roll = self.rolls[self.next];
            self.next += 1;
            // The standard f64 sampler keeps the top 53 bits.
            ((roll * (1u64 << 53) as f64) as u64) << 11
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(8) {
                let bytes = self.next_u64().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    fn pass_play() -> Play {
        Play {
            id: "p4".to_string(),
            name: "PA Crossers".to_string(),
            play_type: PlayType::Pass,
            formation: "I-Form".to_string(),
            risk: 5,
            reward: 8,
            success_rate: 0.65,
        }
    }

    fn run_play() -> Play {
        Play {
            id: "p1".to_string(),
            name: "Inside Zone".to_string(),
            play_type: PlayType::Run,
            formation: "Shotgun".to_string(),
            risk: 2,
            reward: 4,
            success_rate: 0.65,
        }
    }

    #[test]
    fn low_roll_is_an_interception() {
        let mut rng = ScriptedRng::new(&[0.04]);
        let event = calculate_outcome(&pass_play(), 50, &mut rng);
        assert_eq!(event.event_type, EventType::Turnover);
        assert_eq!(event.yardage, 0);
        assert!(!event.is_score);
        assert!(event.description.contains("INTERCEPTED"));
    }

    #[test]
    fn success_without_big_play_takes_three_draws() {
        // roll 0.3 (success), big-play 0.9 (miss), gain 0.5 -> 4 + 2 = 6.
        let mut rng = ScriptedRng::new(&[0.3, 0.9, 0.5]);
        let event = calculate_outcome(&pass_play(), 50, &mut rng);
        assert_eq!(event.event_type, EventType::Pass);
        assert_eq!(event.yardage, 6);
        assert!(!event.is_score);
        assert!(event.description.contains("Complete for 6 yards"));
    }

    #[test]
    fn big_play_adds_the_bonus_draw() {
        // reward 8 -> big-play chance 0.4; bonus 0.5*20 + 10 = 20 extra.
        let mut rng = ScriptedRng::new(&[0.3, 0.1, 0.5, 0.5]);
        let event = calculate_outcome(&pass_play(), 50, &mut rng);
        assert_eq!(event.yardage, 26);
        assert!(!event.is_score);
    }

    #[test]
    fn successful_run_reads_as_a_run() {
        let mut rng = ScriptedRng::new(&[0.3, 0.9, 0.25]);
        let event = calculate_outcome(&run_play(), 50, &mut rng);
        assert_eq!(event.event_type, EventType::Run);
        assert_eq!(event.yardage, 4);
        assert!(event.description.contains("Run for 4 yards"));
    }

    #[test]
    fn failed_pass_without_sack_is_incomplete() {
        // roll 0.7 (fail), sack check 0.3 (miss) - exactly two draws.
        let mut rng = ScriptedRng::new(&[0.7, 0.3]);
        let event = calculate_outcome(&pass_play(), 50, &mut rng);
        assert_eq!(event.yardage, 0);
        assert!(!event.is_score);
        assert!(event.description.contains("Incomplete"));
    }

    #[test]
    fn sack_loses_one_to_eight() {
        // roll 0.7 (fail), sack check 0.1 (hit), loss 0.5*8 = 4 -> -5.
        let mut rng = ScriptedRng::new(&[0.7, 0.1, 0.5]);
        let event = calculate_outcome(&pass_play(), 50, &mut rng);
        assert_eq!(event.yardage, -5);
        assert!(event.description.contains("SACKED"));
        assert!(event.description.contains('5'));
    }

    #[test]
    fn failed_run_consumes_exactly_one_draw() {
        // A scripted rng panics past its list; one roll must be enough.
        let mut rng = ScriptedRng::new(&[0.7]);
        let event = calculate_outcome(&run_play(), 50, &mut rng);
        assert_eq!(event.yardage, 0);
        assert!(event.description.contains("Stuffed"));
    }

    #[test]
    fn touchdown_clamp_applies_after_big_play_bonus() {
        // base 9 + bonus 28 = 37 from the 95 would cross the goal line.
        let mut rng = ScriptedRng::new(&[0.3, 0.1, 0.9, 0.9]);
        let event = calculate_outcome(&pass_play(), 95, &mut rng);
        assert!(event.is_score);
        assert_eq!(event.yardage, 5);
        assert!(event.description.contains("TOUCHDOWN"));
    }

    #[test]
    fn exact_goal_line_gain_scores() {
        // 0.75*8 = 6 + 2 = 8 yards from the 92 reaches exactly 100.
        let mut rng = ScriptedRng::new(&[0.3, 0.9, 0.75]);
        let event = calculate_outcome(&pass_play(), 92, &mut rng);
        assert!(event.is_score);
        assert_eq!(event.yardage, 8);
    }

    #[test]
    fn boundary_roll_at_success_rate_fails() {
        let mut rng = ScriptedRng::new(&[0.65, 0.9]);
        let event = calculate_outcome(&pass_play(), 50, &mut rng);
        assert_eq!(event.yardage, 0);
        assert!(event.description.contains("Incomplete"));
    }

    #[test]
    fn scripted_rng_round_trips_unit_draws() {
        let mut rng = ScriptedRng::new(&[0.0, 0.25, 0.999_999]);
        assert!(rng.gen::<f64>() < 1e-9);
        assert!((rng.gen::<f64>() - 0.25).abs() < 1e-9);
        assert!((rng.gen::<f64>() - 0.999_999).abs() < 1e-6);
    }
}
