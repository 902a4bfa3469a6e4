use serde::{Deserialize, Serialize};

/// Play-call family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayType {
    Pass,
    Run,
}

/// One entry in the play-call menu. Immutable catalog data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Play {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub play_type: PlayType,
    pub formation: String,
    /// 1-10.
    pub risk: u8,
    /// 1-10. Drives big-play probability (`reward / 20`).
    pub reward: u8,
    /// Base completion/success probability, 0..1.
    pub success_rate: f64,
}

/// What kind of play the resolved event was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Pass,
    Run,
    Turnover,
    Special,
}

impl From<PlayType> for EventType {
    fn from(play_type: PlayType) -> Self {
        match play_type {
            PlayType::Pass => EventType::Pass,
            PlayType::Run => EventType::Run,
        }
    }
}

/// The outcome of one resolved play. Appended to a play-history log owned by
/// the shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    pub description: String,
    /// Signed yards gained on the play.
    pub yardage: i16,
    pub is_score: bool,
    #[serde(rename = "type")]
    pub event_type: EventType,
}

/// Which sideline has the ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Possession {
    Home,
    Away,
}

/// Down-and-distance state, mutated once per resolved play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// 1..=4. Never persists above 4.
    pub down: u8,
    /// Yards to go for a fresh set of downs. Always positive.
    pub distance: i16,
    /// Yards from own goal line, 0..=100. Touchdown detection clamps at 100.
    pub ball_on: i16,
    pub quarter: u8,
    /// Clock display, "MM:SS".
    pub time: String,
    pub home_score: u16,
    pub away_score: u16,
    pub possession: Possession,
}

impl GameState {
    /// Opening state: 1st and 10 from the own 25.
    pub fn kickoff() -> Self {
        Self {
            down: 1,
            distance: 10,
            ball_on: 25,
            quarter: 1,
            time: "15:00".to_string(),
            home_score: 0,
            away_score: 0,
            possession: Possession::Home,
        }
    }
}
