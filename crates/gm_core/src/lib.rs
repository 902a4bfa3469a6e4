//! # gm_core - Deterministic Franchise-Management Core
//!
//! This library provides the calculation core of a coach-mode franchise
//! game: contract negotiation with salary-cap accounting, and a simplified
//! play-by-play match simulator, with a JSON API for easy integration with
//! game shells.
//!
//! ## Features
//! - 100% deterministic simulation (same seed = same play-by-play)
//! - Pure, synchronous functions over plain data records - no I/O, no
//!   retained state; the shell owns persistence and rendering
//! - Fail-fast validation of malformed domain input

pub mod api;
pub mod cap;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;
pub mod negotiation;

// Re-export main API functions
pub use api::{evaluate_offer_json, sign_contract_json, simulate_play_json};
pub use error::{ApiError, ContractError, Result};

// Re-export the negotiation engine
pub use negotiation::{
    calculate_apy, calculate_total_value, cap_hit, contract_from_offer, evaluate_offer,
    interest_score, validate_cap_space, OfferEvaluation,
};

// Re-export cap accounting
pub use cap::{
    dead_cap, max_void_years, plan_release, plan_restructure, DeadCapBreakdown,
    ReleaseDesignation, ReleasePlan, RestructurePlan,
};

// Re-export the match engine
pub use engine::{
    calculate_outcome, calculate_win_probability, update_game_state, MatchSession,
};

// Re-export model types
pub use models::{
    Contract, ContractDemand, ContractOffer, DealStatus, DevelopmentTrait, DraftPick,
    DraftProspect, EventType, GameEvent, GameState, Interest, Money, Play, PlayType, Player,
    PlayerStats, Position, Possession,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
