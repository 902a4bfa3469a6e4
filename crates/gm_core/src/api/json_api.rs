use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::engine::{calculate_outcome, calculate_win_probability, update_game_state};
use crate::error::ApiError;
use crate::models::{
    Contract, ContractDemand, ContractOffer, DealStatus, GameEvent, GameState, Money, Play,
};
use crate::{negotiation, SCHEMA_VERSION};

fn check_schema(version: u8) -> Result<(), ApiError> {
    if version != SCHEMA_VERSION {
        return Err(ApiError::SchemaVersion(version));
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct EvaluateOfferRequest {
    pub schema_version: u8,
    pub offer: ContractOffer,
    pub demand: ContractDemand,
    pub available_cap_space: Money,
}

#[derive(Debug, Serialize)]
pub struct EvaluateOfferResponse {
    pub schema_version: u8,
    pub interest_score: f64,
    pub status: DealStatus,
    pub feedback: String,
    pub apy: Money,
    pub cap_compliant: bool,
}

/// Score an offer against a demand and report the agent's answer plus the
/// affordability readout the negotiation screen shows.
pub fn evaluate_offer_json(request_json: &str) -> Result<String, ApiError> {
    let request: EvaluateOfferRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let score = negotiation::interest_score(&request.offer, &request.demand)?;
    let evaluation = negotiation::evaluate_offer(score);
    let apy =
        negotiation::calculate_apy(request.offer.salary, request.offer.years, request.offer.bonus)?;
    let cap_compliant =
        negotiation::validate_cap_space(&request.offer, request.available_cap_space)?;

    let response = EvaluateOfferResponse {
        schema_version: SCHEMA_VERSION,
        interest_score: score,
        status: evaluation.status,
        feedback: evaluation.feedback,
        apy,
        cap_compliant,
    };
    Ok(serde_json::to_string(&response)?)
}

#[derive(Debug, Deserialize)]
pub struct SignContractRequest {
    pub schema_version: u8,
    pub offer: ContractOffer,
    pub start_year: u16,
}

#[derive(Debug, Serialize)]
pub struct SignContractResponse {
    pub schema_version: u8,
    pub contract: Contract,
}

/// Turn an accepted offer into the contract the shell stores on the player.
pub fn sign_contract_json(request_json: &str) -> Result<String, ApiError> {
    let request: SignContractRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let contract = negotiation::contract_from_offer(&request.offer, request.start_year)?;
    let response = SignContractResponse {
        schema_version: SCHEMA_VERSION,
        contract,
    };
    Ok(serde_json::to_string(&response)?)
}

fn default_win_probability() -> f64 {
    50.0
}

#[derive(Debug, Deserialize)]
pub struct SimulatePlayRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub play: Play,
    pub game_state: GameState,
    #[serde(default = "default_win_probability")]
    pub win_probability: f64,
}

#[derive(Debug, Serialize)]
pub struct SimulatePlayResponse {
    pub schema_version: u8,
    pub event: GameEvent,
    pub game_state: GameState,
    pub win_probability: f64,
}

/// Resolve one play call against the supplied state.
///
/// The caller owns the state loop: feed the returned `game_state` back in on
/// the next call. The seed fully determines the outcome, so replaying a
/// request replays the result.
pub fn simulate_play_json(request_json: &str) -> Result<String, ApiError> {
    let request: SimulatePlayRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let mut rng = ChaCha8Rng::seed_from_u64(request.seed);
    let event = calculate_outcome(&request.play, request.game_state.ball_on, &mut rng);
    let game_state = update_game_state(&request.game_state, &event);
    let win_probability = calculate_win_probability(request.win_probability, &event);

    let response = SimulatePlayResponse {
        schema_version: SCHEMA_VERSION,
        event,
        game_state,
        win_probability,
    };
    Ok(serde_json::to_string(&response)?)
}
