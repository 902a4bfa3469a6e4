pub mod json_api;


pub use json_api::{
    evaluate_offer_json, sign_contract_json, simulate_play_json, EvaluateOfferRequest,
    EvaluateOfferResponse, SignContractRequest, SignContractResponse, SimulatePlayRequest,
    SimulatePlayResponse,
};
