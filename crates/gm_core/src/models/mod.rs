pub mod contract;
pub mod draft;
pub mod game;
pub mod player;

pub use contract::{Contract, ContractDemand, ContractOffer, DealStatus, Interest, Money};
pub use draft::{CombineStats, DraftPick, DraftProspect};
pub use game::{EventType, GameEvent, GameState, Play, PlayType, Possession};
pub use player::{DevelopmentTrait, Player, PlayerStats, Position};
