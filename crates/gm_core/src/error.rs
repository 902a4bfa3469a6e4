use thiserror::Error;

/// Contract-math contract violations.
///
/// Valid domain inputs never produce these: scores and probabilities are
/// clamped instead. They fire only on malformed caller input, which fails
/// fast rather than producing nonsense numbers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContractError {
    #[error("contract term must be at least one year")]
    ZeroLengthTerm,

    #[error("negative {field}: {value}")]
    NegativeMoney { field: &'static str, value: f64 },

    #[error("demand total value must be positive, got {0}")]
    WorthlessDemand(f64),

    #[error("bonus proration term must be positive")]
    ZeroProrationTerm,

    #[error("void years {requested} exceed the maximum of {max} for this contract")]
    TooManyVoidYears { requested: u8, max: u8 },

    #[error("salary {salary} is at or below the veteran-minimum floor {floor}")]
    NothingToRestructure { salary: f64, floor: f64 },
}

/// JSON-boundary failures.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("unsupported schema version: {0}")]
    SchemaVersion(u8),

    #[error("contract error: {0}")]
    Contract(#[from] ContractError),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ContractError>;
