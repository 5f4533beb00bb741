use thiserror::Error;

/// Error for SimulatorId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SimulatorIdError {
    #[error("Invalid simulator id: {0}")]
    InvalidFormat(String),
}

/// Error for SimulatorName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SimulatorNameError {
    #[error("Simulator name is empty")]
    Empty,
}

/// Violations of the weight progression rules.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WeightRangeError {
    #[error("Weight cannot be negative: min weight {min}, max weight {max}")]
    NegativeWeight { min: f64, max: f64 },

    #[error("Weight increment cannot be zero")]
    ZeroIncrement,

    #[error("Weight range is invalid: {0}")]
    InvalidRange(String),
}

/// Top-level error type for all simulator-related operations
#[derive(Debug, Clone, Error)]
pub enum SimulatorError {
    #[error("Invalid simulator ID: {0}")]
    InvalidSimulatorId(#[from] SimulatorIdError),

    #[error("Missing field: {0} is required")]
    MissingField(String),

    #[error(transparent)]
    InvalidWeightRange(#[from] WeightRangeError),

    #[error("Simulator not found: {0}")]
    NotFound(String),

    #[error("Simulator not found with name: {0}")]
    NotFoundByName(String),

    #[error("Simulator name already exists: {0}")]
    NameAlreadyExists(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<SimulatorNameError> for SimulatorError {
    fn from(err: SimulatorNameError) -> Self {
        match err {
            SimulatorNameError::Empty => SimulatorError::MissingField("name".to_string()),
        }
    }
}
