use async_trait::async_trait;

use crate::domain::simulator::errors::SimulatorError;
use crate::domain::simulator::models::CreateSimulatorCommand;
use crate::domain::simulator::models::NewSimulator;
use crate::domain::simulator::models::Simulator;
use crate::domain::simulator::models::SimulatorId;
use crate::domain::simulator::models::SimulatorName;
use crate::domain::simulator::models::UpdateSimulatorCommand;

/// Port for simulator domain service operations.
#[async_trait]
pub trait SimulatorServicePort: Send + Sync + 'static {
    /// Validate and store a new simulator.
    ///
    /// # Errors
    /// * `InvalidWeightRange` - Weights break a progression rule
    /// * `MissingField` - Name is empty
    /// * `NameAlreadyExists` - Name is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create_simulator(
        &self,
        command: CreateSimulatorCommand,
    ) -> Result<Simulator, SimulatorError>;

    /// # Errors
    /// * `NotFound` - Simulator does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_simulator(&self, id: &SimulatorId) -> Result<Simulator, SimulatorError>;

    /// # Errors
    /// * `NotFoundByName` - No simulator with this name
    /// * `DatabaseError` - Database operation failed
    async fn get_simulator_by_name(&self, name: &SimulatorName)
        -> Result<Simulator, SimulatorError>;

    /// Apply a patch and re-validate the resulting weight range.
    ///
    /// # Errors
    /// * `MissingField` - Patch carries no value
    /// * `NotFound` - Simulator does not exist
    /// * `InvalidWeightRange` - Merged weights break a progression rule
    /// * `NameAlreadyExists` - New name belongs to another simulator
    /// * `DatabaseError` - Database operation failed
    async fn update_simulator(
        &self,
        id: &SimulatorId,
        command: UpdateSimulatorCommand,
    ) -> Result<Simulator, SimulatorError>;

    /// # Errors
    /// * `NotFound` - Simulator does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_simulator(&self, id: &SimulatorId) -> Result<(), SimulatorError>;
}

/// Persistence operations for simulators.
///
/// Implementations enforce name uniqueness atomically.
#[async_trait]
pub trait SimulatorRepository: Send + Sync + 'static {
    /// # Errors
    /// * `NameAlreadyExists` - Uniqueness constraint violated
    /// * `MissingField` - A required column was null
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, simulator: NewSimulator) -> Result<Simulator, SimulatorError>;

    async fn find_by_id(&self, id: &SimulatorId) -> Result<Option<Simulator>, SimulatorError>;

    async fn find_by_name(
        &self,
        name: &SimulatorName,
    ) -> Result<Option<Simulator>, SimulatorError>;

    /// # Errors
    /// * `NotFound` - No row with this id
    /// * `NameAlreadyExists` - Uniqueness constraint violated
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, simulator: Simulator) -> Result<Simulator, SimulatorError>;

    /// # Errors
    /// * `NotFound` - No row with this id
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &SimulatorId) -> Result<(), SimulatorError>;
}
