use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::simulator::errors::SimulatorError;
use crate::domain::simulator::models::CreateSimulatorCommand;
use crate::domain::simulator::models::NewSimulator;
use crate::domain::simulator::models::Simulator;
use crate::domain::simulator::models::SimulatorId;
use crate::domain::simulator::models::SimulatorName;
use crate::domain::simulator::models::UpdateSimulatorCommand;
use crate::domain::simulator::models::WeightRange;
use crate::domain::simulator::ports::SimulatorRepository;
use crate::domain::simulator::ports::SimulatorServicePort;

/// Domain service implementation for simulator operations.
pub struct SimulatorService<SR>
where
    SR: SimulatorRepository,
{
    repository: Arc<SR>,
}

impl<SR> SimulatorService<SR>
where
    SR: SimulatorRepository,
{
    pub fn new(repository: Arc<SR>) -> Self {
        Self { repository }
    }

    /// Fail if `name` already belongs to a simulator other than `owner`.
    async fn ensure_name_available(
        &self,
        name: &SimulatorName,
        owner: Option<SimulatorId>,
    ) -> Result<(), SimulatorError> {
        match self.repository.find_by_name(name).await? {
            Some(holder) if Some(holder.id) != owner => {
                Err(SimulatorError::NameAlreadyExists(name.to_string()))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl<SR> SimulatorServicePort for SimulatorService<SR>
where
    SR: SimulatorRepository,
{
    async fn create_simulator(
        &self,
        command: CreateSimulatorCommand,
    ) -> Result<Simulator, SimulatorError> {
        let weight_range = WeightRange::new(
            command.min_weight,
            command.max_weight,
            command.weight_increment,
        )?;
        let name = SimulatorName::new(command.name)?;

        self.ensure_name_available(&name, None).await?;

        let simulator = self
            .repository
            .create(NewSimulator {
                name,
                description: command.description.filter(|d| !d.is_empty()),
                weight_range,
                created_at: Utc::now(),
            })
            .await?;

        tracing::info!(
            simulator_id = %simulator.id,
            name = %simulator.name,
            "Simulator created"
        );

        Ok(simulator)
    }

    async fn get_simulator(&self, id: &SimulatorId) -> Result<Simulator, SimulatorError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(SimulatorError::NotFound(id.to_string()))
    }

    async fn get_simulator_by_name(
        &self,
        name: &SimulatorName,
    ) -> Result<Simulator, SimulatorError> {
        self.repository
            .find_by_name(name)
            .await?
            .ok_or(SimulatorError::NotFoundByName(name.to_string()))
    }

    async fn update_simulator(
        &self,
        id: &SimulatorId,
        command: UpdateSimulatorCommand,
    ) -> Result<Simulator, SimulatorError> {
        if command.is_empty() {
            return Err(SimulatorError::MissingField(
                "at least one simulator field".to_string(),
            ));
        }

        let mut simulator = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(SimulatorError::NotFound(id.to_string()))?;

        let current = simulator.weight_range;
        simulator.weight_range = WeightRange::new(
            command.min_weight.unwrap_or(current.min_weight()),
            command.max_weight.unwrap_or(current.max_weight()),
            command
                .weight_increment
                .unwrap_or(current.weight_increment()),
        )?;

        if let Some(name) = command.name.filter(|n| !n.is_empty()) {
            let name = SimulatorName::new(name)?;
            if name != simulator.name {
                self.ensure_name_available(&name, Some(simulator.id)).await?;
            }
            simulator.name = name;
        }

        if let Some(description) = command.description.filter(|d| !d.is_empty()) {
            simulator.description = Some(description);
        }

        let updated = self.repository.update(simulator).await?;
        tracing::info!(simulator_id = %updated.id, "Simulator updated");

        Ok(updated)
    }

    async fn delete_simulator(&self, id: &SimulatorId) -> Result<(), SimulatorError> {
        self.repository.delete(id).await?;
        tracing::info!(simulator_id = %id, "Simulator deleted");

        Ok(())
    }
}
