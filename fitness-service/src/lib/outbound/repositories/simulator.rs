use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use sqlx::SqlitePool;

use super::constraint_violation;
use super::ConstraintViolation;
use crate::domain::simulator::errors::SimulatorError;
use crate::domain::simulator::models::NewSimulator;
use crate::domain::simulator::models::Simulator;
use crate::domain::simulator::models::SimulatorId;
use crate::domain::simulator::models::SimulatorName;
use crate::domain::simulator::models::WeightRange;
use crate::domain::simulator::ports::SimulatorRepository;

pub struct SqliteSimulatorRepository {
    pool: SqlitePool,
}

impl SqliteSimulatorRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn simulator_from_row(row: &SqliteRow) -> Result<Simulator, SimulatorError> {
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(database_error)?;

    // Rows are only written after the range passed validation.
    let weight_range = WeightRange::new(
        row.try_get("min_weight").map_err(database_error)?,
        row.try_get("max_weight").map_err(database_error)?,
        row.try_get("weight_increment").map_err(database_error)?,
    )?;

    Ok(Simulator {
        id: SimulatorId(row.try_get("id").map_err(database_error)?),
        name: SimulatorName::new(row.try_get("name").map_err(database_error)?)?,
        description: row.try_get("description").map_err(database_error)?,
        weight_range,
        created_at,
    })
}

fn database_error(e: sqlx::Error) -> SimulatorError {
    SimulatorError::DatabaseError(e.to_string())
}

fn write_error(e: sqlx::Error, name: &SimulatorName) -> SimulatorError {
    match constraint_violation(&e) {
        Some(ConstraintViolation::Unique) => SimulatorError::NameAlreadyExists(name.to_string()),
        Some(ConstraintViolation::NotNull(column)) => SimulatorError::MissingField(column),
        None => database_error(e),
    }
}

#[async_trait]
impl SimulatorRepository for SqliteSimulatorRepository {
    async fn create(&self, simulator: NewSimulator) -> Result<Simulator, SimulatorError> {
        let result = sqlx::query(
            r#"
            INSERT INTO simulators (name, description, min_weight, max_weight, weight_increment, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(simulator.name.as_str())
        .bind(simulator.description.as_deref())
        .bind(simulator.weight_range.min_weight())
        .bind(simulator.weight_range.max_weight())
        .bind(simulator.weight_range.weight_increment())
        .bind(simulator.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, &simulator.name))?;

        Ok(Simulator {
            id: SimulatorId(result.last_insert_rowid()),
            name: simulator.name,
            description: simulator.description,
            weight_range: simulator.weight_range,
            created_at: simulator.created_at,
        })
    }

    async fn find_by_id(&self, id: &SimulatorId) -> Result<Option<Simulator>, SimulatorError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, description, min_weight, max_weight, weight_increment, created_at
            FROM simulators
            WHERE id = ?
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.as_ref().map(simulator_from_row).transpose()
    }

    async fn find_by_name(
        &self,
        name: &SimulatorName,
    ) -> Result<Option<Simulator>, SimulatorError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, description, min_weight, max_weight, weight_increment, created_at
            FROM simulators
            WHERE name = ?
            "#,
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.as_ref().map(simulator_from_row).transpose()
    }

    async fn update(&self, simulator: Simulator) -> Result<Simulator, SimulatorError> {
        let result = sqlx::query(
            r#"
            UPDATE simulators
            SET name = ?, description = ?, min_weight = ?, max_weight = ?, weight_increment = ?
            WHERE id = ?
            "#,
        )
        .bind(simulator.name.as_str())
        .bind(simulator.description.as_deref())
        .bind(simulator.weight_range.min_weight())
        .bind(simulator.weight_range.max_weight())
        .bind(simulator.weight_range.weight_increment())
        .bind(simulator.id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, &simulator.name))?;

        if result.rows_affected() == 0 {
            return Err(SimulatorError::NotFound(simulator.id.to_string()));
        }

        Ok(simulator)
    }

    async fn delete(&self, id: &SimulatorId) -> Result<(), SimulatorError> {
        let result = sqlx::query(
            r#"
            DELETE FROM simulators
            WHERE id = ?
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(SimulatorError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
