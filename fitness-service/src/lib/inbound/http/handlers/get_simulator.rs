use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::SimulatorData;
use crate::domain::simulator::errors::SimulatorError;
use crate::domain::simulator::models::SimulatorId;
use crate::domain::simulator::ports::SimulatorServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_simulator(
    State(state): State<AppState>,
    Path(simulator_id): Path<String>,
) -> Result<ApiSuccess<SimulatorData>, ApiError> {
    let simulator_id = SimulatorId::from_string(&simulator_id).map_err(SimulatorError::from)?;

    state
        .simulator_service
        .get_simulator(&simulator_id)
        .await
        .map_err(ApiError::from)
        .map(|ref simulator| ApiSuccess::new(StatusCode::OK, simulator.into()))
}
