use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::SimulatorData;
use crate::domain::simulator::errors::SimulatorError;
use crate::domain::simulator::models::SimulatorName;
use crate::domain::simulator::ports::SimulatorServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_simulator_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<ApiSuccess<SimulatorData>, ApiError> {
    let name = SimulatorName::new(name).map_err(SimulatorError::from)?;

    state
        .simulator_service
        .get_simulator_by_name(&name)
        .await
        .map_err(ApiError::from)
        .map(|ref simulator| ApiSuccess::new(StatusCode::OK, simulator.into()))
}
