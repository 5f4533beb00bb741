use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::simulator::errors::SimulatorError;
use crate::domain::simulator::models::SimulatorId;
use crate::domain::simulator::ports::SimulatorServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn delete_simulator(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let simulator_id = SimulatorId::from_string(&id).map_err(SimulatorError::from)?;

    state
        .simulator_service
        .delete_simulator(&simulator_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
