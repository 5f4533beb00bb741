use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::SimulatorData;
use crate::domain::simulator::errors::SimulatorError;
use crate::domain::simulator::models::SimulatorId;
use crate::domain::simulator::models::UpdateSimulatorCommand;
use crate::domain::simulator::ports::SimulatorServicePort;
use crate::inbound::http::router::AppState;

/// HTTP request body for a simulator patch. Omitted fields are kept.
#[derive(Debug, Deserialize)]
pub struct UpdateSimulatorRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub min_weight: Option<f64>,
    pub max_weight: Option<f64>,
    pub weight_increment: Option<f64>,
}

impl From<UpdateSimulatorRequest> for UpdateSimulatorCommand {
    fn from(req: UpdateSimulatorRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            min_weight: req.min_weight,
            max_weight: req.max_weight,
            weight_increment: req.weight_increment,
        }
    }
}

pub async fn update_simulator(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateSimulatorRequest>,
) -> Result<ApiSuccess<SimulatorData>, ApiError> {
    let simulator_id = SimulatorId::from_string(&id).map_err(SimulatorError::from)?;

    state
        .simulator_service
        .update_simulator(&simulator_id, req.into())
        .await
        .map_err(ApiError::from)
        .map(|ref simulator| ApiSuccess::new(StatusCode::OK, simulator.into()))
}
