use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::SimulatorData;
use crate::domain::simulator::models::CreateSimulatorCommand;
use crate::domain::simulator::ports::SimulatorServicePort;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateSimulatorRequestBody {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub min_weight: f64,
    pub max_weight: f64,
    pub weight_increment: f64,
}

impl From<CreateSimulatorRequestBody> for CreateSimulatorCommand {
    fn from(body: CreateSimulatorRequestBody) -> Self {
        Self {
            name: body.name,
            description: body.description,
            min_weight: body.min_weight,
            max_weight: body.max_weight,
            weight_increment: body.weight_increment,
        }
    }
}

pub async fn create_simulator(
    State(state): State<AppState>,
    Json(body): Json<CreateSimulatorRequestBody>,
) -> Result<ApiSuccess<SimulatorData>, ApiError> {
    state
        .simulator_service
        .create_simulator(body.into())
        .await
        .map_err(ApiError::from)
        .map(|ref simulator| ApiSuccess::new(StatusCode::CREATED, simulator.into()))
}
