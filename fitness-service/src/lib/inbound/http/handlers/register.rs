use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequestBody>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    state
        .auth_service
        .register(body.username, body.password)
        .await
        .map_err(ApiError::from)
        .map(|(user, token)| {
            ApiSuccess::new(
                StatusCode::CREATED,
                TokenResponseData {
                    token,
                    user: (&user).into(),
                },
            )
        })
}

/// Username and password as posted to register and login.
///
/// Absent fields deserialize as empty strings and are rejected by the
/// service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CredentialsRequestBody {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseData {
    pub token: String,
    pub user: UserData,
}
