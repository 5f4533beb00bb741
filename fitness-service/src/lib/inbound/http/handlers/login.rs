use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::register::CredentialsRequestBody;
use super::register::TokenResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequestBody>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    let (user, token) = state
        .auth_service
        .login(body.username, body.password)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        TokenResponseData {
            token,
            user: (&user).into(),
        },
    ))
}
