use auth::JwtError;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::auth::errors::AuthError;
use crate::domain::simulator::errors::SimulatorError;
use crate::domain::simulator::models::Simulator;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;

pub mod create_simulator;
pub mod delete_profile;
pub mod delete_simulator;
pub mod get_private_profile;
pub mod get_public_profile;
pub mod get_simulator;
pub mod get_simulator_by_name;
pub mod login;
pub mod register;
pub mod update_profile;
pub mod update_simulator;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) | UserError::NotFoundByUsername(_) => {
                ApiError::NotFound(err.to_string())
            }
            UserError::UsernameAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidUserId(_) | UserError::MissingField(_) => {
                ApiError::BadRequest(err.to_string())
            }
            UserError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<SimulatorError> for ApiError {
    fn from(err: SimulatorError) -> Self {
        match err {
            SimulatorError::NotFound(_) | SimulatorError::NotFoundByName(_) => {
                ApiError::NotFound(err.to_string())
            }
            SimulatorError::NameAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            SimulatorError::InvalidSimulatorId(_)
            | SimulatorError::MissingField(_)
            | SimulatorError::InvalidWeightRange(_) => ApiError::BadRequest(err.to_string()),
            SimulatorError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingField(_) => ApiError::BadRequest(err.to_string()),
            AuthError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            AuthError::User(e) => ApiError::from(e),
            AuthError::Token(JwtError::EncodingFailed(_)) | AuthError::Password(_) => {
                ApiError::InternalServerError(err.to_string())
            }
            AuthError::Token(_) => ApiError::Unauthorized(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Outward view of a user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            username: user.username.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulatorData {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub min_weight: f64,
    pub max_weight: f64,
    pub weight_increment: f64,
    pub created_at: DateTime<Utc>,
}

impl From<&Simulator> for SimulatorData {
    fn from(simulator: &Simulator) -> Self {
        Self {
            id: simulator.id.0,
            name: simulator.name.as_str().to_string(),
            description: simulator.description.clone(),
            min_weight: simulator.weight_range.min_weight(),
            max_weight: simulator.weight_range.max_weight(),
            weight_increment: simulator.weight_range.weight_increment(),
            created_at: simulator.created_at,
        }
    }
}
