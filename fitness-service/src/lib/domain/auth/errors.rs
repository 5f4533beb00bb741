use auth::JwtError;
use auth::PasswordError;
use thiserror::Error;

use crate::domain::user::errors::UserError;

/// Errors raised by the register, login and token use cases.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Missing field: {0} is required")]
    MissingField(String),

    /// Login failed. Unknown username and wrong password are not told apart.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    User(#[from] UserError),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] JwtError),
}
