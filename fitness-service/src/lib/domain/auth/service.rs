use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;

/// Orchestrates registration, login and token checks on top of the user
/// service and the authenticator.
pub struct AuthService<US>
where
    US: UserServicePort,
{
    user_service: Arc<US>,
    authenticator: Arc<Authenticator>,
    /// Verified against when no stored hash exists, so failed lookups cost
    /// one password check like a wrong password does.
    dummy_hash: String,
}

impl<US> AuthService<US>
where
    US: UserServicePort,
{
    /// # Errors
    /// * `Password` - Hashing the placeholder credential failed
    pub fn new(
        user_service: Arc<US>,
        authenticator: Arc<Authenticator>,
    ) -> Result<Self, AuthError> {
        let dummy_hash = authenticator.hash_password("placeholder-credential")?;

        Ok(Self {
            user_service,
            authenticator,
            dummy_hash,
        })
    }
}

#[async_trait]
impl<US> AuthServicePort for AuthService<US>
where
    US: UserServicePort,
{
    async fn register(
        &self,
        username: String,
        password: String,
    ) -> Result<(User, String), AuthError> {
        if username.is_empty() {
            return Err(AuthError::MissingField("username".to_string()));
        }
        if password.is_empty() {
            return Err(AuthError::MissingField("password".to_string()));
        }

        let password_hash = self.authenticator.hash_password(&password)?;

        let user = self
            .user_service
            .create_user(CreateUserCommand::new(username, password_hash))
            .await?;

        let token = self.authenticator.issue_token(user.id.0)?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");

        Ok((user, token))
    }

    async fn login(&self, username: String, password: String) -> Result<(User, String), AuthError> {
        let user = match Username::new(username) {
            Ok(username) => match self.user_service.get_user_by_username(&username).await {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::debug!(username = %username, error = %e, "Login lookup failed");
                    None
                }
            },
            Err(_) => None,
        };

        let Some(user) = user else {
            let _ = self.authenticator.verify_password(&password, &self.dummy_hash);
            return Err(AuthError::InvalidCredentials);
        };

        let result = self
            .authenticator
            .authenticate(&password, &user.password_hash, user.id.0)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => AuthError::InvalidCredentials,
                AuthenticationError::PasswordError(err) => {
                    tracing::error!(user_id = %user.id, "Stored password hash is unreadable");
                    AuthError::Password(err)
                }
                AuthenticationError::JwtError(err) => AuthError::Token(err),
            })?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok((user, result.access_token))
    }

    async fn update_profile(
        &self,
        user_id: &UserId,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<User, AuthError> {
        let password_hash = match password.filter(|p| !p.is_empty()) {
            Some(password) => Some(self.authenticator.hash_password(&password)?),
            None => None,
        };

        let command = UpdateUserCommand {
            username,
            password_hash,
        };

        Ok(self.user_service.update_user(user_id, command).await?)
    }

    fn authenticate_token(&self, token: &str) -> Result<UserId, AuthError> {
        Ok(UserId(self.authenticator.verify_token(token)?))
    }
}
