use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Port for the authentication use cases.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user and issue a token for it.
    ///
    /// # Errors
    /// * `MissingField` - Username or password is empty
    /// * `Password` - Hashing failed
    /// * `User` - User creation failed, e.g. `UsernameAlreadyExists`
    /// * `Token` - Token signing failed
    async fn register(&self, username: String, password: String)
        -> Result<(User, String), AuthError>;

    /// Check credentials and issue a token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - No such user, or wrong password
    /// * `Password` - Stored hash is malformed
    /// * `Token` - Token signing failed
    async fn login(&self, username: String, password: String) -> Result<(User, String), AuthError>;

    /// Patch the username and/or password of `user_id`.
    ///
    /// A supplied password is hashed before it reaches the user service.
    ///
    /// # Errors
    /// * `Password` - Hashing failed
    /// * `User` - Update failed, e.g. `MissingField` or `NotFound`
    async fn update_profile(
        &self,
        user_id: &UserId,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<User, AuthError>;

    /// Resolve a bearer token to the user id it was issued for.
    ///
    /// # Errors
    /// * `Token` - Token is invalid or expired
    fn authenticate_token(&self, token: &str) -> Result<UserId, AuthError>;
}
