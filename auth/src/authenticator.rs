use chrono::Duration;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining the credential codec and the token issuer.
///
/// Stateless apart from the signing key; safe to share behind an `Arc`.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_lifetime: Option<Duration>,
}

/// Result of successful authentication.
#[derive(Debug)]
pub struct AuthenticationResult {
    /// Identifier the token was issued for
    pub user_id: i64,
    /// Signed bearer token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator issuing tokens that never expire.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
            token_lifetime: None,
        }
    }

    /// Issue tokens carrying an `exp` claim `hours` after issuance.
    ///
    /// # Errors
    /// * `EncodingFailed` - `hours` is not representable as a duration
    pub fn with_token_lifetime_hours(mut self, hours: i64) -> Result<Self, JwtError> {
        let lifetime = Duration::try_hours(hours).ok_or_else(|| {
            JwtError::EncodingFailed(format!("token lifetime of {hours} hours is out of range"))
        })?;

        self.token_lifetime = Some(lifetime);
        Ok(self)
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a plaintext password against a stored hash.
    ///
    /// # Errors
    /// * `PasswordError` - Stored hash is malformed
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> Result<bool, PasswordError> {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and issue a token for `user_id`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is malformed
    /// * `JwtError` - Token signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: i64,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.issue_token(user_id)?;

        Ok(AuthenticationResult {
            user_id,
            access_token,
        })
    }

    /// Issue a token for `user_id` without password verification.
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing secret is unusable or expiration overflows
    pub fn issue_token(&self, user_id: i64) -> Result<String, JwtError> {
        let claims = match self.token_lifetime {
            Some(lifetime) => Claims::for_user(user_id).expiring_in(lifetime)?,
            None => Claims::for_user(user_id),
        };

        self.jwt_handler.encode(&claims)
    }

    /// Verify a token and return the user identifier it asserts.
    ///
    /// # Errors
    /// * `InvalidToken` - Signature, structure or claim is invalid
    /// * `TokenExpired` - Token carries an `exp` in the past
    pub fn verify_token(&self, token: &str) -> Result<i64, JwtError> {
        self.jwt_handler
            .decode::<Claims>(token)
            .map(|claims| claims.user_id)
    }
}
