use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Identity assertion carried by a bearer token.
///
/// `userID` is the only mandatory claim. `iat` and `exp` are written when the
/// issuer is configured with a lifetime; tokens lacking them never expire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Identifier of the authenticated user
    #[serde(rename = "userID")]
    pub user_id: i64,

    /// Issued at (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Expiration time (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Claims for `user_id` with no lifetime.
    pub fn for_user(user_id: i64) -> Self {
        Self {
            user_id,
            iat: None,
            exp: None,
        }
    }

    /// Stamp issue time and an expiration `lifetime` from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Expiration falls outside the representable range
    pub fn expiring_in(mut self, lifetime: Duration) -> Result<Self, JwtError> {
        let now = Utc::now();
        let exp = now.checked_add_signed(lifetime).ok_or_else(|| {
            JwtError::EncodingFailed(format!("token lifetime {lifetime} overflows exp"))
        })?;

        self.iat = Some(now.timestamp());
        self.exp = Some(exp.timestamp());
        Ok(self)
    }
}
