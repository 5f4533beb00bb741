use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Works on password hashes only; plaintext credentials are handled by the
/// auth service before they reach this layer.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    pub fn new(repository: Arc<UR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let username = Username::new(command.username)?;
        if command.password_hash.is_empty() {
            return Err(UserError::MissingField("password_hash".to_string()));
        }

        if self.repository.find_by_username(&username).await?.is_some() {
            return Err(UserError::UsernameAlreadyExists(username.to_string()));
        }

        let created_user = self
            .repository
            .create(NewUser {
                username,
                password_hash: command.password_hash,
                created_at: Utc::now(),
            })
            .await?;

        tracing::info!(
            user_id = %created_user.id,
            username = %created_user.username,
            "User created"
        );

        Ok(created_user)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or(UserError::NotFoundByUsername(username.to_string()))
    }

    async fn update_user(
        &self,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        let new_username = command.username.filter(|s| !s.is_empty());
        let new_password_hash = command.password_hash.filter(|s| !s.is_empty());

        if new_username.is_none() && new_password_hash.is_none() {
            return Err(UserError::MissingField(
                "username or password".to_string(),
            ));
        }

        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))?;

        if let Some(new_username) = new_username {
            let new_username = Username::new(new_username)?;
            if new_username != user.username {
                if let Some(holder) = self.repository.find_by_username(&new_username).await? {
                    if holder.id != user.id {
                        return Err(UserError::UsernameAlreadyExists(new_username.to_string()));
                    }
                }
            }
            user.username = new_username;
        }

        if let Some(new_password_hash) = new_password_hash {
            user.password_hash = new_password_hash;
        }

        let updated_user = self.repository.update(user).await?;
        tracing::info!(user_id = %updated_user.id, "User updated");

        Ok(updated_user)
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserError> {
        self.repository.delete(id).await?;
        tracing::info!(user_id = %id, "User deleted");

        Ok(())
    }
}
