use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Create a new user from a username and an already hashed password.
    ///
    /// # Errors
    /// * `MissingField` - Username or password hash is empty
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Retrieve user by username.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - No user with this username
    /// * `DatabaseError` - Database operation failed
    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError>;

    /// Apply a patch to an existing user.
    ///
    /// # Returns
    /// The user as stored after the patch
    ///
    /// # Errors
    /// * `MissingField` - Patch carries no value
    /// * `NotFound` - User does not exist
    /// * `UsernameAlreadyExists` - New username belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn update_user(&self, id: &UserId, command: UpdateUserCommand)
        -> Result<User, UserError>;

    /// Delete existing user.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_user(&self, id: &UserId) -> Result<(), UserError>;
}

/// Persistence operations for user aggregate.
///
/// Implementations enforce username uniqueness atomically; the service-level
/// check is advisory only.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user and return it with its assigned id.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Uniqueness constraint violated
    /// * `MissingField` - A required column was null
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Retrieve user by identifier, `None` if absent.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by username, `None` if absent.
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Overwrite the stored row for `user.id`.
    ///
    /// # Errors
    /// * `NotFound` - No row with this id
    /// * `UsernameAlreadyExists` - Uniqueness constraint violated
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, user: User) -> Result<User, UserError>;

    /// Remove user from storage.
    ///
    /// # Errors
    /// * `NotFound` - No row with this id
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &UserId) -> Result<(), UserError>;
}
