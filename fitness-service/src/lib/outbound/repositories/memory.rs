//! In-memory storage adapters for tests and local runs.
//!
//! Uniqueness is checked under the write lock, so concurrent inserts of the
//! same username or name cannot both succeed.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::simulator::errors::SimulatorError;
use crate::domain::simulator::models::NewSimulator;
use crate::domain::simulator::models::Simulator;
use crate::domain::simulator::models::SimulatorId;
use crate::domain::simulator::models::SimulatorName;
use crate::domain::simulator::ports::SimulatorRepository;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

/// Rows keyed by id plus the last id handed out.
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i64, T>,
    last_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Table<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut table = self.users.write().await;

        if table.rows.values().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(user.username.to_string()));
        }

        let id = table.next_id();
        let created = User {
            id: UserId(id),
            username: user.username,
            password_hash: user.password_hash,
            created_at: user.created_at,
        };
        table.rows.insert(id, created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.read().await.rows.get(&id.0).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let table = self.users.read().await;
        Ok(table.rows.values().find(|u| &u.username == username).cloned())
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut table = self.users.write().await;

        if !table.rows.contains_key(&user.id.0) {
            return Err(UserError::NotFound(user.id.to_string()));
        }
        if table
            .rows
            .values()
            .any(|u| u.username == user.username && u.id != user.id)
        {
            return Err(UserError::UsernameAlreadyExists(user.username.to_string()));
        }

        table.rows.insert(user.id.0, user.clone());

        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        self.users
            .write()
            .await
            .rows
            .remove(&id.0)
            .map(|_| ())
            .ok_or(UserError::NotFound(id.to_string()))
    }
}

#[derive(Debug, Default)]
pub struct InMemorySimulatorRepository {
    simulators: RwLock<Table<Simulator>>,
}

impl InMemorySimulatorRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SimulatorRepository for InMemorySimulatorRepository {
    async fn create(&self, simulator: NewSimulator) -> Result<Simulator, SimulatorError> {
        let mut table = self.simulators.write().await;

        if table.rows.values().any(|s| s.name == simulator.name) {
            return Err(SimulatorError::NameAlreadyExists(simulator.name.to_string()));
        }

        let id = table.next_id();
        let created = Simulator {
            id: SimulatorId(id),
            name: simulator.name,
            description: simulator.description,
            weight_range: simulator.weight_range,
            created_at: simulator.created_at,
        };
        table.rows.insert(id, created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: &SimulatorId) -> Result<Option<Simulator>, SimulatorError> {
        Ok(self.simulators.read().await.rows.get(&id.0).cloned())
    }

    async fn find_by_name(
        &self,
        name: &SimulatorName,
    ) -> Result<Option<Simulator>, SimulatorError> {
        let table = self.simulators.read().await;
        Ok(table.rows.values().find(|s| &s.name == name).cloned())
    }

    async fn update(&self, simulator: Simulator) -> Result<Simulator, SimulatorError> {
        let mut table = self.simulators.write().await;

        if !table.rows.contains_key(&simulator.id.0) {
            return Err(SimulatorError::NotFound(simulator.id.to_string()));
        }
        if table
            .rows
            .values()
            .any(|s| s.name == simulator.name && s.id != simulator.id)
        {
            return Err(SimulatorError::NameAlreadyExists(simulator.name.to_string()));
        }

        table.rows.insert(simulator.id.0, simulator.clone());

        Ok(simulator)
    }

    async fn delete(&self, id: &SimulatorId) -> Result<(), SimulatorError> {
        self.simulators
            .write()
            .await
            .rows
            .remove(&id.0)
            .map(|_| ())
            .ok_or(SimulatorError::NotFound(id.to_string()))
    }
}
