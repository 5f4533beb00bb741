pub mod auth;
pub mod simulator;
pub mod user;
