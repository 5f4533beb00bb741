use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_simulator::create_simulator;
use super::handlers::delete_profile::delete_profile;
use super::handlers::delete_simulator::delete_simulator;
use super::handlers::get_private_profile::get_private_profile;
use super::handlers::get_public_profile::get_public_profile;
use super::handlers::get_simulator::get_simulator;
use super::handlers::get_simulator_by_name::get_simulator_by_name;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::update_profile::update_profile;
use super::handlers::update_simulator::update_simulator;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::service::AuthService;
use crate::domain::simulator::service::SimulatorService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::SqliteSimulatorRepository;
use crate::outbound::repositories::SqliteUserRepository;

pub type SqliteUserService = UserService<SqliteUserRepository>;
pub type SqliteSimulatorService = SimulatorService<SqliteSimulatorRepository>;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<SqliteUserService>,
    pub simulator_service: Arc<SqliteSimulatorService>,
    pub auth_service: Arc<AuthService<SqliteUserService>>,
}

/// Build the HTTP router.
///
/// `request_timeout` bounds every request; a handler still running when it
/// elapses is dropped together with its pending database call.
pub fn create_router(
    user_service: Arc<SqliteUserService>,
    simulator_service: Arc<SqliteSimulatorService>,
    auth_service: Arc<AuthService<SqliteUserService>>,
    request_timeout: Duration,
) -> Router {
    let state = AppState {
        user_service,
        simulator_service,
        auth_service,
    };

    let public_routes = Router::new()
        .route("/users/register", post(register))
        .route("/users/login", post(login))
        .route("/users/:user_id", get(get_public_profile));

    let protected_routes = Router::new()
        .route("/me", get(get_private_profile))
        .route("/profile/update", put(update_profile))
        .route("/profile/delete", delete(delete_profile))
        .route("/simulators", post(create_simulator))
        .route("/simulators/by-name/:name", get(get_simulator_by_name))
        .route(
            "/simulators/:simulator_id",
            get(get_simulator)
                .put(update_simulator)
                .delete(delete_simulator),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive())
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .with_state(state)
}
