use std::sync::Arc;
use std::time::Duration;

use auth::AuthGate;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::contacts::create_contact;
use super::handlers::contacts::delete_contact;
use super::handlers::contacts::get_contact;
use super::handlers::contacts::list_contacts;
use super::handlers::contacts::update_contact;
use super::handlers::users::current_user;
use super::handlers::users::login_user;
use super::handlers::users::register_user;
use super::handlers::ApiError;
use super::middleware::authenticate as auth_middleware;
use crate::domain::contact::ports::ContactServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub contact_service: Arc<dyn ContactServicePort>,
    pub gate: AuthGate,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    contact_service: Arc<dyn ContactServicePort>,
    gate: AuthGate,
) -> Router {
    let state = AppState {
        user_service,
        contact_service,
        gate,
    };

    let public_routes = Router::new()
        .route("/api/users/register", post(register_user))
        .route("/api/users/login", post(login_user));

    let protected_routes = Router::new()
        .route("/api/users/current", get(current_user))
        .route("/api/contacts", get(list_contacts).post(create_contact))
        .route(
            "/api/contacts/:id",
            get(get_contact).put(update_contact).delete(delete_contact),
        )
        .route_layer(middleware::from_fn_with_state(
            state.gate.clone(),
            auth_middleware,
        ));

    // Headers are left out of the span: they carry bearer tokens.
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
        .fallback(route_not_found)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}
