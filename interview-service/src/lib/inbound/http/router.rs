use std::sync::Arc;
use std::time::Duration;

use auth::TokenCodec;
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

use super::handlers::authenticate::authenticate;
use super::handlers::create_interview::create_interview;
use super::handlers::create_user::create_user;
use super::handlers::delete_interview::delete_interview;
use super::handlers::get_interview::get_interview;
use super::handlers::list_interviews::list_interviews;
use super::handlers::status::status;
use super::handlers::update_interview::update_interview;
use super::middleware::require_authorization;
use crate::domain::interview::service::InterviewService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::InMemoryInterviewStore;
use crate::outbound::repositories::InMemoryUserStore;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<InMemoryUserStore>>,
    pub interview_service: Arc<InterviewService<InMemoryInterviewStore>>,
    pub token_codec: Arc<TokenCodec>,
    pub token_ttl_seconds: i64,
}

pub fn create_router(
    user_service: Arc<UserService<InMemoryUserStore>>,
    interview_service: Arc<InterviewService<InMemoryInterviewStore>>,
    token_codec: Arc<TokenCodec>,
    token_ttl_seconds: i64,
) -> Router {
    let state = AppState {
        user_service,
        interview_service,
        token_codec,
        token_ttl_seconds,
    };

    let public_routes = Router::new()
        .route("/api/v1/status", get(status))
        .route("/api/v1/authenticate", get(authenticate))
        .route("/api/v1/users", post(create_user));

    let protected_routes = Router::new()
        .route(
            "/api/v1/interviews",
            get(list_interviews).post(create_interview),
        )
        .route(
            "/api/v1/interviews/:interview_id",
            get(get_interview)
                .put(update_interview)
                .delete(delete_interview),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_authorization,
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
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
