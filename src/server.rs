use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::config::{AppConfig, SecurityConfig};
use crate::handlers::{protected, public};
use crate::middleware::jwt_auth_middleware;

/// Shared handler state: the process-lifetime pool and the loaded config
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: AppConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }
}

pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.security);

    let mut router = Router::new()
        // Protected API
        .merge(state_routes())
        .merge(district_routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), jwt_auth_middleware))
        // Public; must stay below route_layer to skip the JWT check
        .route("/", get(public::service::root))
        .route("/health", get(public::service::health))
        .route("/login", post(public::login));

    if let Some(cors) = cors {
        router = router.layer(cors);
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

fn state_routes() -> Router<AppState> {
    Router::new()
        .route("/states", get(protected::states::list))
        .route("/states/:state_id", get(protected::states::get))
        .route("/states/:state_id/", get(protected::states::get))
        .route("/states/:state_id/stats", get(protected::states::stats))
}

fn district_routes() -> Router<AppState> {
    Router::new()
        .route("/districts", post(protected::districts::create))
        .route(
            "/districts/:district_id",
            get(protected::districts::get)
                .put(protected::districts::update)
                .delete(protected::districts::delete),
        )
}

fn cors_layer(security: &SecurityConfig) -> Option<CorsLayer> {
    if !security.enable_cors {
        return None;
    }

    let allow_origin = if security.cors_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(parse_origins(&security.cors_origins))
    };

    Some(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE]),
    )
}

fn parse_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect()
}

/// Serve the router on an already-bound listener until the process stops
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Server is running on http://{}", addr);
    }
    axum::serve(listener, app(state)).await
}
