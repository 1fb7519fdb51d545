use axum::routing::{get, post};
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use console_api_rust::{config, handlers, middleware};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up ADMIN_SECRET, API_BASE, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton) and refuse
    // to start in production while any insecure default is still live.
    let config = config::config();
    config
        .validate()
        .unwrap_or_else(|e| panic!("refusing to start: {}", e));
    tracing::info!("Starting console API in {:?} mode", config.environment);

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("CONSOLE_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 Console API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    use handlers::pages;

    Router::new()
        // Public surfaces
        .route("/health", get(pages::health))
        .route("/admin/login", get(pages::admin_login_page))
        .route("/superadmin/login", get(pages::superadmin_login_page))
        // Console landings (protected by the gate)
        .route("/", get(pages::overview))
        .route("/admin", get(pages::tenant_home))
        // Session APIs (gate-exempt; they run their own cookie checks)
        .merge(admin_session_routes())
        .merge(superadmin_session_routes())
        .fallback(pages::not_found)
        // Global middleware - the gate runs before any handler dispatch
        .layer(axum::middleware::from_fn(middleware::session_gate))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn admin_session_routes() -> Router {
    use handlers::admin;

    Router::new()
        .route("/api/admin/login", post(admin::login))
        .route("/api/admin/logout", post(admin::logout))
        .route("/api/admin/me", get(admin::me))
}

fn superadmin_session_routes() -> Router {
    use handlers::superadmin;

    Router::new()
        .route("/api/superadmin/login", post(superadmin::login))
        .route("/api/superadmin/logout", post(superadmin::logout))
        .route("/api/superadmin/me", get(superadmin::me))
}
