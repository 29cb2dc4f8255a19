//! Core library for the SADOPAK SIGNWORKS site: pages, lead intake and the
//! links into the WordPress backend that owns accounts and checkout.

pub mod captcha;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod lead;
pub mod links;
pub mod middleware;
pub mod models;
pub mod pages;
pub mod validation;

pub use captcha::{CaptchaGate, CaptchaState, CaptchaWidget};
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use handlers::routes::create_routes;
pub use lead::{
    LeadClient, LeadError, LeadPayload, LeadService, LeadSubmitter, LeadType, Plan,
    SubmissionError,
};
pub use links::{AuthAction, WordPressLinks};
pub use middleware::cors::cors_layer_from_config;

use axum::{extract::DefaultBodyLimit, middleware as axum_middleware, Router};
use pages::PageContext;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub links: WordPressLinks,
    pub captcha: CaptchaWidget,
    pub leads: LeadService,
    pub public_url: Option<String>,
}

impl AppState {
    /// Builds the state with the reqwest-backed intake client.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let base = config.wordpress_base_url()?;
        let client = LeadClient::new(WordPressLinks::new(&base).lead_endpoint());
        Self::with_submitter(config, Arc::new(client))
    }

    pub fn with_submitter(config: &AppConfig, submitter: Arc<dyn LeadSubmitter>) -> Result<Self> {
        let links = WordPressLinks::new(&config.wordpress_base_url()?);

        Ok(Self {
            app_name: "SADOPAK SIGNWORKS".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            captcha: CaptchaWidget::from_site_key(config.captcha_site_key()),
            leads: LeadService::new(submitter, links.clone()),
            links,
            public_url: config.public_url().map(str::to_string),
        })
    }

    pub fn page_context(&self) -> PageContext<'_> {
        PageContext::new(&self.links, &self.captcha)
    }
}

pub fn create_app(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new().merge(create_routes());

    router = router.layer(axum_middleware::from_fn(
        middleware::request_validation::security_headers_middleware,
    ));

    router = router.layer(axum_middleware::from_fn_with_state(
        config.server.max_body_bytes,
        middleware::request_validation::request_validation_middleware,
    ));

    router = router.layer(DefaultBodyLimit::max(config.server.max_body_bytes));

    router = router.layer(middleware::cors::cors_layer_from_config(&config.cors));

    router = router.layer(
        TraceLayer::new_for_http()
            .make_span_with(middleware::logging::make_span)
            .on_response(middleware::logging::on_response)
            .on_failure(middleware::logging::on_failure),
    );

    router.with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
