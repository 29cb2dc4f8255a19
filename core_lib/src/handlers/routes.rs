//! Route table for the site

use super::{health, leads, pages, redirects};
use crate::AppState;
use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::handle_home))
        .route("/services", get(pages::handle_services))
        .route("/industries", get(pages::handle_industries))
        .route("/how-it-works", get(pages::handle_how_it_works))
        .route("/impact", get(pages::handle_impact))
        .route(
            "/contact",
            get(pages::handle_contact_page).post(leads::handle_contact_submit),
        )
        .route(
            "/book-consultation",
            get(pages::handle_consultation_page).post(leads::handle_consultation_submit),
        )
        .route(
            "/start-project",
            get(pages::handle_tender_page).post(leads::handle_tender_submit),
        )
        .route("/account", get(pages::handle_account_page))
        .route("/auth/:action", get(redirects::handle_auth_redirect))
        .route("/checkout/:plan", get(redirects::handle_checkout_redirect))
        .route("/api/leads", post(leads::handle_api_lead))
        .route("/health", get(health::handle_health))
        .fallback(handle_unknown)
}

async fn handle_unknown() -> Redirect {
    Redirect::to("/")
}
