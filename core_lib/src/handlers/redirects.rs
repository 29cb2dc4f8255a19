//! Hand-offs to WordPress for sign-in and checkout

use crate::{
    error::{AppError, Result},
    lead::Plan,
    links::AuthAction,
    AppState,
};
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    response::Redirect,
};
use tracing::info;
use url::Url;

/// Where WordPress should send the visitor back to: the page they came from,
/// else this site's public URL, else the site root.
pub fn redirect_target(headers: &HeaderMap, state: &AppState) -> String {
    headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .and_then(|referer| Url::parse(referer).ok())
        .filter(|url| matches!(url.scheme(), "http" | "https"))
        .map(String::from)
        .or_else(|| state.public_url.clone())
        .unwrap_or_else(|| "/".to_string())
}

pub async fn handle_auth_redirect(
    State(state): State<AppState>,
    Path(action): Path<String>,
    headers: HeaderMap,
) -> Result<Redirect> {
    let action = AuthAction::from_slug(&action)
        .ok_or_else(|| AppError::NotFound(format!("Unknown account action '{}'", action)))?;

    let target = state
        .links
        .auth_url(action, &redirect_target(&headers, &state));

    info!(action = action.slug(), "Redirecting to WordPress account screen");
    Ok(Redirect::to(target.as_str()))
}

pub async fn handle_checkout_redirect(
    State(state): State<AppState>,
    Path(plan): Path<String>,
) -> Result<Redirect> {
    let plan = Plan::from_key(&plan)
        .ok_or_else(|| AppError::NotFound(format!("Unknown plan '{}'", plan)))?;

    info!(plan = plan.as_str(), "Redirecting to checkout");
    Ok(Redirect::to(
        state.links.checkout_url(plan.product_id()).as_str(),
    ))
}
