//! GET handlers for the site's pages

use super::redirects::redirect_target;
use crate::{
    lead::{ConsultationForm, ContactForm, Plan, TenderForm},
    pages::{
        render_account, render_consultation, render_contact, render_info_page, render_tender,
        AccountMode, Page,
    },
    AppState,
};
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::Html,
};
use serde::Deserialize;

fn info_page(state: &AppState, page: Page) -> Html<String> {
    Html(render_info_page(page, &state.page_context()))
}

pub async fn handle_home(State(state): State<AppState>) -> Html<String> {
    info_page(&state, Page::Home)
}

pub async fn handle_services(State(state): State<AppState>) -> Html<String> {
    info_page(&state, Page::Services)
}

pub async fn handle_industries(State(state): State<AppState>) -> Html<String> {
    info_page(&state, Page::Industries)
}

pub async fn handle_how_it_works(State(state): State<AppState>) -> Html<String> {
    info_page(&state, Page::HowItWorks)
}

pub async fn handle_impact(State(state): State<AppState>) -> Html<String> {
    info_page(&state, Page::Impact)
}

#[derive(Debug, Default, Deserialize)]
pub struct ConsultationQuery {
    pub plan: Option<String>,
}

/// `?plan=` preselects a plan; unknown values fall back to the default.
pub async fn handle_consultation_page(
    State(state): State<AppState>,
    Query(query): Query<ConsultationQuery>,
) -> Html<String> {
    let form = ConsultationForm {
        plan: query
            .plan
            .as_deref()
            .and_then(Plan::from_key)
            .unwrap_or_default(),
        ..ConsultationForm::default()
    };
    Html(render_consultation(&form, &state.page_context()))
}

pub async fn handle_tender_page(State(state): State<AppState>) -> Html<String> {
    Html(render_tender(&TenderForm::default(), &state.page_context()))
}

pub async fn handle_contact_page(State(state): State<AppState>) -> Html<String> {
    Html(render_contact(&ContactForm::default(), &state.page_context()))
}

#[derive(Debug, Default, Deserialize)]
pub struct AccountQuery {
    #[serde(default)]
    pub mode: AccountMode,
}

pub async fn handle_account_page(
    State(state): State<AppState>,
    Query(query): Query<AccountQuery>,
    headers: HeaderMap,
) -> Html<String> {
    let redirect_to = redirect_target(&headers, &state);
    Html(render_account(query.mode, &redirect_to, &state.page_context()))
}
