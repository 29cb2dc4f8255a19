//! Lead submissions from the HTML forms and the JSON API

use crate::{
    captcha::CaptchaGate,
    error::Result,
    extractors::ApiJson,
    lead::{ConsultationForm, ContactForm, LeadForm, LeadRequest, TenderForm},
    models::ApiResponse,
    pages::{render_consultation, render_contact, render_tender, Notice, PageContext},
    AppState,
};
use axum::{
    extract::{rejection::FormRejection, Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde_json::json;
use tracing::{debug, warn};

type Render<F> = fn(&F, &PageContext<'_>) -> String;

const UNREADABLE_FORM: &str = "We could not read that submission. Please check the form and try again.";

/// Runs one form post through the lead service and answers with the page
/// re-rendered around the outcome, or a redirect to checkout.
async fn submit_form<F>(state: &AppState, mut form: F, render: Render<F>) -> Response
where
    F: LeadForm + Send + Sync,
{
    let mut gate = CaptchaGate::with_widget_key(form.widget_key());
    gate.on_verify(form.captcha_response());

    match state.leads.submit(&form, &mut gate).await {
        Ok(outcome) => {
            if let Some(checkout) = outcome.redirect {
                return Redirect::to(checkout.as_str()).into_response();
            }

            form.set_widget_key(outcome.widget_key);
            if form.clears_on_success() {
                form.clear();
            }

            let context = state
                .page_context()
                .with_notice(Notice::success(outcome.message));
            Html(render(&form, &context)).into_response()
        }
        Err(err) => {
            let status = if err.is_validation() {
                StatusCode::UNPROCESSABLE_ENTITY
            } else {
                warn!(lead_type = %form.lead_type(), error = %err, "Lead submission failed");
                StatusCode::BAD_GATEWAY
            };

            let context = state.page_context().with_notice(Notice::error(err.to_string()));
            (status, Html(render(&form, &context))).into_response()
        }
    }
}

/// A post that does not decode (an unknown plan, a non-numeric widget key)
/// gets an empty form back with a notice instead of a bare rejection body.
fn unreadable_form<F>(state: &AppState, rejection: FormRejection, render: Render<F>) -> Response
where
    F: LeadForm + Default,
{
    debug!(error = %rejection.body_text(), "Rejected form submission");
    let context = state.page_context().with_notice(Notice::error(UNREADABLE_FORM));
    (rejection.status(), Html(render(&F::default(), &context))).into_response()
}

pub async fn handle_consultation_submit(
    State(state): State<AppState>,
    form: std::result::Result<Form<ConsultationForm>, FormRejection>,
) -> Response {
    match form {
        Ok(Form(form)) => submit_form(&state, form, render_consultation).await,
        Err(rejection) => unreadable_form(&state, rejection, render_consultation),
    }
}

pub async fn handle_tender_submit(
    State(state): State<AppState>,
    form: std::result::Result<Form<TenderForm>, FormRejection>,
) -> Response {
    match form {
        Ok(Form(form)) => submit_form(&state, form, render_tender).await,
        Err(rejection) => unreadable_form(&state, rejection, render_tender),
    }
}

pub async fn handle_contact_submit(
    State(state): State<AppState>,
    form: std::result::Result<Form<ContactForm>, FormRejection>,
) -> Response {
    match form {
        Ok(Form(form)) => submit_form(&state, form, render_contact).await,
        Err(rejection) => unreadable_form(&state, rejection, render_contact),
    }
}

pub async fn handle_api_lead(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LeadRequest>,
) -> Result<impl IntoResponse> {
    let mut gate = CaptchaGate::new();
    gate.on_verify(request.captcha_response());

    let outcome = state.leads.submit(&request, &mut gate).await?;

    let data = json!({
        "redirect": outcome.redirect.as_ref().map(|url| url.as_str()),
        "response": outcome.response,
    });

    Ok(Json(ApiResponse::success(data).with_message(outcome.message)))
}
