//! Validates a form, checks the verification gate and sends the lead

use super::client::{LeadSubmitter, SubmissionError};
use super::forms::LeadForm;
use crate::captcha::CaptchaGate;
use crate::links::WordPressLinks;
use crate::validation::ValidationResult;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

#[derive(Debug, Error)]
pub enum LeadError {
    /// Pre-flight failure. Nothing was sent.
    #[error("{message}")]
    Validation {
        message: String,
        fields: ValidationResult,
    },

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

impl LeadError {
    pub fn is_validation(&self) -> bool {
        matches!(self, LeadError::Validation { .. })
    }
}

#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub message: &'static str,
    /// Where the visitor goes next; consultation leads continue to checkout.
    pub redirect: Option<Url>,
    pub widget_key: u64,
    pub response: Value,
}

#[derive(Clone)]
pub struct LeadService {
    submitter: Arc<dyn LeadSubmitter>,
    links: WordPressLinks,
}

impl LeadService {
    pub fn new(submitter: Arc<dyn LeadSubmitter>, links: WordPressLinks) -> Self {
        Self { submitter, links }
    }

    pub fn links(&self) -> &WordPressLinks {
        &self.links
    }

    /// Sends at most one request. Required fields are checked first, then the
    /// gate; on success the gate is reset so its token cannot be reused.
    pub async fn submit<F>(&self, form: &F, gate: &mut CaptchaGate) -> Result<SubmissionOutcome, LeadError>
    where
        F: LeadForm + ?Sized,
    {
        let fields = form.validate_fields();
        if !fields.is_valid {
            debug!(lead_type = %form.lead_type(), errors = ?fields.errors, "Lead failed validation");
            return Err(LeadError::Validation {
                message: form.required_message().to_string(),
                fields,
            });
        }

        let token = gate.require_token().map_err(|e| {
            debug!(lead_type = %form.lead_type(), "Lead submitted without verification token");
            let mut fields = ValidationResult::success();
            fields.add_error(crate::captcha::RESPONSE_FIELD, &e.to_string());
            LeadError::Validation {
                message: e.to_string(),
                fields,
            }
        })?;

        let payload = form.to_payload(token);
        let response = self.submitter.submit(&payload).await?;

        gate.complete_submission();

        let redirect = form
            .plan()
            .map(|plan| self.links.checkout_url(plan.product_id()));

        info!(
            lead_type = %form.lead_type(),
            redirect = ?redirect.as_ref().map(Url::as_str),
            "Lead submitted"
        );

        Ok(SubmissionOutcome {
            message: form.success_message(),
            redirect,
            widget_key: gate.widget_key(),
            response,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::forms::{ConsultationForm, ContactForm, TenderForm};
    use crate::lead::models::{LeadPayload, Plan};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    struct RecordingSubmitter {
        sent: Mutex<Vec<LeadPayload>>,
        reply: Result<Value, SubmissionError>,
    }

    impl RecordingSubmitter {
        fn replying(reply: Result<Value, SubmissionError>) -> Arc<Self> {
            Arc::new(Self {
                sent: Mutex::new(Vec::new()),
                reply,
            })
        }

        fn sent(&self) -> Vec<LeadPayload> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LeadSubmitter for RecordingSubmitter {
        async fn submit(&self, payload: &LeadPayload) -> Result<Value, SubmissionError> {
            self.sent.lock().unwrap().push(payload.clone());
            self.reply.clone()
        }
    }

    fn service(submitter: Arc<RecordingSubmitter>) -> LeadService {
        let base = Url::parse("https://wp.example.org").unwrap();
        LeadService::new(submitter, WordPressLinks::new(&base))
    }

    fn verified_gate() -> CaptchaGate {
        let mut gate = CaptchaGate::new();
        gate.on_verify("P1_token");
        gate
    }

    fn jane() -> ConsultationForm {
        ConsultationForm {
            plan: Plan::Standard,
            name: "Jane".to_string(),
            phone: "+260900000000".to_string(),
            email: "jane@x.com".to_string(),
            ..ConsultationForm::default()
        }
    }

    #[tokio::test]
    async fn test_consultation_redirects_to_plan_checkout() {
        let submitter = RecordingSubmitter::replying(Ok(json!({"ok": true})));
        let service = service(submitter.clone());
        let mut gate = verified_gate();

        let outcome = service.submit(&jane(), &mut gate).await.unwrap();

        let sent = submitter.sent();
        assert_eq!(sent.len(), 1);
        let body = serde_json::to_value(&sent[0]).unwrap();
        assert_eq!(body["type"], "consultation");
        assert_eq!(body["plan"], "standard");

        assert_eq!(
            outcome.redirect.unwrap().as_str(),
            "https://wp.example.org/checkout/?add-to-cart=210"
        );
        assert_eq!(outcome.response, json!({"ok": true}));
        assert_eq!(outcome.widget_key, 1);
        assert!(!gate.can_submit());
    }

    #[tokio::test]
    async fn test_missing_field_sends_nothing() {
        let submitter = RecordingSubmitter::replying(Ok(json!({})));
        let service = service(submitter.clone());
        let mut gate = verified_gate();

        let form = ConsultationForm {
            email: String::new(),
            ..jane()
        };
        let err = service.submit(&form, &mut gate).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Name, phone, and email are required.");
        assert!(submitter.sent().is_empty());
        assert!(gate.can_submit());
    }

    #[tokio::test]
    async fn test_unverified_gate_sends_nothing() {
        let submitter = RecordingSubmitter::replying(Ok(json!({})));
        let service = service(submitter.clone());
        let mut gate = CaptchaGate::new();

        let form = ContactForm {
            name: "Jane".to_string(),
            contact: "0977000000".to_string(),
            ..ContactForm::default()
        };
        let err = service.submit(&form, &mut gate).await.unwrap_err();

        assert_eq!(err.to_string(), "Please complete the verification (hCaptcha).");
        assert!(submitter.sent().is_empty());
    }

    #[tokio::test]
    async fn test_rejection_keeps_token() {
        let submitter = RecordingSubmitter::replying(Err(SubmissionError::Rejected {
            status: 409,
            message: "duplicate".to_string(),
        }));
        let service = service(submitter.clone());
        let mut gate = verified_gate();

        let form = TenderForm {
            name: "Jane".to_string(),
            business_name: "Lusaka Clinic".to_string(),
            phone: "+260900000000".to_string(),
            email: "jane@x.com".to_string(),
            requirements: "Wayfinding".to_string(),
            ..TenderForm::default()
        };
        let err = service.submit(&form, &mut gate).await.unwrap_err();

        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "duplicate");
        assert_eq!(submitter.sent().len(), 1);
        assert!(gate.can_submit());
        assert_eq!(gate.widget_key(), 0);
    }

    #[tokio::test]
    async fn test_tender_has_no_redirect() {
        let submitter = RecordingSubmitter::replying(Ok(json!({"id": 7})));
        let service = service(submitter);
        let mut gate = verified_gate();

        let form = TenderForm {
            name: "Jane".to_string(),
            business_name: "Lusaka Clinic".to_string(),
            phone: "+260900000000".to_string(),
            email: "jane@x.com".to_string(),
            requirements: "Wayfinding".to_string(),
            ..TenderForm::default()
        };
        let outcome = service.submit(&form, &mut gate).await.unwrap();

        assert!(outcome.redirect.is_none());
        assert_eq!(
            outcome.message,
            "Tender submitted successfully. We will respond within 24 hours."
        );
    }
}
