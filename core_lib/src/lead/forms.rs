//! The three lead-capture forms and the JSON intake request

use super::models::{non_empty, CaptchaToken, LeadPayload, LeadType, Plan};
use crate::validation::{validate_present, Validatable, ValidationResult};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Behaviour shared by everything that turns visitor input into a lead.
pub trait LeadForm {
    fn lead_type(&self) -> LeadType;

    /// Shown when any required field is missing.
    fn required_message(&self) -> &'static str;

    fn success_message(&self) -> &'static str;

    fn validate_fields(&self) -> ValidationResult;

    fn to_payload(&self, token: CaptchaToken) -> LeadPayload;

    /// Raw token posted by the verification widget, possibly empty.
    fn captcha_response(&self) -> &str;

    fn plan(&self) -> Option<Plan> {
        None
    }

    /// Identity of the verification widget the form was rendered with.
    fn widget_key(&self) -> u64 {
        0
    }

    fn set_widget_key(&mut self, _widget_key: u64) {}

    /// Forms that start over after a successful submission.
    fn clears_on_success(&self) -> bool {
        false
    }

    fn clear(&mut self) {}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsultationForm {
    pub plan: Plan,
    #[validate(custom(function = "validate_present", message = "Name is required"))]
    pub name: String,
    pub business_name: String,
    pub location: String,
    #[validate(custom(function = "validate_present", message = "Phone is required"))]
    pub phone: String,
    #[validate(custom(function = "validate_present", message = "Email is required"))]
    pub email: String,
    #[validate(length(max = 5000, message = "Message must not exceed 5000 characters"))]
    pub message: String,
    #[serde(rename = "h-captcha-response")]
    pub captcha_response: String,
    pub widget_key: u64,
}

impl LeadForm for ConsultationForm {
    fn lead_type(&self) -> LeadType {
        LeadType::Consultation
    }

    fn required_message(&self) -> &'static str {
        "Name, phone, and email are required."
    }

    fn success_message(&self) -> &'static str {
        "Request received. Proceed to payment to confirm your booking."
    }

    fn validate_fields(&self) -> ValidationResult {
        self.validate_comprehensive()
    }

    fn to_payload(&self, token: CaptchaToken) -> LeadPayload {
        LeadPayload::new(self.lead_type(), self.name.trim(), self.phone.trim(), token)
            .with_plan(self.plan)
            .with_email(&self.email)
            .with_business_name(&self.business_name)
            .with_location(&self.location)
            .with_message(&self.message)
    }

    fn captcha_response(&self) -> &str {
        &self.captcha_response
    }

    fn widget_key(&self) -> u64 {
        self.widget_key
    }

    fn set_widget_key(&mut self, widget_key: u64) {
        self.widget_key = widget_key;
    }

    fn plan(&self) -> Option<Plan> {
        Some(self.plan)
    }
}

/// Invitation-to-tender submitted from the start-project page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct TenderForm {
    #[validate(custom(function = "validate_present", message = "Name is required"))]
    pub name: String,
    #[validate(custom(function = "validate_present", message = "Organization is required"))]
    pub business_name: String,
    #[validate(custom(function = "validate_present", message = "Phone is required"))]
    pub phone: String,
    #[validate(custom(function = "validate_present", message = "Email is required"))]
    pub email: String,
    #[validate(
        custom(function = "validate_present", message = "Requirements are required"),
        length(max = 20000, message = "Requirements must not exceed 20000 characters")
    )]
    pub requirements: String,
    #[serde(rename = "h-captcha-response")]
    pub captcha_response: String,
    pub widget_key: u64,
}

impl LeadForm for TenderForm {
    fn lead_type(&self) -> LeadType {
        LeadType::Tender
    }

    fn required_message(&self) -> &'static str {
        "Please fill in all required fields."
    }

    fn success_message(&self) -> &'static str {
        "Tender submitted successfully. We will respond within 24 hours."
    }

    fn validate_fields(&self) -> ValidationResult {
        self.validate_comprehensive()
    }

    fn to_payload(&self, token: CaptchaToken) -> LeadPayload {
        LeadPayload::new(self.lead_type(), self.name.trim(), self.phone.trim(), token)
            .with_email(&self.email)
            .with_business_name(&self.business_name)
            .with_message(&self.requirements)
    }

    fn captcha_response(&self) -> &str {
        &self.captcha_response
    }

    fn widget_key(&self) -> u64 {
        self.widget_key
    }

    fn set_widget_key(&mut self, widget_key: u64) {
        self.widget_key = widget_key;
    }

    fn clears_on_success(&self) -> bool {
        true
    }

    fn clear(&mut self) {
        *self = TenderForm {
            widget_key: self.widget_key,
            ..TenderForm::default()
        };
    }
}

/// The short contact form. `contact` is whatever number the visitor gives us.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactForm {
    #[validate(custom(function = "validate_present", message = "Name is required"))]
    pub name: String,
    pub business_name: String,
    pub location: String,
    #[validate(custom(function = "validate_present", message = "Contact number is required"))]
    pub contact: String,
    #[validate(length(max = 5000, message = "Message must not exceed 5000 characters"))]
    pub message: String,
    #[serde(rename = "h-captcha-response")]
    pub captcha_response: String,
    pub widget_key: u64,
}

impl LeadForm for ContactForm {
    fn lead_type(&self) -> LeadType {
        LeadType::Contact
    }

    fn required_message(&self) -> &'static str {
        "Name and contact are required."
    }

    fn success_message(&self) -> &'static str {
        "Message sent. We will contact you shortly."
    }

    fn validate_fields(&self) -> ValidationResult {
        self.validate_comprehensive()
    }

    fn to_payload(&self, token: CaptchaToken) -> LeadPayload {
        LeadPayload::new(self.lead_type(), self.name.trim(), self.contact.trim(), token)
            .with_business_name(&self.business_name)
            .with_location(&self.location)
            .with_message(&self.message)
    }

    fn captcha_response(&self) -> &str {
        &self.captcha_response
    }

    fn widget_key(&self) -> u64 {
        self.widget_key
    }

    fn set_widget_key(&mut self, widget_key: u64) {
        self.widget_key = widget_key;
    }

    fn clears_on_success(&self) -> bool {
        true
    }

    fn clear(&mut self) {
        *self = ContactForm {
            widget_key: self.widget_key,
            ..ContactForm::default()
        };
    }
}

/// Lead posted as JSON to `/api/leads`. The token may be missing here; the
/// gate decides whether the lead can go out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRequest {
    #[serde(rename = "type")]
    pub lead_type: LeadType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub plan: Option<Plan>,
    #[serde(default)]
    pub hcaptcha_token: Option<String>,
}

impl LeadForm for LeadRequest {
    fn lead_type(&self) -> LeadType {
        self.lead_type
    }

    fn required_message(&self) -> &'static str {
        match self.lead_type {
            LeadType::Consultation => "Name, phone, and email are required.",
            LeadType::Tender => "Please fill in all required fields.",
            LeadType::Contact => "Name and contact are required.",
        }
    }

    fn success_message(&self) -> &'static str {
        match self.lead_type {
            LeadType::Consultation => {
                "Request received. Proceed to payment to confirm your booking."
            }
            LeadType::Tender => "Tender submitted successfully. We will respond within 24 hours.",
            LeadType::Contact => "Message sent. We will contact you shortly.",
        }
    }

    fn validate_fields(&self) -> ValidationResult {
        let mut result = ValidationResult::success();

        if validate_present(&self.name).is_err() {
            result.add_error("name", "Name is required");
        }
        if validate_present(&self.phone).is_err() {
            result.add_error("phone", "Phone is required");
        }

        let blank = |value: &Option<String>| value.as_deref().and_then(non_empty).is_none();

        if self.lead_type != LeadType::Contact && blank(&self.email) {
            result.add_error("email", "Email is required");
        }
        if self.lead_type == LeadType::Tender {
            if blank(&self.business_name) {
                result.add_error("business_name", "Organization is required");
            }
            if blank(&self.message) {
                result.add_error("message", "Requirements are required");
            }
        }

        result
    }

    fn to_payload(&self, token: CaptchaToken) -> LeadPayload {
        let optional = |value: &Option<String>| value.clone().unwrap_or_default();

        let mut payload =
            LeadPayload::new(self.lead_type, self.name.trim(), self.phone.trim(), token)
                .with_email(&optional(&self.email))
                .with_business_name(&optional(&self.business_name))
                .with_location(&optional(&self.location))
                .with_message(&optional(&self.message));

        if let Some(plan) = self.plan() {
            payload = payload.with_plan(plan);
        }
        payload
    }

    fn captcha_response(&self) -> &str {
        self.hcaptcha_token.as_deref().unwrap_or_default()
    }

    fn plan(&self) -> Option<Plan> {
        match self.lead_type {
            LeadType::Consultation => Some(self.plan.unwrap_or_default()),
            _ => None,
        }
    }
}
