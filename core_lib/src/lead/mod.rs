//! Lead capture: the payload, the intake client and the forms that feed it

pub mod client;
pub mod forms;
pub mod models;
pub mod service;

pub use client::{LeadClient, LeadSubmitter, SubmissionError};
pub use forms::{ConsultationForm, ContactForm, LeadForm, LeadRequest, TenderForm};
pub use models::{CaptchaToken, LeadPayload, LeadType, Plan, PlanDetails};
pub use service::{LeadError, LeadService, SubmissionOutcome};
