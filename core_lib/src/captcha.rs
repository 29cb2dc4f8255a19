//! hCaptcha verification gate for the lead forms

use crate::lead::models::CaptchaToken;
use thiserror::Error;

pub const VERIFICATION_REQUIRED: &str = "Please complete the verification (hCaptcha).";

/// Field name the hCaptcha widget uses when posting its token with a form.
pub const RESPONSE_FIELD: &str = "h-captcha-response";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptchaState {
    Unverified,
    Verified(CaptchaToken),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{}", VERIFICATION_REQUIRED)]
pub struct VerificationRequired;

/// Token lifecycle of one form instance.
///
/// `Unverified -> Verified` on a widget verify callback, back to `Unverified`
/// on expiry, widget error, or a completed submission. Completing a
/// submission also bumps `widget_key`, which forces the widget to remount.
#[derive(Debug, Clone)]
pub struct CaptchaGate {
    state: CaptchaState,
    widget_key: u64,
}

impl Default for CaptchaGate {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptchaGate {
    pub fn new() -> Self {
        Self::with_widget_key(0)
    }

    pub fn with_widget_key(widget_key: u64) -> Self {
        Self {
            state: CaptchaState::Unverified,
            widget_key,
        }
    }

    pub fn state(&self) -> &CaptchaState {
        &self.state
    }

    pub fn widget_key(&self) -> u64 {
        self.widget_key
    }

    /// The widget reports an empty string when it has nothing to offer.
    pub fn on_verify(&mut self, token: &str) {
        self.state = match CaptchaToken::new(token) {
            Ok(token) => CaptchaState::Verified(token),
            Err(_) => CaptchaState::Unverified,
        };
    }

    pub fn on_expire(&mut self) {
        self.state = CaptchaState::Unverified;
    }

    pub fn on_error(&mut self) {
        self.state = CaptchaState::Unverified;
    }

    pub fn can_submit(&self) -> bool {
        matches!(self.state, CaptchaState::Verified(_))
    }

    pub fn token(&self) -> Option<&CaptchaToken> {
        match &self.state {
            CaptchaState::Verified(token) => Some(token),
            CaptchaState::Unverified => None,
        }
    }

    pub fn require_token(&self) -> Result<CaptchaToken, VerificationRequired> {
        self.token().cloned().ok_or(VerificationRequired)
    }

    pub fn complete_submission(&mut self) {
        self.state = CaptchaState::Unverified;
        self.widget_key = self.widget_key.wrapping_add(1);
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Missing hCaptcha site key.")]
pub struct MissingSiteKey;

/// What the page shows where the verification widget goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptchaWidget {
    Enabled { site_key: String },
    Misconfigured(MissingSiteKey),
}

impl CaptchaWidget {
    pub fn from_site_key(site_key: Option<&str>) -> Self {
        match site_key.map(str::trim).filter(|key| !key.is_empty()) {
            Some(key) => CaptchaWidget::Enabled {
                site_key: key.to_string(),
            },
            None => CaptchaWidget::Misconfigured(MissingSiteKey),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, CaptchaWidget::Enabled { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_starts_unverified() {
        let gate = CaptchaGate::new();
        assert_eq!(gate.state(), &CaptchaState::Unverified);
        assert!(!gate.can_submit());
        assert_eq!(gate.require_token(), Err(VerificationRequired));
        assert_eq!(gate.widget_key(), 0);
    }

    #[test]
    fn test_verify_enables_submission() {
        let mut gate = CaptchaGate::new();
        gate.on_verify("P1_token");
        assert!(gate.can_submit());
        assert_eq!(gate.token().map(CaptchaToken::as_str), Some("P1_token"));
    }

    #[test]
    fn test_empty_verify_keeps_gate_closed() {
        let mut gate = CaptchaGate::new();
        gate.on_verify("P1_token");
        gate.on_verify("");
        assert!(!gate.can_submit());
    }

    #[test]
    fn test_expiry_and_error_revoke_token() {
        let mut gate = CaptchaGate::new();
        gate.on_verify("P1_token");
        gate.on_expire();
        assert!(!gate.can_submit());

        gate.on_verify("P1_other");
        gate.on_error();
        assert!(!gate.can_submit());
        assert_eq!(gate.widget_key(), 0);
    }

    #[test]
    fn test_completed_submission_resets_widget() {
        let mut gate = CaptchaGate::with_widget_key(4);
        gate.on_verify("P1_token");
        let token = gate.require_token().unwrap();
        assert_eq!(token.as_str(), "P1_token");

        gate.complete_submission();
        assert!(!gate.can_submit());
        assert!(gate.token().is_none());
        assert_eq!(gate.widget_key(), 5);
    }

    #[test]
    fn test_widget_key_wraps_at_max() {
        let mut gate = CaptchaGate::with_widget_key(u64::MAX);
        gate.on_verify("P1_token");

        gate.complete_submission();
        assert_eq!(gate.widget_key(), 0);
        assert!(!gate.can_submit());
    }

    #[test]
    fn test_verification_required_message() {
        assert_eq!(
            VerificationRequired.to_string(),
            "Please complete the verification (hCaptcha)."
        );
    }

    #[test]
    fn test_widget_requires_site_key() {
        assert_eq!(
            CaptchaWidget::from_site_key(None),
            CaptchaWidget::Misconfigured(MissingSiteKey)
        );
        assert!(!CaptchaWidget::from_site_key(Some("  ")).is_enabled());
        assert_eq!(
            CaptchaWidget::from_site_key(Some(" abc ")),
            CaptchaWidget::Enabled {
                site_key: "abc".to_string()
            }
        );
    }
}
