//! Lead records sent to the WordPress intake endpoint

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadType {
    Consultation,
    Tender,
    Contact,
}

impl LeadType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadType::Consultation => "consultation",
            LeadType::Tender => "tender",
            LeadType::Contact => "contact",
        }
    }
}

impl fmt::Display for LeadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Consultation service tiers. Each one is sold through a fixed WooCommerce product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Basic,
    #[default]
    Standard,
    Premium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanDetails {
    pub title: &'static str,
    pub price: &'static str,
    pub product_id: u32,
    pub bullets: &'static [&'static str],
}

const BASIC: PlanDetails = PlanDetails {
    title: "Basic",
    price: "K10,500",
    product_id: 208,
    bullets: &[
        "Business & brand vision analysis",
        "Assessment of operational workflow",
        "Customer movement evaluation",
        "Identify signage gaps & priorities",
        "Written summary report",
    ],
};

const STANDARD: PlanDetails = PlanDetails {
    title: "Standard",
    price: "K14,999",
    product_id: 210,
    bullets: &[
        "Everything in Basic",
        "Detailed signage breakdown & evaluation",
        "Sign size, material, color & font recommendations",
        "Messaging accuracy review",
        "Placement strategy & quantity determination",
        "Professional consultation report",
    ],
};

const PREMIUM: PlanDetails = PlanDetails {
    title: "Premium",
    price: "K20,999",
    product_id: 212,
    bullets: &[
        "Everything in Standard",
        "Invitation-to-tender guidance",
        "Manufacturer & installer sourcing",
        "Project coordination support",
        "Structured communication between parties",
        "Oversight during implementation phase",
    ],
};

impl Plan {
    pub const ALL: [Plan; 3] = [Plan::Basic, Plan::Standard, Plan::Premium];

    pub fn details(&self) -> &'static PlanDetails {
        match self {
            Plan::Basic => &BASIC,
            Plan::Standard => &STANDARD,
            Plan::Premium => &PREMIUM,
        }
    }

    pub fn product_id(&self) -> u32 {
        self.details().product_id
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Basic => "basic",
            Plan::Standard => "standard",
            Plan::Premium => "premium",
        }
    }

    pub fn from_key(key: &str) -> Option<Plan> {
        Plan::ALL.into_iter().find(|plan| plan.as_str() == key)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("verification token is empty")]
pub struct EmptyCaptchaToken;

/// An hCaptcha response token. Never empty.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CaptchaToken(String);

impl CaptchaToken {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, EmptyCaptchaToken> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(EmptyCaptchaToken);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for CaptchaToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        CaptchaToken::new(raw).map_err(serde::de::Error::custom)
    }
}

// Tokens are bearer credentials for one submission; keep them out of logs.
impl fmt::Debug for CaptchaToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CaptchaToken(..)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    #[serde(rename = "type")]
    pub lead_type: LeadType,
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
    pub hcaptcha_token: CaptchaToken,
}

impl LeadPayload {
    pub fn new(
        lead_type: LeadType,
        name: impl Into<String>,
        phone: impl Into<String>,
        hcaptcha_token: CaptchaToken,
    ) -> Self {
        Self {
            lead_type,
            name: name.into(),
            phone: phone.into(),
            email: None,
            business_name: None,
            location: None,
            message: None,
            plan: None,
            hcaptcha_token,
        }
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = non_empty(email);
        self
    }

    pub fn with_business_name(mut self, business_name: &str) -> Self {
        self.business_name = non_empty(business_name);
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = non_empty(location);
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = non_empty(message);
        self
    }

    pub fn with_plan(mut self, plan: Plan) -> Self {
        self.plan = Some(plan);
        self
    }
}

/// Form inputs arrive as strings; a blank one means the visitor left it out.
pub(crate) fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
