//! Server-rendered HTML for the public site

pub mod content;
pub mod forms;
pub mod layout;

use crate::captcha::CaptchaWidget;
use crate::links::WordPressLinks;
use serde::Serialize;

pub use content::render_info_page;
pub use forms::{render_account, render_consultation, render_contact, render_tender, AccountMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A one-off message shown at the top of the page after a form post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Services,
    Industries,
    HowItWorks,
    Impact,
    Contact,
    BookConsultation,
    StartProject,
    Account,
}

impl Page {
    pub const ALL: [Page; 9] = [
        Page::Home,
        Page::Services,
        Page::Industries,
        Page::HowItWorks,
        Page::Impact,
        Page::Contact,
        Page::BookConsultation,
        Page::StartProject,
        Page::Account,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Services => "/services",
            Page::Industries => "/industries",
            Page::HowItWorks => "/how-it-works",
            Page::Impact => "/impact",
            Page::Contact => "/contact",
            Page::BookConsultation => "/book-consultation",
            Page::StartProject => "/start-project",
            Page::Account => "/account",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Signage Consultancy & Brokerage",
            Page::Services => "Services",
            Page::Industries => "Industries",
            Page::HowItWorks => "See How It Works",
            Page::Impact => "Explore the Impact",
            Page::Contact => "Contact",
            Page::BookConsultation => "Book a Consultation",
            Page::StartProject => "Start a Project",
            Page::Account => "Account",
        }
    }
}

/// Everything a page needs besides its own data.
#[derive(Debug, Clone)]
pub struct PageContext<'a> {
    pub links: &'a WordPressLinks,
    pub captcha: &'a CaptchaWidget,
    pub notice: Option<Notice>,
}

impl<'a> PageContext<'a> {
    pub fn new(links: &'a WordPressLinks, captcha: &'a CaptchaWidget) -> Self {
        Self {
            links,
            captcha,
            notice: None,
        }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }
}

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
