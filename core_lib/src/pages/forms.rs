//! Pages that carry a lead form, plus the account chooser

use super::layout::render_layout;
use super::{escape, Page, PageContext};
use crate::captcha::CaptchaWidget;
use crate::lead::forms::{ConsultationForm, ContactForm, TenderForm};
use crate::lead::models::Plan;
use crate::links::AuthAction;
use serde::Deserialize;

fn input(name: &str, label: &str, value: &str, placeholder: &str) -> String {
    format!(
        r#"<label>{label}<input name="{name}" value="{value}" placeholder="{placeholder}"></label>"#,
        label = escape(label),
        name = name,
        value = escape(value),
        placeholder = escape(placeholder),
    )
}

fn textarea(name: &str, label: &str, value: &str, rows: u8, placeholder: &str) -> String {
    format!(
        r#"<label>{label}<textarea name="{name}" rows="{rows}" placeholder="{placeholder}">{value}</textarea></label>"#,
        label = escape(label),
        name = name,
        rows = rows,
        value = escape(value),
        placeholder = escape(placeholder),
    )
}

/// The widget, or the inline block that replaces it when no site key is set.
/// Its DOM id changes with `widget_key`, so a bumped key remounts it.
fn verification(form_id: &str, widget: &CaptchaWidget, widget_key: u64, helper: &str) -> String {
    let body = match widget {
        CaptchaWidget::Enabled { site_key } => format!(
            r#"<div class="h-captcha" id="{form_id}-captcha-{widget_key}" data-sitekey="{site_key}" data-callback="sadopakCaptchaVerified" data-expired-callback="sadopakCaptchaCleared" data-error-callback="sadopakCaptchaCleared"></div>
  <p class="helper">{helper}</p>"#,
            form_id = form_id,
            widget_key = widget_key,
            site_key = escape(site_key),
            helper = escape(helper),
        ),
        CaptchaWidget::Misconfigured(err) => format!(
            r#"<div class="captcha-config-error" role="alert"><strong>{}</strong><div>Set <code>APP__CAPTCHA__SITE_KEY</code> in the deployment environment.</div></div>"#,
            escape(&err.to_string())
        ),
    };

    format!(
        r#"<fieldset class="verification">
  <legend>Verification</legend>
  {body}
  <input type="hidden" name="widgetKey" value="{widget_key}">
</fieldset>"#,
        body = body,
        widget_key = widget_key,
    )
}

/// Rendered disabled: no page load ever starts with a token.
fn submit_button(label: &str) -> String {
    format!(
        r#"<button type="submit" class="btn-primary" data-captcha-submit disabled>{}</button>"#,
        escape(label)
    )
}

pub fn render_consultation(form: &ConsultationForm, context: &PageContext<'_>) -> String {
    let plans: String = Plan::ALL
        .iter()
        .map(|plan| {
            let details = plan.details();
            let checked = if *plan == form.plan { " checked" } else { "" };
            format!(
                r#"<label class="plan"><input type="radio" name="plan" value="{key}"{checked}> {title} <span class="price">{price}</span> <a href="{checkout}">Pay this plan</a></label>"#,
                key = plan.as_str(),
                checked = checked,
                title = escape(details.title),
                price = escape(details.price),
                checkout = escape(context.links.checkout_url(details.product_id).as_str()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n    ");

    let selected = form.plan.details();

    let body = format!(
        r#"<section class="hero">
  <h1>Book a Consultation</h1>
  <p>Select a plan, share your details, then proceed to secure payment on our WordPress checkout.</p>
</section>
<form id="consultation" method="post" action="{action}">
  <fieldset class="plans">
    <legend>Plan</legend>
    {plans}
  </fieldset>
  {name}
  {business}
  {phone}
  {email}
  {location}
  {message}
  {verification}
  {button}
</form>
<p class="payment-methods">Airtel Money · Bank Transfer · Card</p>"#,
        action = Page::BookConsultation.path(),
        plans = plans,
        name = input("name", "Name", &form.name, "Your full name"),
        business = input("businessName", "Business name", &form.business_name, "Business / organization"),
        phone = input("phone", "Phone", &form.phone, "+260..."),
        email = input("email", "Email", &form.email, "you@example.com"),
        location = input("location", "Location", &form.location, "Town / city"),
        message = textarea("message", "Message (optional)", &form.message, 4, "Tell us what you need..."),
        verification = verification("consultation", context.captcha, form.widget_key, "Required to submit this form."),
        button = submit_button(&format!("Continue with {}", selected.title)),
    );

    render_layout(Page::BookConsultation, context, &body)
}

pub fn render_tender(form: &TenderForm, context: &PageContext<'_>) -> String {
    let body = format!(
        r#"<section class="hero">
  <h1>Start a Project</h1>
  <p>Submit your invitation to tender. We match you to vetted manufacturers and installers, then coordinate until installation is complete.</p>
</section>
<form id="tender" method="post" action="{action}">
  <h2>Submit Invitation to Tender</h2>
  {name}
  {business}
  {phone}
  {email}
  {requirements}
  {verification}
  {button}
</form>"#,
        action = Page::StartProject.path(),
        name = input("name", "Name", &form.name, "Full name"),
        business = input("businessName", "Organization", &form.business_name, "Organization name"),
        phone = input("phone", "Phone", &form.phone, "+260..."),
        email = input("email", "Email", &form.email, "you@example.com"),
        requirements = textarea(
            "requirements",
            "Requirements",
            &form.requirements,
            7,
            "Paste tender scope, sizes, materials, locations, deadlines, etc."
        ),
        verification = verification("tender", context.captcha, form.widget_key, "Required to submit this tender."),
        button = submit_button("Submit Tender"),
    );

    render_layout(Page::StartProject, context, &body)
}

pub fn render_contact(form: &ContactForm, context: &PageContext<'_>) -> String {
    let body = format!(
        r#"<section class="hero">
  <h1>Let's put your direction to work.</h1>
  <p>"Our DIRECTION is Your DEVELOPMENT"</p>
</section>
<form id="contact" method="post" action="{action}">
  {name}
  {business}
  {location}
  {contact}
  {message}
  {verification}
  {button}
</form>
<p><a href="/book-consultation">Book Consultation</a></p>"#,
        action = Page::Contact.path(),
        name = input("name", "Name", &form.name, "Your name"),
        business = input("businessName", "Business name", &form.business_name, "Business name"),
        location = input("location", "Location", &form.location, "Town / city"),
        contact = input("contact", "Phone / WhatsApp", &form.contact, "+260..."),
        message = textarea("message", "Message", &form.message, 4, "How can we help?"),
        verification = verification("contact", context.captcha, form.widget_key, "Required to send this message."),
        button = submit_button("Send Message"),
    );

    render_layout(Page::Contact, context, &body)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountMode {
    #[default]
    SignIn,
    SignUp,
}

/// Account screens live on WordPress; this page only links there.
pub fn render_account(mode: AccountMode, redirect_to: &str, context: &PageContext<'_>) -> String {
    let (heading, google, email_label, email_action, toggle) = match mode {
        AccountMode::SignIn => (
            "Sign In",
            "Continue with Google",
            "Sign in with Email",
            AuthAction::Login,
            r#"Don't have an account? <a href="/account?mode=signup">Sign up</a>"#,
        ),
        AccountMode::SignUp => (
            "Create Account",
            "Sign up with Google",
            "Create Account with Email",
            AuthAction::Register,
            r#"Already have an account? <a href="/account?mode=signin">Sign in</a>"#,
        ),
    };

    let links = context.links;
    let body = format!(
        r#"<section class="account">
  <h1>{heading}</h1>
  <p>Account sign-in, Google login, registration, and password resets are securely handled by our WordPress backend.</p>
  <a class="btn" href="{google_url}">{google}</a>
  <a class="btn-primary" href="{email_url}">{email_label}</a>
  <a href="{lost_url}">Forgot password?</a>
  <a href="{account_url}" target="_blank" rel="noreferrer">Open My Account</a>
  <p>{toggle}</p>
</section>"#,
        heading = heading,
        google_url = escape(links.google_login_url(redirect_to).as_str()),
        google = google,
        email_url = escape(links.auth_url(email_action, redirect_to).as_str()),
        email_label = email_label,
        lost_url = escape(links.lost_password_url(redirect_to).as_str()),
        account_url = escape(links.my_account_url().as_str()),
        toggle = toggle,
    );

    render_layout(Page::Account, context, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::WordPressLinks;
    use crate::pages::Notice;
    use url::Url;

    fn links() -> WordPressLinks {
        WordPressLinks::new(&Url::parse("https://wp.example.org").unwrap())
    }

    #[test]
    fn test_submit_is_disabled_on_render() {
        let links = links();
        let captcha = CaptchaWidget::from_site_key(Some("site-key"));
        let html = render_tender(&TenderForm::default(), &PageContext::new(&links, &captcha));

        assert!(html.contains("data-captcha-submit disabled"));
        assert!(html.contains(r#"data-sitekey="site-key""#));
        assert!(html.contains("js.hcaptcha.com"));
    }

    #[test]
    fn test_missing_site_key_renders_inline_block() {
        let links = links();
        let captcha = CaptchaWidget::from_site_key(None);
        let html = render_contact(&ContactForm::default(), &PageContext::new(&links, &captcha));

        assert!(html.contains("captcha-config-error"));
        assert!(html.contains("Missing hCaptcha site key."));
        assert!(!html.contains("h-captcha\""));
    }

    #[test]
    fn test_widget_id_follows_widget_key() {
        let links = links();
        let captcha = CaptchaWidget::from_site_key(Some("site-key"));
        let form = ContactForm {
            widget_key: 3,
            ..ContactForm::default()
        };
        let html = render_contact(&form, &PageContext::new(&links, &captcha));

        assert!(html.contains(r#"id="contact-captcha-3""#));
        assert!(html.contains(r#"name="widgetKey" value="3""#));
    }

    #[test]
    fn test_values_are_escaped_and_kept() {
        let links = links();
        let captcha = CaptchaWidget::from_site_key(Some("site-key"));
        let form = ConsultationForm {
            name: "<b>Jane</b>".to_string(),
            plan: Plan::Premium,
            ..ConsultationForm::default()
        };
        let context = PageContext::new(&links, &captcha).with_notice(Notice::error("duplicate"));
        let html = render_consultation(&form, &context);

        assert!(html.contains("&lt;b&gt;Jane&lt;/b&gt;"));
        assert!(html.contains(r#"value="premium" checked"#));
        assert!(html.contains("Continue with Premium"));
        assert!(html.contains(r#"role="alert">duplicate</div>"#));
    }

    #[test]
    fn test_account_links_carry_redirect() {
        let links = links();
        let captcha = CaptchaWidget::from_site_key(None);
        let html = render_account(
            AccountMode::SignUp,
            "https://sadopak.example/",
            &PageContext::new(&links, &captcha),
        );

        assert!(html.contains("Create Account"));
        assert!(html.contains(
            "https://wp.example.org/wp-login.php?action=register&amp;redirect_to=https%3A%2F%2Fsadopak.example%2F"
        ));
        assert!(html.contains("https://wp.example.org/my-account/"));
    }
}
