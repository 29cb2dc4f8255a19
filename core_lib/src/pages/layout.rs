//! Shared page chrome: navigation, notice area and footer

use super::{escape, Notice, NoticeLevel, Page, PageContext};

const PHONE: &str = "+260573037125";
const EMAIL: &str = "sadopaksignworks@gmail.com";

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("YouTube", "https://youtube.com/@sadopaksignworks"),
    ("Instagram", "https://www.instagram.com/sadopaksignworks"),
    ("Facebook", "https://www.facebook.com/share/1XUJWaLPCg/"),
];

const NAV_LINKS: [Page; 3] = [Page::Services, Page::Industries, Page::Contact];

/// Keeps every verification-gated submit button in step with the widget.
const CAPTCHA_SCRIPT: &str = r#"<script src="https://js.hcaptcha.com/1/api.js" async defer></script>
<script>
function sadopakSetSubmit(enabled) {
  document.querySelectorAll('[data-captcha-submit]').forEach(function (b) { b.disabled = !enabled; });
}
function sadopakCaptchaVerified(token) { sadopakSetSubmit(!!token); }
function sadopakCaptchaCleared() { sadopakSetSubmit(false); }
document.addEventListener('submit', function (e) {
  var button = e.target.querySelector('[data-captcha-submit]');
  if (button) { button.disabled = true; button.textContent = 'Submitting…'; }
});
</script>"#;

pub fn render_layout(page: Page, context: &PageContext<'_>, body: &str) -> String {
    let scripts = if context.captcha.is_enabled() {
        CAPTCHA_SCRIPT
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | SADOPAK SIGNWORKS</title>
</head>
<body>
{nav}
{notice}
<main>
{body}
</main>
{footer}
{scripts}
</body>
</html>
"#,
        title = escape(page.title()),
        nav = render_nav(page),
        notice = context.notice.as_ref().map(render_notice).unwrap_or_default(),
        body = body,
        footer = render_footer(),
        scripts = scripts,
    )
}

fn render_nav(current: Page) -> String {
    let links: String = NAV_LINKS
        .iter()
        .map(|page| {
            let aria = if *page == current {
                r#" aria-current="page""#
            } else {
                ""
            };
            format!(
                r#"<a href="{}"{}>{}</a>"#,
                page.path(),
                aria,
                escape(page.title())
            )
        })
        .collect::<Vec<_>>()
        .join("\n    ");

    format!(
        r#"<nav class="site-nav">
  <a class="brand" href="/">SADOPAK SIGNWORKS</a>
  <div class="nav-links">
    {links}
    <a href="/account?mode=signin">Sign In</a>
    <a href="/account?mode=signup">Sign Up</a>
    <a class="btn-primary" href="/book-consultation">Book Consultation</a>
  </div>
</nav>"#,
        links = links
    )
}

pub fn render_notice(notice: &Notice) -> String {
    let (class, role) = match notice.level {
        NoticeLevel::Success => ("notice notice-success", "status"),
        NoticeLevel::Error => ("notice notice-error", "alert"),
    };
    format!(
        r#"<div class="{}" role="{}">{}</div>"#,
        class,
        role,
        escape(&notice.message)
    )
}

fn render_footer() -> String {
    let social: String = SOCIAL_LINKS
        .iter()
        .map(|(name, href)| format!(r#"<a href="{}" target="_blank" rel="noreferrer">{}</a>"#, href, name))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        r#"<footer class="site-footer">
  <p>SADOPAK SIGNWORKS · Signage Consultancy &amp; Brokerage</p>
  <p><a href="tel:{phone}">{phone}</a> · <a href="mailto:{email}">{email}</a></p>
  <p>{social}</p>
  <p><a href="/services">Services</a> · <a href="/industries">Industries</a> · <a href="/contact">Contact</a></p>
</footer>"#,
        phone = PHONE,
        email = EMAIL,
        social = social
    )
}
