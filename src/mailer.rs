//! Outbound mail hand-off.
//!
//! The site has no backend: every call-to-action composes a message in the
//! visitor's own mail client via a `mailto:` URL. The hand-off is
//! fire-and-forget — nothing observes whether the mail client actually
//! opened, and no failure is surfaced to the visitor.

use gloo_console::log;
use web_sys::js_sys::encode_uri_component;

/// General inquiries and most call-to-action buttons.
pub const GENERAL: &str = "hello@omnisolus.com";
/// Structured demo-request form submissions.
pub const DEMO_REQUESTS: &str = "omni@omnisolus.com";
/// Pricing questions.
pub const SALES: &str = "sales@omnisolus.com";
/// Custom enterprise solutions.
pub const ENTERPRISE: &str = "enterprise@omnisolus.com";

/// `mailto:` URL with a subject line only.
pub fn mailto_url(to: &str, subject: &str) -> String {
    format!("mailto:{to}?subject={subject}")
}

/// Opens the visitor's mail client with a pre-filled subject.
pub fn compose(to: &str, subject: &str) {
    open(&mailto_url(to, subject));
}

/// Opens the visitor's mail client with a pre-filled subject and plain-text
/// body. Only the body is URI-encoded; subjects stay readable in the URL the
/// same way the rest of the site builds them.
pub fn compose_with_body(to: &str, subject: &str, body: &str) {
    let encoded: String = encode_uri_component(body).into();
    open(&format!("{}&body={}", mailto_url(to, subject), encoded));
}

fn open(url: &str) {
    log!(format!("mail hand-off: {url}"));
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_url_targets_the_fixed_address() {
        assert_eq!(
            mailto_url(GENERAL, "Get Started - Omni Digital Twin"),
            "mailto:hello@omnisolus.com?subject=Get Started - Omni Digital Twin"
        );
    }
}
