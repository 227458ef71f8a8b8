use yew::prelude::*;

use crate::{mailer, nav};

const SOCIAL_LINKS: &[(&str, &str, &str)] = &[
    ("LinkedIn", "fab fa-linkedin", "https://linkedin.com/company/omnisolus"),
    ("Twitter", "fab fa-twitter", "https://twitter.com/omnisolus"),
    ("GitHub", "fab fa-github", "https://github.com/omnisolus"),
];

const LEGAL_LINKS: &[(&str, &str)] = &[
    ("Privacy Policy", "Privacy Policy Request"),
    ("Terms of Service", "Terms of Service Request"),
    ("Cookie Policy", "Cookie Policy Request"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let mail_link = |subject: &'static str| {
        Callback::from(move |_: MouseEvent| mailer::compose(mailer::GENERAL, subject))
    };

    html! {
        <footer id="contact" class="site-footer">
            <style>{r#"
                .site-footer {
                    border-top: 1px solid #374151;
                    padding: 4rem 1.5rem 2rem;
                    margin-top: 4rem;
                }
                .footer-grid {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr;
                    gap: 3rem;
                }
                @media (max-width: 768px) {
                    .footer-grid { grid-template-columns: 1fr; }
                }
                .footer-brand .logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                }
                .footer-brand .logo i { font-size: 1.5rem; color: #60a5fa; }
                .footer-brand .logo span { font-size: 1.25rem; font-weight: 700; }
                .footer-brand .tagline { color: #9ca3af; font-style: italic; margin-bottom: 1rem; }
                .footer-brand .blurb { color: #9ca3af; line-height: 1.7; max-width: 28rem; }
                .footer-col h3 { font-size: 1rem; margin-bottom: 1rem; }
                .footer-col button,
                .footer-col a {
                    display: block;
                    background: none;
                    border: none;
                    padding: 0;
                    margin-bottom: 0.75rem;
                    color: #9ca3af;
                    text-decoration: none;
                    font-size: 0.95rem;
                    cursor: pointer;
                    text-align: left;
                }
                .footer-col button:hover,
                .footer-col a:hover { color: #fff; }
                .contact-row {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: #9ca3af;
                    margin-bottom: 0.75rem;
                    font-size: 0.95rem;
                }
                .contact-row i { color: #60a5fa; width: 1.25rem; }
                .contact-row a { display: inline; margin: 0; }
                .footer-bottom {
                    max-width: 72rem;
                    margin: 3rem auto 0;
                    padding-top: 2rem;
                    border-top: 1px solid #374151;
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .footer-bottom .copyright { color: #6b7280; font-size: 0.9rem; }
                .footer-social { display: flex; gap: 1rem; }
                .footer-social a { color: #9ca3af; font-size: 1.25rem; }
                .footer-social a:hover { color: #fff; }
                .footer-legal { display: flex; gap: 1.5rem; }
                .footer-legal button {
                    background: none;
                    border: none;
                    padding: 0;
                    color: #6b7280;
                    font-size: 0.85rem;
                    cursor: pointer;
                }
                .footer-legal button:hover { color: #fff; }
            "#}</style>
            <div class="footer-grid">
                <div class="footer-brand">
                    <div class="logo">
                        <i class="fas fa-bolt"></i>
                        <span class="gradient-text">{ "Omni Solus" }</span>
                    </div>
                    <p class="tagline">{ "One Self. Infinite Perspectives." }</p>
                    <p class="blurb">
                        { "Transforming mental health care through AI-powered digital twins that \
                           understand, predict, and evolve with each user's emotional landscape." }
                    </p>
                </div>
                <div class="footer-col">
                    <h3>{ "Quick Links" }</h3>
                    <button onclick={Callback::from(|_| nav::scroll_to_top())}>{ "Overview" }</button>
                    <button onclick={Callback::from(|_| nav::scroll_to_section("features"))}>
                        { "Features" }
                    </button>
                    <button onclick={Callback::from(|_| nav::scroll_to_section("applications"))}>
                        { "Applications" }
                    </button>
                    <button onclick={mail_link("Pricing Information Request")}>{ "Pricing" }</button>
                    <button onclick={mail_link("Documentation Request")}>{ "Documentation" }</button>
                </div>
                <div class="footer-col">
                    <h3>{ "Contact" }</h3>
                    <div class="contact-row">
                        <i class="fas fa-envelope"></i>
                        <a href={format!("mailto:{}", mailer::GENERAL)}>{ mailer::GENERAL }</a>
                    </div>
                    <div class="contact-row">
                        <i class="fas fa-phone"></i>
                        <a href="tel:+15551234567">{ "+1 (555) 123-4567" }</a>
                    </div>
                    <div class="contact-row">
                        <i class="fas fa-location-dot"></i>
                        <span>{ "San Francisco, CA" }</span>
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <span class="copyright">{ "© 2024 Omni Solus. All rights reserved." }</span>
                <div class="footer-social">
                    { for SOCIAL_LINKS.iter().map(|&(name, icon, url)| html! {
                        <a key={name} href={url} target="_blank" rel="noopener" title={name}>
                            <i class={icon}></i>
                        </a>
                    }) }
                </div>
                <div class="footer-legal">
                    { for LEGAL_LINKS.iter().map(|&(label, subject)| html! {
                        <button key={label} onclick={mail_link(subject)}>{ label }</button>
                    }) }
                </div>
            </div>
        </footer>
    }
}
