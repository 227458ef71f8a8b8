use yew::prelude::*;

use crate::{mailer, nav};

const NAV_ITEMS: &[(&str, &str)] = &[
    ("Overview", "overview"),
    ("Features", "features"),
    ("Applications", "applications"),
    ("Testimonials", "testimonials"),
    ("Compare", "comparison"),
    ("Pricing", "pricing"),
    ("Contact", "contact"),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);

    let scroll_to = {
        let menu_open = menu_open.clone();
        Callback::from(move |anchor: &'static str| {
            if anchor == "overview" {
                nav::scroll_to_top();
            } else {
                nav::scroll_to_section(anchor);
            }
            menu_open.set(false);
        })
    };

    let get_started =
        Callback::from(|_| mailer::compose(mailer::GENERAL, "Get Started - Omni Digital Twin"));

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let nav_buttons = |class: &'static str| -> Html {
        NAV_ITEMS
            .iter()
            .map(|(name, anchor)| {
                let scroll_to = scroll_to.clone();
                html! {
                    <button
                        key={*name}
                        class={class}
                        onclick={Callback::from(move |_| scroll_to.emit(anchor))}
                    >
                        { *name }
                    </button>
                }
            })
            .collect()
    };

    html! {
        <nav class="navbar glass-card">
            <style>{r#"
                .navbar {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 40;
                    border-radius: 0;
                    border-left: none;
                    border-right: none;
                    border-top: none;
                }
                .navbar-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .navbar-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    cursor: pointer;
                }
                .navbar-logo {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 0.75rem;
                    background: linear-gradient(to bottom right, #3b82f6, #9333ea);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                }
                .navbar-brand h1 { font-size: 1.25rem; }
                .navbar-brand p { font-size: 0.7rem; color: #9ca3af; }
                .navbar-links {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    background: none;
                    border: none;
                    color: #d1d5db;
                    font-size: 0.9rem;
                    cursor: pointer;
                }
                .nav-link:hover { color: #fff; }
                .nav-cta {
                    background: linear-gradient(to right, #3b82f6, #9333ea);
                    border: none;
                    border-radius: 9999px;
                    color: #fff;
                    font-weight: 500;
                    padding: 0.5rem 1.5rem;
                    cursor: pointer;
                }
                .navbar-burger {
                    display: none;
                    background: none;
                    border: none;
                    color: #d1d5db;
                    font-size: 1.4rem;
                    cursor: pointer;
                }
                .navbar-mobile {
                    display: none;
                    flex-direction: column;
                    gap: 0.5rem;
                    padding: 0.5rem 1.5rem 1rem;
                }
                .navbar-mobile .nav-link {
                    text-align: left;
                    padding: 0.5rem 0;
                    font-size: 1rem;
                }
                @media (max-width: 768px) {
                    .navbar-links { display: none; }
                    .navbar-burger { display: block; }
                    .navbar-mobile { display: flex; }
                }
            "#}</style>
            <div class="navbar-inner">
                <div class="navbar-brand" onclick={Callback::from(|_| nav::scroll_to_top())}>
                    <div class="navbar-logo"><i class="fas fa-bolt"></i></div>
                    <div>
                        <h1 class="gradient-text">{ "Omni Digital Twin™" }</h1>
                        <p>{ "One Self. Infinite Perspectives." }</p>
                    </div>
                </div>
                <div class="navbar-links">
                    { nav_buttons("nav-link") }
                    <button class="nav-cta" onclick={get_started.clone()}>{ "Get Started" }</button>
                </div>
                <button class="navbar-burger" onclick={toggle_menu}>
                    <i class={if *menu_open { "fas fa-xmark" } else { "fas fa-bars" }}></i>
                </button>
            </div>
            if *menu_open {
                <div class="navbar-mobile">
                    { nav_buttons("nav-link") }
                    <button class="nav-cta" onclick={get_started}>{ "Get Started" }</button>
                </div>
            }
        </nav>
    }
}
