use yew::prelude::*;

use crate::components::demo_modal::DemoModal;
use crate::components::request_demo_modal::RequestDemoModal;
use crate::{mailer, nav};

const STATS: &[(&str, &str, &str)] = &[
    ("fas fa-user", "Personal Growth", "100%"),
    ("fas fa-users", "Clinical Accuracy", "95%"),
    ("fas fa-bullseye", "Predictive Success", "89%"),
    ("fas fa-arrow-trend-up", "User Satisfaction", "97%"),
];

#[function_component(Hero)]
pub fn hero() -> Html {
    let demo_form_open = use_state(|| false);
    let demo_video_open = use_state(|| false);

    let open_demo_form = {
        let demo_form_open = demo_form_open.clone();
        Callback::from(move |_| demo_form_open.set(true))
    };
    let close_demo_form = {
        let demo_form_open = demo_form_open.clone();
        use_callback(move |_: (), _| demo_form_open.set(false), ())
    };
    let open_demo_video = {
        let demo_video_open = demo_video_open.clone();
        Callback::from(move |_| demo_video_open.set(true))
    };
    let close_demo_video = {
        let demo_video_open = demo_video_open.clone();
        use_callback(move |_: (), _| demo_video_open.set(false), ())
    };

    let experience_cta = Callback::from(|_| {
        mailer::compose(
            mailer::GENERAL,
            "Experience Your Twin - Early Access Request",
        );
    });

    html! {
        <section id="overview" class="hero">
            <style>{r#"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding-top: 8rem;
                }
                .hero h1 {
                    font-size: clamp(3rem, 8vw, 4.5rem);
                    margin-bottom: 1.5rem;
                }
                .hero-tagline {
                    font-size: 1.5rem;
                    color: #d1d5db;
                    margin-bottom: 2rem;
                }
                .hero-lede {
                    font-size: 1.1rem;
                    color: #9ca3af;
                    max-width: 56rem;
                    margin: 0 auto 3rem;
                    line-height: 1.7;
                }
                .hero-ctas {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                    margin-bottom: 4rem;
                }
                .hero-stats {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(10rem, 1fr));
                    gap: 1.5rem;
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .hero-stat {
                    padding: 1.5rem;
                    text-align: center;
                    cursor: pointer;
                }
                .hero-stat i { font-size: 1.8rem; margin-bottom: 0.5rem; color: #60a5fa; }
                .hero-stat .value { font-size: 1.5rem; font-weight: 700; }
                .hero-stat .label { font-size: 0.85rem; color: #9ca3af; }
            "#}</style>
            <div class="section-inner">
                <h1><span class="gradient-text">{ "Omni Digital Twin™" }</span></h1>
                <p class="hero-tagline">{ "One Self. Infinite Perspectives." }</p>
                <p class="hero-lede">
                    { "Introducing a transformative leap in mental health technology: an AI-powered \
                       emotional replica that evolves with each user, reflecting their mental and \
                       emotional landscape in real time. Built on comprehensive data analysis, each \
                       twin becomes a deeply personalized simulation of the user's inner world." }
                </p>
                <div class="hero-ctas">
                    <button class="primary-btn" onclick={experience_cta}>
                        { "Experience Your Twin" }
                    </button>
                    <button class="ghost-btn" onclick={open_demo_video}>
                        <i class="fas fa-play" style="margin-right:0.5rem;"></i>
                        { "Watch Demo" }
                    </button>
                    <button class="ghost-btn" onclick={open_demo_form}>
                        <i class="fas fa-calendar" style="margin-right:0.5rem;"></i>
                        { "Request Demo" }
                    </button>
                </div>
                <div class="hero-stats">
                    { for STATS.iter().map(|(icon, label, value)| html! {
                        <div
                            key={*label}
                            class="hero-stat glass-card"
                            onclick={Callback::from(|_| nav::scroll_to_section("features"))}
                        >
                            <i class={*icon}></i>
                            <div class="value">{ *value }</div>
                            <div class="label">{ *label }</div>
                        </div>
                    }) }
                </div>
            </div>
            <DemoModal is_open={*demo_video_open} on_close={close_demo_video} />
            <RequestDemoModal is_open={*demo_form_open} on_close={close_demo_form} />
        </section>
    }
}
