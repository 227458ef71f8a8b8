use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::applications::Application;
use crate::components::modal::ModalShell;
use crate::{mailer, nav};

#[derive(Properties, PartialEq)]
pub struct ApplicationModalProps {
    pub application: Option<Application>,
    pub is_open: bool,
    pub on_close: Callback<()>,
}

#[function_component(ApplicationModal)]
pub fn application_modal(props: &ApplicationModalProps) -> Html {
    let Some(application) = props.application.clone() else {
        return Html::default();
    };

    let start_partnership = {
        let title = application.title;
        Callback::from(move |_| {
            mailer::compose(mailer::GENERAL, &format!("Partnership Inquiry - {title}"));
        })
    };
    let schedule_demo = {
        let title = application.title;
        Callback::from(move |_| {
            mailer::compose(mailer::GENERAL, &format!("Schedule Demo - {title}"));
        })
    };
    let contact_us = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            on_close.emit(());
            Timeout::new(300, || nav::scroll_to_section("contact")).forget();
        })
    };

    html! {
        <ModalShell is_open={props.is_open} on_close={props.on_close.clone()} panel_class="wide">
            <style>{r#"
                .app-overview { margin-bottom: 2rem; }
                .app-overview h3 { font-size: 1.25rem; margin-bottom: 1rem; }
                .app-overview p { color: #d1d5db; font-size: 1.1rem; line-height: 1.7; }
                .app-columns {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    margin-bottom: 2rem;
                }
                @media (max-width: 768px) {
                    .app-columns { grid-template-columns: 1fr; }
                }
                .app-columns h4 {
                    font-size: 1.1rem;
                    margin-bottom: 1rem;
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .core-features { margin-bottom: 2rem; }
                .core-features h4 { font-size: 1.1rem; margin-bottom: 1rem; }
                .core-feature-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                    gap: 1rem;
                }
                .core-feature-grid .glass-card {
                    padding: 1rem;
                    font-size: 0.9rem;
                    color: #d1d5db;
                }
                .stories-panel { padding: 1.5rem; margin-bottom: 2rem; }
                .stories-panel h4 { font-size: 1.1rem; margin-bottom: 1rem; }
                .stories-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                    font-size: 0.9rem;
                }
                @media (max-width: 768px) {
                    .stories-grid { grid-template-columns: 1fr; }
                }
                .stories-grid .who { font-weight: 600; margin-bottom: 0.5rem; }
                .stories-grid .quote { color: #d1d5db; }
            "#}</style>
            <div class="modal-header">
                <div class="modal-header-title">
                    <div
                        class="icon-badge"
                        style={format!("background: linear-gradient(to bottom right, {});", application.gradient)}
                    >
                        <i class={application.icon}></i>
                    </div>
                    <div>
                        <h2 class="gradient-text">{ application.title }</h2>
                        <p class="subtitle">{ application.subtitle }</p>
                    </div>
                </div>
                <button class="modal-close" onclick={props.on_close.reform(|_: MouseEvent| ())}>
                    <i class="fas fa-xmark"></i>
                </button>
            </div>
            <div class="app-overview">
                <h3>{ "Overview" }</h3>
                <p>{ application.overview }</p>
            </div>
            <div class="app-columns">
                <div>
                    <h4>
                        <i class="fas fa-arrow-right" style="color:#60a5fa;"></i>
                        { "Key Use Cases" }
                    </h4>
                    <ul class="check-list">
                        { for application.use_cases.iter().map(|item| html! {
                            <li key={*item}>
                                <i class="fas fa-check"></i>
                                <span>{ *item }</span>
                            </li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h4>
                        <i class="fas fa-star" style="color:#facc15;"></i>
                        { "Key Benefits" }
                    </h4>
                    <ul class="dot-list">
                        { for application.benefits.iter().map(|item| html! {
                            <li key={*item}><span>{ *item }</span></li>
                        }) }
                    </ul>
                </div>
            </div>
            <div class="core-features">
                <h4>{ "Core Features" }</h4>
                <div class="core-feature-grid">
                    { for application.features.iter().map(|item| html! {
                        <div class="glass-card" key={*item}>{ *item }</div>
                    }) }
                </div>
            </div>
            <div class="stories-panel glass-card">
                <h4>{ "Success Stories" }</h4>
                <div class="stories-grid">
                    <div>
                        <div class="who" style="color:#60a5fa;">{ "Clinical Partner" }</div>
                        <div class="quote">
                            { "\"The Omni Digital Twin has transformed our practice. We've seen a \
                               40% reduction in treatment time and significantly improved patient \
                               outcomes.\"" }
                        </div>
                    </div>
                    <div>
                        <div class="who" style="color:#a78bfa;">{ "University Program" }</div>
                        <div class="quote">
                            { "\"Our students now have access to diverse, realistic case studies \
                               that prepare them for real-world practice like never before.\"" }
                        </div>
                    </div>
                </div>
            </div>
            <div class="modal-actions">
                <button class="primary-btn" onclick={start_partnership}>{ "Start Partnership" }</button>
                <button class="ghost-btn" onclick={schedule_demo}>{ "Schedule Demo" }</button>
                <button class="ghost-btn" onclick={contact_us}>{ "Contact Us" }</button>
            </div>
        </ModalShell>
    }
}
