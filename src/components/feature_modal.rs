use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::features::Feature;
use crate::components::modal::ModalShell;
use crate::{mailer, nav};

#[derive(Properties, PartialEq)]
pub struct FeatureModalProps {
    pub feature: Option<Feature>,
    pub is_open: bool,
    pub on_close: Callback<()>,
}

const REAL_WORLD_USES: &[(&str, &str)] = &[
    ("#60a5fa", "Individual therapy enhancement"),
    ("#a78bfa", "Clinical training and education"),
    ("#4ade80", "Personal growth and self-discovery"),
    ("#fb923c", "Family and relationship counseling"),
];

#[function_component(FeatureModal)]
pub fn feature_modal(props: &FeatureModalProps) -> Html {
    // Render nothing until the payload arrives, whatever `is_open` says.
    let Some(feature) = props.feature.clone() else {
        return Html::default();
    };

    let request_demo = {
        let title = feature.title;
        Callback::from(move |_| {
            mailer::compose(mailer::GENERAL, &format!("Feature Demo Request - {title}"));
        })
    };

    let see_applications = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            on_close.emit(());
            // Let the exit animation finish before the page scrolls.
            Timeout::new(300, || nav::scroll_to_section("applications")).forget();
        })
    };

    html! {
        <ModalShell is_open={props.is_open} on_close={props.on_close.clone()}>
            <style>{r#"
                .modal-columns {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }
                @media (max-width: 768px) {
                    .modal-columns { grid-template-columns: 1fr; }
                }
                .modal-columns h3 { font-size: 1.25rem; margin-bottom: 1rem; }
                .modal-columns h4 { font-size: 1.1rem; margin: 1.5rem 0 1rem; }
                .modal-columns h4:first-child { margin-top: 0; }
                .modal-columns .overview { color: #d1d5db; line-height: 1.7; margin-bottom: 1.5rem; }
                .use-case-panel { padding: 1.5rem; margin-top: 1.5rem; }
                .use-case-row {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.9rem;
                    color: #d1d5db;
                    margin-bottom: 0.75rem;
                }
            "#}</style>
            <div class="modal-header">
                <div class="modal-header-title">
                    <div
                        class="icon-badge"
                        style={format!("background: linear-gradient(to bottom right, {});", feature.gradient)}
                    >
                        <i class={feature.icon}></i>
                    </div>
                    <div>
                        <h2 class="gradient-text">{ feature.title }</h2>
                        <p class="subtitle">{ feature.description }</p>
                    </div>
                </div>
                <button class="modal-close" onclick={props.on_close.reform(|_: MouseEvent| ())}>
                    <i class="fas fa-xmark"></i>
                </button>
            </div>
            <div class="modal-columns">
                <div>
                    <h3>{ "Overview" }</h3>
                    <p class="overview">{ feature.overview }</p>
                    <h4>{ "Key Features" }</h4>
                    <ul class="check-list">
                        { for feature.key_features.iter().map(|item| html! {
                            <li key={*item}>
                                <i class="fas fa-check"></i>
                                <span>{ *item }</span>
                            </li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h4>{ "Benefits" }</h4>
                    <ul class="dot-list">
                        { for feature.benefits.iter().map(|item| html! {
                            <li key={*item}><span>{ *item }</span></li>
                        }) }
                    </ul>
                    <div class="use-case-panel glass-card">
                        <h4>{ "Real-World Applications" }</h4>
                        { for REAL_WORLD_USES.iter().map(|&(color, label)| html! {
                            <div class="use-case-row" key={label}>
                                <i class="fas fa-arrow-right" style={format!("color:{color};")}></i>
                                <span>{ label }</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
            <div class="modal-actions">
                <button class="primary-btn" onclick={request_demo}>
                    { "Request Feature Demo" }
                </button>
                <button class="ghost-btn" onclick={see_applications}>
                    { "See Applications" }
                </button>
            </div>
        </ModalShell>
    }
}
