use yew::prelude::*;

use crate::components::application_modal::ApplicationModal;
use crate::mailer;

/// One entry in the applications grid, plus the detail copy its dialog shows.
#[derive(Clone, PartialEq)]
pub struct Application {
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub gradient: &'static str,
    pub features: &'static [&'static str],
    pub overview: &'static str,
    pub use_cases: &'static [&'static str],
    pub benefits: &'static [&'static str],
}

pub static APPLICATIONS: &[Application] = &[
    Application {
        icon: "fas fa-wave-square",
        title: "Clinical Applications",
        subtitle: "Revolutionary tools for mental health providers",
        gradient: "#3b82f6, #06b6d4",
        features: &[
            "Therapeutic Forecasting - Run simulated therapeutic paths",
            "Enhanced Intake & Continuity - Concise emotional summaries",
            "Real-Time Monitoring - Flag emotional volatility between sessions",
            "Family Therapy Support - Model communication across family members",
        ],
        overview: "Transform clinical practice with AI-powered insights that enhance therapeutic \
                   outcomes and reduce treatment time, giving mental health professionals \
                   unprecedented tools for understanding and treating their patients.",
        use_cases: &[
            "Pre-session emotional state analysis for better preparation",
            "Treatment pathway optimization with predictive modeling",
            "Risk assessment and early intervention protocols",
            "Crisis intervention with real-time monitoring",
            "Medication adherence tracking and optimization",
        ],
        benefits: &[
            "40% reduction in treatment time through targeted interventions",
            "95% accuracy in emotional state prediction",
            "Improved patient engagement and therapeutic alliance",
            "Reduced clinician burnout with AI-assisted insights",
            "Better outcomes measurement and progress tracking",
        ],
    },
    Application {
        icon: "fas fa-book",
        title: "Educational & Collegiate Use",
        subtitle: "Living case studies for higher education",
        gradient: "#a855f7, #6366f1",
        features: &[
            "AI-Powered Training Models - Practice counseling without risk",
            "Longitudinal Case Studies - Track twin evolution over time",
            "Diversity of Minds at Scale - Explore varied lived experiences",
            "Virtual Practicum Labs - Supervised telehealth twin clinics",
        ],
        overview: "Revolutionize mental health education with realistic, risk-free training \
                   environments that prepare students for real-world practice through unlimited \
                   access to diverse case studies and scenarios.",
        use_cases: &[
            "Clinical skills training with immediate feedback",
            "Diversity and inclusion education with authentic experiences",
            "Ethical decision-making practice in complex scenarios",
            "Supervised virtual practicum with real-time guidance",
            "Competency assessment and skill development tracking",
        ],
        benefits: &[
            "Safe learning environment without patient risk",
            "Unlimited practice opportunities for skill development",
            "Diverse case exposure for comprehensive training",
            "Standardized training experiences across institutions",
            "Cost-effective education with scalable resources",
        ],
    },
    Application {
        icon: "fas fa-globe",
        title: "Public Integration",
        subtitle: "Personal growth for everyone",
        gradient: "#22c55e, #10b981",
        features: &[
            "Personal Mirror - Acts as a guide and motivator",
            "Predictive Intelligence - Empowers better self-understanding",
            "Professional Support - Seamless integration with clinicians",
            "Unified Care - Hyper-personalized healing pathways",
        ],
        overview: "Democratize mental health support with personalized AI companions that provide \
                   24/7 emotional guidance and growth support, making mental wellness accessible \
                   to everyone regardless of circumstances.",
        use_cases: &[
            "Daily emotional check-ins with personalized insights",
            "Personal growth tracking with milestone celebrations",
            "Crisis intervention support with immediate response",
            "Relationship coaching and communication improvement",
            "Stress management and mindfulness training",
        ],
        benefits: &[
            "Accessible mental health support for all populations",
            "Continuous self-improvement with AI guidance",
            "Reduced stigma around therapy and mental health",
            "Proactive mental wellness and prevention",
            "Cost-effective support for underserved communities",
        ],
    },
];

const METRICS: &[(&str, &str, &str, &str)] = &[
    ("fas fa-users", "10,000+", "Active Users", "+25% this month"),
    ("fas fa-bullseye", "95%", "Clinical Accuracy", "Industry leading"),
    ("fas fa-arrow-trend-up", "78%", "Faster Diagnosis", "vs traditional methods"),
    ("fas fa-wave-square", "89%", "Treatment Success", "Patient satisfaction"),
];

#[function_component(Applications)]
pub fn applications() -> Html {
    let selected = use_state(|| None::<Application>);

    let on_close = {
        let selected = selected.clone();
        use_callback(move |_: (), _| selected.set(None), ())
    };

    let join_cta =
        Callback::from(|_| mailer::compose(mailer::GENERAL, "Join the Future of Mental Health"));

    html! {
        <section id="applications">
            <style>{r#"
                .application-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
                    gap: 2rem;
                    margin-bottom: 4rem;
                }
                .application-card { padding: 2rem; cursor: pointer; }
                .application-card h3 { font-size: 1.5rem; margin-bottom: 0.5rem; }
                .application-card .subtitle { color: #9ca3af; margin-bottom: 1.5rem; }
                .application-card .dot-list { margin-bottom: 1.5rem; font-size: 0.9rem; }
                .metrics-panel { padding: 3rem; }
                .metrics-panel h3 { font-size: 1.9rem; text-align: center; margin-bottom: 2rem; }
                .metrics-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
                    gap: 2rem;
                    text-align: center;
                }
                .metric-tile { padding: 1.5rem; border-radius: 0.75rem; cursor: pointer; }
                .metric-tile:hover { background: rgba(255, 255, 255, 0.05); }
                .metric-tile i { font-size: 2.2rem; margin-bottom: 1rem; color: #60a5fa; }
                .metric-tile .value { font-size: 1.9rem; font-weight: 700; }
                .metric-tile .label { color: #9ca3af; margin-bottom: 0.5rem; }
                .metric-tile .trend { font-size: 0.75rem; color: #60a5fa; }
                .future-vision { margin-top: 4rem; text-align: center; }
                .future-vision h3 { font-size: 1.9rem; margin-bottom: 1.5rem; }
                .future-vision p {
                    font-size: 1.25rem;
                    color: #d1d5db;
                    max-width: 56rem;
                    margin: 0 auto 2rem;
                    line-height: 1.7;
                }
            "#}</style>
            <div class="section-inner">
                <div class="section-header">
                    <h2 class="gradient-text">{ "Applications" }</h2>
                    <p>
                        { "From personal growth to clinical practice and educational excellence, \
                           the Omni Digital Twin transforms how we understand and heal the human \
                           mind." }
                    </p>
                </div>
                <div class="application-grid">
                    { for APPLICATIONS.iter().map(|application| {
                        let selected = selected.clone();
                        let item = application.clone();
                        html! {
                            <div
                                key={application.title}
                                class="application-card perspective-card"
                                onclick={Callback::from(move |_| selected.set(Some(item.clone())))}
                            >
                                <div
                                    class="icon-badge"
                                    style={format!("background: linear-gradient(to bottom right, {});", application.gradient)}
                                >
                                    <i class={application.icon}></i>
                                </div>
                                <h3>{ application.title }</h3>
                                <p class="subtitle">{ application.subtitle }</p>
                                <ul class="dot-list">
                                    { for application.features.iter().map(|item| html! {
                                        <li key={*item}><span>{ *item }</span></li>
                                    }) }
                                </ul>
                                <div class="learn-more">{ "Explore in detail →" }</div>
                            </div>
                        }
                    }) }
                </div>
                <div class="metrics-panel glass-card">
                    <h3 class="gradient-text">{ "Transformative Impact" }</h3>
                    <div class="metrics-grid">
                        { for METRICS.iter().map(|&(icon, value, label, trend)| html! {
                            <div
                                key={label}
                                class="metric-tile"
                                onclick={Callback::from(move |_| {
                                    mailer::compose(mailer::GENERAL, &format!("Impact Metrics - {label}"));
                                })}
                            >
                                <i class={icon}></i>
                                <div class="value">{ value }</div>
                                <div class="label">{ label }</div>
                                <div class="trend">{ trend }</div>
                            </div>
                        }) }
                    </div>
                </div>
                <div class="future-vision">
                    <h3 class="gradient-text">{ "The Future of Mental Health" }</h3>
                    <p>
                        { "In a world of fragmented health systems and generalized care, the Omni \
                           Digital Twin offers a unified, hyper-personalized core from which \
                           healing can be understood, modeled, and shared. With one self as the \
                           source — " }
                        <strong class="gradient-text">
                            { "Omni Solus creates infinite perspectives to heal" }
                        </strong>
                        { "." }
                    </p>
                    <button class="primary-btn" onclick={join_cta}>{ "Join the Revolution" }</button>
                </div>
            </div>
            <ApplicationModal
                application={(*selected).clone()}
                is_open={selected.is_some()}
                on_close={on_close}
            />
        </section>
    }
}
