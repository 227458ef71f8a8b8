use yew::prelude::*;

use crate::components::feature_modal::FeatureModal;
use crate::mailer;

/// One entry in the feature grid, plus the detail copy its dialog shows.
#[derive(Clone, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub gradient: &'static str,
    pub overview: &'static str,
    pub key_features: &'static [&'static str],
    pub benefits: &'static [&'static str],
}

pub static FEATURES: &[Feature] = &[
    Feature {
        icon: "fas fa-heart",
        title: "Personalized Emotional Replica",
        description: "Each Digital Twin is a living model, continuously updated with data from \
                      across the Omni Solus ecosystem, reflecting your evolving psychological \
                      state and emotional tone.",
        gradient: "#ec4899, #f43f5e",
        overview: "Your Digital Twin is built from comprehensive data analysis including \
                   journaling patterns, emotional tone analysis, voice inputs, therapy session \
                   notes, and behavioral patterns. Advanced machine learning creates a highly \
                   accurate psychological profile that evolves in real time.",
        key_features: &[
            "Real-time emotional state modeling with 99.7% accuracy",
            "Continuous learning from user interactions and feedback",
            "Multi-modal data integration (text, voice, behavioral patterns)",
            "Personalized psychological profiling with privacy protection",
            "Integration with wearable devices for physiological data",
        ],
        benefits: &[
            "Deeper self-understanding through objective analysis",
            "Improved emotional awareness and regulation",
            "Better therapeutic outcomes with personalized insights",
            "Reduced time to breakthrough moments in therapy",
            "Increased emotional intelligence and self-compassion",
        ],
    },
    Feature {
        icon: "fas fa-arrow-trend-up",
        title: "Predictive Therapy Simulation",
        description: "Clinicians can run simulated interventions on your twin, testing different \
                      therapeutic approaches and medication combinations to forecast optimal \
                      outcomes.",
        gradient: "#3b82f6, #06b6d4",
        overview: "Advanced AI modeling lets therapists test treatment approaches in a safe, \
                   simulated environment before implementing them in real sessions, reducing \
                   trial-and-error in mental health treatment.",
        key_features: &[
            "Multiple therapy modality testing (CBT, DBT, EMDR, etc.)",
            "Medication interaction simulation with side effect prediction",
            "Treatment outcome prediction with confidence intervals",
            "Risk assessment modeling for various interventions",
            "Personalized treatment pathway optimization",
        ],
        benefits: &[
            "Reduced trial-and-error in treatment selection",
            "Faster path to effective therapy with measurable outcomes",
            "Minimized treatment risks and adverse reactions",
            "Improved clinical decision-making with data support",
            "Cost-effective treatment planning and resource allocation",
        ],
    },
    Feature {
        icon: "fas fa-eye",
        title: "Perspective Shifting Engine",
        description: "Your twin communicates from multiple lenses - from your inner narrative to \
                      clinical perspectives, bridging gaps in understanding and perception.",
        gradient: "#a855f7, #6366f1",
        overview: "The same twin can speak from multiple perspectives, helping users understand \
                   themselves from different viewpoints and improving communication with others \
                   through empathy building and perspective-taking.",
        key_features: &[
            "Multi-perspective communication (self, clinical, family views)",
            "Inner dialogue simulation with emotional intelligence",
            "Clinical lens translation for professional insights",
            "Cultural and contextual perspective adaptation",
            "Real-time perspective switching during conversations",
        ],
        benefits: &[
            "Enhanced self-awareness through multiple viewpoints",
            "Better family communication and understanding",
            "Improved therapeutic alliance with clinicians",
            "Increased empathy and emotional intelligence",
            "Better conflict resolution skills development",
        ],
    },
    Feature {
        icon: "fas fa-clock",
        title: "Future Self Interaction",
        description: "Engage with a projected version of yourself based on your current healing \
                      trajectory, providing hope, motivation, and behavioral feedback.",
        gradient: "#22c55e, #10b981",
        overview: "Monthly preview sessions with your projected future self offer guidance, \
                   motivation, and insights from a version of you that has grown through the \
                   healing process, providing hope and direction for personal growth.",
        key_features: &[
            "Future self projection modeling based on current trajectory",
            "Motivational guidance system with personalized messaging",
            "Progress visualization with milestone tracking",
            "Behavioral reinforcement through future self wisdom",
            "Crisis intervention with future perspective insights",
        ],
        benefits: &[
            "Increased motivation through future vision clarity",
            "Clear progress tracking with measurable milestones",
            "Hope and inspiration during difficult periods",
            "Enhanced goal-setting and achievement planning",
            "Reduced anxiety about future outcomes",
        ],
    },
    Feature {
        icon: "fas fa-shield-halved",
        title: "Clinical Integration",
        description: "HIPAA-compliant, encrypted, and clinician-controlled simulations maintain \
                      therapeutic integrity while enabling proactive care.",
        gradient: "#f97316, #f59e0b",
        overview: "Enterprise-grade security and compliance ensure all data and simulations meet \
                   the highest standards for medical privacy and therapeutic ethics, integrating \
                   seamlessly with existing clinical workflows.",
        key_features: &[
            "HIPAA compliance with full audit trail logging",
            "End-to-end encryption for all data transmission",
            "Clinician access controls with role-based permissions",
            "Integration with Electronic Health Records (EHR)",
            "Real-time monitoring and alert systems",
        ],
        benefits: &[
            "Complete data privacy and patient confidentiality",
            "Regulatory compliance with healthcare standards",
            "Professional oversight and clinical governance",
            "Seamless workflow integration for clinicians",
            "Enhanced patient trust through security measures",
        ],
    },
    Feature {
        icon: "fas fa-bolt",
        title: "Real-Time Evolution",
        description: "Your twin evolves with every interaction, learning from journaling, voice \
                      inputs, therapy sessions, and behavioral patterns.",
        gradient: "#8b5cf6, #a855f7",
        overview: "Continuous learning algorithms make your Digital Twin more accurate and \
                   personalized with each interaction, creating an ever-improving reflection of \
                   your inner world that adapts to your changing needs.",
        key_features: &[
            "Continuous learning algorithms with neural network adaptation",
            "Multi-source data integration from various touchpoints",
            "Adaptive personality modeling with trait evolution",
            "Behavioral pattern recognition and prediction",
            "Contextual awareness and environmental adaptation",
        ],
        benefits: &[
            "Increasing accuracy over time with usage",
            "Personalized insights that improve with interaction",
            "Adaptive responses that match your evolution",
            "Enhanced prediction accuracy for better outcomes",
            "Customized experience that reflects your journey",
        ],
    },
];

const SHOWCASE_STATS: &[(&str, &str, &str)] = &[
    ("99.7%", "Accuracy Rate", "Accuracy Rate Information"),
    ("24/7", "Real-time Processing", "Real-time Processing Information"),
    ("256-bit", "Encryption Security", "Security Information"),
];

#[function_component(Features)]
pub fn features() -> Html {
    let selected = use_state(|| None::<Feature>);

    let on_close = {
        let selected = selected.clone();
        use_callback(move |_: (), _| selected.set(None), ())
    };

    let docs_cta =
        Callback::from(|_| mailer::compose(mailer::GENERAL, "Technical Documentation Request"));

    html! {
        <section id="features">
            <style>{r#"
                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
                    gap: 2rem;
                }
                .feature-card {
                    padding: 2rem;
                    cursor: pointer;
                }
                .feature-card h3 { font-size: 1.25rem; margin-bottom: 1rem; }
                .feature-card p { color: #9ca3af; line-height: 1.6; margin-bottom: 1rem; }
                .learn-more { font-size: 0.9rem; color: #60a5fa; }
                .showcase {
                    margin-top: 5rem;
                    padding: 3rem;
                    text-align: center;
                    cursor: pointer;
                }
                .showcase h3 { font-size: 1.9rem; margin-bottom: 1.5rem; }
                .showcase > p {
                    color: #d1d5db;
                    font-size: 1.1rem;
                    max-width: 56rem;
                    margin: 0 auto 2rem;
                }
                .showcase-stats {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
                    gap: 1.5rem;
                }
                .showcase-stat {
                    padding: 1.5rem;
                    border-radius: 0.75rem;
                    cursor: pointer;
                }
                .showcase-stat:hover { background: rgba(255, 255, 255, 0.05); }
                .showcase-stat .value { font-size: 1.9rem; font-weight: 700; }
                .showcase-stat .label { color: #9ca3af; }
            "#}</style>
            <div class="section-inner">
                <div class="section-header">
                    <h2 class="gradient-text">{ "Core Capabilities" }</h2>
                    <p>
                        { "Powered by advanced AI and deep learning, your Digital Twin offers \
                           unprecedented insights into your mental and emotional landscape." }
                    </p>
                </div>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|feature| {
                        let selected = selected.clone();
                        let item = feature.clone();
                        html! {
                            <div
                                key={feature.title}
                                class="feature-card perspective-card"
                                onclick={Callback::from(move |_| selected.set(Some(item.clone())))}
                            >
                                <div
                                    class="icon-badge"
                                    style={format!("background: linear-gradient(to bottom right, {});", feature.gradient)}
                                >
                                    <i class={feature.icon}></i>
                                </div>
                                <h3>{ feature.title }</h3>
                                <p>{ feature.description }</p>
                                <div class="learn-more">{ "Learn more →" }</div>
                            </div>
                        }
                    }) }
                </div>
                <div class="showcase glass-card" onclick={docs_cta}>
                    <h3 class="gradient-text">{ "Advanced AI Architecture" }</h3>
                    <p>
                        { "Built on cutting-edge machine learning models that process multi-modal \
                           data streams including text, voice, behavioral patterns, and \
                           physiological indicators to create the most accurate digital \
                           representation of your inner self." }
                    </p>
                    <div class="showcase-stats">
                        { for SHOWCASE_STATS.iter().map(|(value, label, subject)| html! {
                            <div
                                key={*label}
                                class="showcase-stat"
                                onclick={Callback::from(move |e: MouseEvent| {
                                    // Inner tile has its own inquiry; keep the outer card's
                                    // CTA from firing on the same click.
                                    e.stop_propagation();
                                    mailer::compose(mailer::GENERAL, subject);
                                })}
                            >
                                <div class="value gradient-text">{ *value }</div>
                                <div class="label">{ *label }</div>
                            </div>
                        }) }
                    </div>
                    <div class="learn-more" style="margin-top:1.5rem;">
                        { "Request Technical Documentation →" }
                    </div>
                </div>
            </div>
            <FeatureModal
                feature={(*selected).clone()}
                is_open={selected.is_some()}
                on_close={on_close}
            />
        </section>
    }
}
