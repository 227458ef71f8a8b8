use yew::prelude::*;

use crate::mailer;

/// A cell in the comparison table: full support, none, or a qualified answer.
#[derive(Clone, Copy, PartialEq)]
enum Support {
    Yes,
    No,
    Partial(&'static str),
}

impl Support {
    fn render(self) -> Html {
        match self {
            Support::Yes => html! { <i class="fas fa-check" style="color:#4ade80;"></i> },
            Support::No => html! { <i class="fas fa-xmark" style="color:#f87171;"></i> },
            Support::Partial(label) => {
                html! { <span style="color:#facc15; font-size:0.85rem;">{ label }</span> }
            }
        }
    }
}

struct ComparisonRow {
    name: &'static str,
    description: &'static str,
    traditional: Support,
    competitors: Support,
    omni: Support,
}

static ROWS: &[ComparisonRow] = &[
    ComparisonRow {
        name: "Real-time Emotional Modeling",
        description: "Continuously updated emotional state representation",
        traditional: Support::No,
        competitors: Support::Partial("Limited"),
        omni: Support::Yes,
    },
    ComparisonRow {
        name: "Predictive Therapy Simulation",
        description: "Test different therapeutic approaches before implementation",
        traditional: Support::No,
        competitors: Support::No,
        omni: Support::Yes,
    },
    ComparisonRow {
        name: "Multi-Perspective Communication",
        description: "View situations from different emotional standpoints",
        traditional: Support::Partial("Limited"),
        competitors: Support::Partial("Limited"),
        omni: Support::Yes,
    },
    ComparisonRow {
        name: "Future Self Interaction",
        description: "Engage with projected versions of yourself",
        traditional: Support::No,
        competitors: Support::No,
        omni: Support::Yes,
    },
    ComparisonRow {
        name: "Clinical Integration",
        description: "Seamless integration with existing clinical workflows",
        traditional: Support::Partial("Partial"),
        competitors: Support::Partial("Limited"),
        omni: Support::Yes,
    },
    ComparisonRow {
        name: "Continuous Learning",
        description: "System improves with each interaction",
        traditional: Support::No,
        competitors: Support::Partial("Basic"),
        omni: Support::Yes,
    },
    ComparisonRow {
        name: "Data Privacy & Security",
        description: "Enterprise-grade protection of sensitive information",
        traditional: Support::Partial("Varies"),
        competitors: Support::Partial("Partial"),
        omni: Support::Yes,
    },
    ComparisonRow {
        name: "Evidence-Based Approach",
        description: "Grounded in clinical research and best practices",
        traditional: Support::Yes,
        competitors: Support::Partial("Varies"),
        omni: Support::Yes,
    },
];

const BENEFITS: &[(&str, &str, &str)] = &[
    (
        "Unmatched Personalization",
        "Unlike one-size-fits-all solutions, the Omni Digital Twin™ creates a unique model for \
         each user, adapting continuously to provide highly personalized insights.",
        "99.7% accuracy in personalization",
    ),
    (
        "Integrated Ecosystem",
        "Beyond standalone apps, our platform creates a unified mental health ecosystem \
         connecting personal growth, clinical care, and educational applications.",
        "Seamless integration across domains",
    ),
    (
        "Research-Backed Innovation",
        "Every feature is developed in collaboration with leading researchers and clinicians, \
         ensuring our technology delivers measurable therapeutic value.",
        "12+ peer-reviewed publications",
    ),
];

#[function_component(ComparisonTable)]
pub fn comparison_table() -> Html {
    let compare_cta =
        Callback::from(|_| mailer::compose(mailer::GENERAL, "Detailed Comparison Request"));

    html! {
        <section id="comparison">
            <style>{r#"
                .comparison-wrap { padding: 2rem; overflow-x: auto; }
                .comparison-table { width: 100%; border-collapse: collapse; min-width: 40rem; }
                .comparison-table th,
                .comparison-table td {
                    padding: 1rem;
                    border-bottom: 1px solid #374151;
                }
                .comparison-table th { color: #9ca3af; font-weight: 500; }
                .comparison-table th:first-child { text-align: left; }
                .comparison-table td:not(:first-child) { text-align: center; }
                .comparison-table tr:nth-child(odd) td { background: rgba(255, 255, 255, 0.03); }
                .comparison-table .omni-col {
                    background: linear-gradient(to right, rgba(59, 130, 246, 0.1), rgba(147, 51, 234, 0.1));
                    color: #fff;
                    font-weight: 600;
                }
                .row-name { font-weight: 500; }
                .row-desc { font-size: 0.85rem; color: #9ca3af; }
                .benefit-grid {
                    margin-top: 4rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                    gap: 2rem;
                }
                .benefit-card { padding: 1.5rem; }
                .benefit-card h3 { font-size: 1.25rem; margin-bottom: 1rem; }
                .benefit-card p { color: #d1d5db; margin-bottom: 1rem; line-height: 1.6; }
                .benefit-card .note { font-size: 0.9rem; color: #60a5fa; }
                .comparison-cta { margin-top: 4rem; text-align: center; }
            "#}</style>
            <div class="section-inner">
                <div class="section-header">
                    <h2 class="gradient-text">{ "Why Choose Omni Digital Twin™" }</h2>
                    <p>
                        { "See how our revolutionary approach compares to traditional therapy and \
                           competing digital solutions." }
                    </p>
                </div>
                <div class="comparison-wrap glass-card">
                    <table class="comparison-table">
                        <thead>
                            <tr>
                                <th>{ "Feature" }</th>
                                <th>{ "Traditional Therapy" }</th>
                                <th>{ "Competing Digital Solutions" }</th>
                                <th class="omni-col">{ "Omni Digital Twin™" }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for ROWS.iter().map(|row| html! {
                                <tr key={row.name}>
                                    <td>
                                        <div class="row-name">{ row.name }</div>
                                        <div class="row-desc">{ row.description }</div>
                                    </td>
                                    <td>{ row.traditional.render() }</td>
                                    <td>{ row.competitors.render() }</td>
                                    <td class="omni-col">{ row.omni.render() }</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>
                <div class="benefit-grid">
                    { for BENEFITS.iter().map(|&(title, blurb, note)| html! {
                        <div key={title} class="benefit-card glass-card">
                            <h3>{ title }</h3>
                            <p>{ blurb }</p>
                            <div class="note">{ note }</div>
                        </div>
                    }) }
                </div>
                <div class="comparison-cta">
                    <button class="primary-btn" onclick={compare_cta}>
                        { "Request Detailed Comparison" }
                    </button>
                </div>
            </div>
        </section>
    }
}
