use yew::prelude::*;

use crate::{mailer, nav};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum BillingPeriod {
    Monthly,
    Annually,
}

/// Monthly/annual price pair; `Custom` plans are quoted by sales.
#[derive(Clone, Copy, PartialEq)]
enum Price {
    PerMonth { monthly: u32, annually: u32 },
    Custom,
}

impl Price {
    fn for_period(self, period: BillingPeriod) -> Option<u32> {
        match self {
            Price::PerMonth { monthly, annually } => Some(match period {
                BillingPeriod::Monthly => monthly,
                BillingPeriod::Annually => annually,
            }),
            Price::Custom => None,
        }
    }
}

struct Plan {
    name: &'static str,
    icon: &'static str,
    gradient: &'static str,
    description: &'static str,
    price: Price,
    per_user: bool,
    features: &'static [&'static str],
    popular: bool,
    cta: &'static str,
}

static PUBLIC_PLANS: &[Plan] = &[
    Plan {
        name: "Personal Growth",
        icon: "fas fa-users",
        gradient: "#3b82f6, #06b6d4",
        description: "Start your journey of self-discovery with our essential twin package",
        price: Price::PerMonth { monthly: 39, annually: 29 },
        per_user: false,
        features: &[
            "Personal Digital Twin with basic emotional modeling",
            "Daily mood tracking and analysis",
            "Weekly emotional insights report",
            "Personal growth recommendations",
            "Journal integration with sentiment analysis",
            "Mobile app access",
            "8-hour response support",
        ],
        popular: false,
        cta: "Start Your Journey",
    },
    Plan {
        name: "Growth Plus",
        icon: "fas fa-star",
        gradient: "#a855f7, #6366f1",
        description: "Enhanced features for deeper self-understanding and accelerated growth",
        price: Price::PerMonth { monthly: 79, annually: 59 },
        per_user: false,
        features: &[
            "Everything in Personal Growth",
            "Advanced emotional pattern recognition",
            "Future self interaction (1 session monthly)",
            "Relationship dynamics modeling",
            "Personalized growth exercises",
            "Voice analysis integration",
            "Integration with 3 wellness apps",
            "24/7 priority support",
        ],
        popular: true,
        cta: "Accelerate Growth",
    },
    Plan {
        name: "Transformation",
        icon: "fas fa-bolt",
        gradient: "#ec4899, #f43f5e",
        description: "Our most comprehensive package for profound personal transformation",
        price: Price::PerMonth { monthly: 129, annually: 99 },
        per_user: false,
        features: &[
            "Everything in Growth Plus",
            "Unlimited future self sessions",
            "Multi-perspective communication",
            "Custom growth pathways",
            "Therapist connection features",
            "Family dynamics modeling",
            "Unlimited wellness app integrations",
            "Dedicated success coach",
        ],
        popular: false,
        cta: "Transform Your Life",
    },
];

static ENTERPRISE_PLANS: &[Plan] = &[
    Plan {
        name: "Clinical Practice",
        icon: "fas fa-wave-square",
        gradient: "#3b82f6, #06b6d4",
        description: "Transform your practice with AI-powered insights and therapeutic forecasting",
        price: Price::PerMonth { monthly: 299, annually: 249 },
        per_user: true,
        features: &[
            "Up to 50 patient Digital Twins",
            "Therapeutic forecasting engine",
            "Treatment pathway optimization",
            "Patient emotional volatility alerts",
            "Session planning assistant",
            "EHR integration capabilities",
            "HIPAA-compliant security",
            "Dedicated clinical success manager",
        ],
        popular: false,
        cta: "Elevate Your Practice",
    },
    Plan {
        name: "Educational Institution",
        icon: "fas fa-book",
        gradient: "#22c55e, #10b981",
        description: "Revolutionize mental health education with realistic, risk-free training \
                      environments",
        price: Price::Custom,
        per_user: false,
        features: &[
            "Unlimited educational Digital Twins",
            "Virtual practicum environment",
            "Diverse case library (100+ scenarios)",
            "Student performance analytics",
            "Curriculum integration tools",
            "Multi-user collaboration features",
            "Research capabilities",
            "Training and implementation support",
        ],
        popular: false,
        cta: "Transform Education",
    },
    Plan {
        name: "Enterprise Solutions",
        icon: "fas fa-globe",
        gradient: "#f97316, #f59e0b",
        description: "Custom solutions for healthcare systems, research institutions, and global \
                      organizations",
        price: Price::Custom,
        per_user: false,
        features: &[
            "Custom implementation and integration",
            "White-label options available",
            "Advanced analytics and reporting",
            "Custom AI model training",
            "Dedicated API access",
            "Enterprise-grade security",
            "Service level agreements",
            "Strategic partnership opportunities",
        ],
        popular: false,
        cta: "Request Consultation",
    },
];

const FAQS: &[(&str, &str)] = &[
    (
        "How accurate is the Digital Twin technology?",
        "Our Digital Twin technology achieves a 97.5% accuracy rate in emotional state modeling, \
         based on comprehensive validation studies. The accuracy increases over time as the \
         system learns from your interactions, reaching up to 99.7% for long-term users.",
    ),
    (
        "Is my data secure and private?",
        "Absolutely. We employ end-to-end encryption, HIPAA-compliant infrastructure, and strict \
         data governance policies. Your personal data never leaves your secure environment, and \
         we maintain the highest standards of privacy protection in the industry.",
    ),
    (
        "Can I upgrade or downgrade my plan later?",
        "Yes, you can change your plan at any time. When upgrading, you will immediately gain \
         access to new features, and your billing will be prorated. When downgrading, changes \
         will take effect at the start of your next billing cycle.",
    ),
    (
        "Do you offer discounts for non-profits or research institutions?",
        "Yes, we offer special pricing for non-profit organizations, research institutions, and \
         educational facilities. Please contact our sales team for more information about our \
         impact partnership programs.",
    ),
    (
        "What kind of support is included?",
        "All plans include access to our support resources, including documentation, tutorials, \
         and community forums. Premium plans include priority email and chat support, while \
         enterprise plans come with dedicated success managers and 24/7 phone support.",
    ),
    (
        "Can I try before I purchase?",
        "We offer a 14-day free trial for our Personal Growth and Growth Plus plans. For \
         enterprise solutions, we provide comprehensive demonstrations and pilot programs. \
         Contact our sales team to schedule a personalized demo.",
    ),
];

fn plan_card(plan: &Plan, period: BillingPeriod, subject_prefix: &'static str) -> Html {
    let inquiry = {
        let name = plan.name;
        Callback::from(move |_| {
            mailer::compose(mailer::GENERAL, &format!("{subject_prefix} - {name}"));
        })
    };

    let price = match plan.price.for_period(period) {
        Some(amount) => html! {
            <>
                <span class="amount">{ format!("${amount}") }</span>
                <span class="per">{ if plan.per_user { " / user" } else { " / month" } }</span>
                if period == BillingPeriod::Annually {
                    <div class="annual-note">
                        { format!("Billed annually (${})", amount * 12) }
                    </div>
                }
            </>
        },
        None => html! { <span class="amount gradient-text">{ "Custom Pricing" }</span> },
    };

    html! {
        <div
            key={plan.name}
            class={classes!("plan-card", "perspective-card", plan.popular.then_some("popular"))}
        >
            if plan.popular {
                <div class="popular-tag">{ "MOST POPULAR" }</div>
            }
            <div
                class="icon-badge"
                style={format!("background: linear-gradient(to bottom right, {});", plan.gradient)}
            >
                <i class={plan.icon}></i>
            </div>
            <h4>{ plan.name }</h4>
            <p class="plan-desc">{ plan.description }</p>
            <div class="plan-price">{ price }</div>
            <ul class="check-list">
                { for plan.features.iter().map(|item| html! {
                    <li key={*item}>
                        <i class="fas fa-check"></i>
                        <span>{ *item }</span>
                    </li>
                }) }
            </ul>
            <button
                class={if plan.popular { "primary-btn plan-cta" } else { "ghost-btn plan-cta" }}
                onclick={inquiry}
            >
                { plan.cta }
            </button>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let period = use_state(|| BillingPeriod::Monthly);
    // Index of the one expanded FAQ; reclicking it collapses again.
    let open_faq = use_state(|| None::<usize>);

    let set_period = |value: BillingPeriod| {
        let period = period.clone();
        Callback::from(move |_| period.set(value))
    };

    let enterprise_cta =
        Callback::from(|_| mailer::compose(mailer::ENTERPRISE, "Custom Enterprise Solution"));
    let sales_cta = Callback::from(|_| mailer::compose(mailer::SALES, "Pricing Question"));
    let schedule_cta = Callback::from(|_| nav::scroll_to_section("contact"));

    let toggle_class = |value: BillingPeriod| {
        if *period == value {
            "toggle-btn active"
        } else {
            "toggle-btn"
        }
    };

    html! {
        <section id="pricing">
            <style>{r#"
                .billing-toggle {
                    display: flex;
                    justify-content: center;
                    margin-bottom: 3rem;
                }
                .billing-toggle .glass-card {
                    display: flex;
                    align-items: center;
                    padding: 0.25rem;
                    border-radius: 9999px;
                }
                .toggle-btn {
                    background: none;
                    border: none;
                    border-radius: 9999px;
                    color: #9ca3af;
                    padding: 0.5rem 1.5rem;
                    cursor: pointer;
                }
                .toggle-btn.active {
                    background: linear-gradient(to right, #3b82f6, #9333ea);
                    color: #fff;
                }
                .toggle-btn .save { font-size: 0.7rem; color: #4ade80; margin-left: 0.25rem; }
                .plan-tier-title { font-size: 1.9rem; text-align: center; margin-bottom: 3rem; }
                .plan-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
                    gap: 2rem;
                    margin-bottom: 5rem;
                }
                .plan-card { position: relative; padding: 2rem; display: flex; flex-direction: column; }
                .plan-card.popular {
                    border-color: rgba(59, 130, 246, 0.5);
                    box-shadow: 0 10px 40px rgba(59, 130, 246, 0.1);
                }
                .popular-tag {
                    position: absolute;
                    top: 0;
                    right: 0;
                    background: linear-gradient(to right, #3b82f6, #9333ea);
                    font-size: 0.7rem;
                    font-weight: 700;
                    padding: 0.25rem 1rem;
                    border-radius: 0 1rem 0 0.75rem;
                }
                .plan-card h4 { font-size: 1.5rem; margin-bottom: 0.5rem; }
                .plan-desc { color: #9ca3af; margin-bottom: 1.5rem; min-height: 3rem; }
                .plan-price { margin-bottom: 1.5rem; }
                .plan-price .amount { font-size: 2.2rem; font-weight: 700; }
                .plan-price .per { color: #9ca3af; margin-left: 0.5rem; }
                .annual-note { font-size: 0.85rem; color: #4ade80; margin-top: 0.25rem; }
                .plan-card .check-list { flex-grow: 1; margin-bottom: 2rem; font-size: 0.9rem; }
                .plan-cta { width: 100%; }
                .enterprise-banner { padding: 3rem; text-align: center; margin-bottom: 5rem; }
                .enterprise-banner h3 { font-size: 1.9rem; margin-bottom: 1rem; }
                .enterprise-banner p {
                    font-size: 1.25rem;
                    color: #d1d5db;
                    max-width: 48rem;
                    margin: 0 auto 2rem;
                }
                .faq-list { max-width: 48rem; margin: 0 auto; }
                .faq-item { margin-bottom: 1rem; }
                .faq-question {
                    width: 100%;
                    text-align: left;
                    padding: 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    color: #fff;
                    font-weight: 600;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .faq-question i { color: #9ca3af; transition: transform 0.3s ease; }
                .faq-question i.open { color: #60a5fa; transform: rotate(180deg); }
                .faq-answer { margin-top: 0.25rem; padding: 1.5rem; color: #d1d5db; line-height: 1.7; }
                .closing-cta { margin-top: 5rem; text-align: center; }
                .closing-cta h3 { font-size: 1.9rem; margin-bottom: 1.5rem; }
                .closing-cta p {
                    font-size: 1.25rem;
                    color: #d1d5db;
                    max-width: 48rem;
                    margin: 0 auto 2rem;
                }
                .closing-cta .buttons {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                }
            "#}</style>
            <div class="section-inner">
                <div class="section-header">
                    <h2 class="gradient-text">{ "Pricing Plans" }</h2>
                    <p>
                        { "Choose the perfect plan to support your journey with the Omni Digital \
                           Twin™. From personal growth to enterprise solutions, we have options \
                           for every need." }
                    </p>
                </div>
                <div class="billing-toggle">
                    <div class="glass-card">
                        <button
                            class={toggle_class(BillingPeriod::Monthly)}
                            onclick={set_period(BillingPeriod::Monthly)}
                        >
                            { "Monthly" }
                        </button>
                        <button
                            class={toggle_class(BillingPeriod::Annually)}
                            onclick={set_period(BillingPeriod::Annually)}
                        >
                            { "Annually" }
                            <span class="save">{ "Save 25%" }</span>
                        </button>
                    </div>
                </div>
                <h3 class="plan-tier-title">{ "Personal & Public Use" }</h3>
                <div class="plan-grid">
                    { for PUBLIC_PLANS.iter().map(|plan| plan_card(plan, *period, "Pricing Inquiry")) }
                </div>
                <h3 class="plan-tier-title">{ "Professional & Enterprise Solutions" }</h3>
                <div class="plan-grid">
                    { for ENTERPRISE_PLANS.iter().map(|plan| plan_card(plan, *period, "Enterprise Inquiry")) }
                </div>
                <div class="enterprise-banner glass-card">
                    <h3 class="gradient-text">{ "Need a Custom Solution?" }</h3>
                    <p>
                        { "Our enterprise team will work with you to create a tailored solution \
                           that meets your organization's specific needs." }
                    </p>
                    <button class="primary-btn" onclick={enterprise_cta}>
                        { "Contact Enterprise Sales" }
                    </button>
                </div>
                <h3 class="plan-tier-title">{ "Frequently Asked Questions" }</h3>
                <div class="faq-list">
                    { for FAQS.iter().enumerate().map(|(index, &(question, answer))| {
                        let is_open = *open_faq == Some(index);
                        let toggle = {
                            let open_faq = open_faq.clone();
                            Callback::from(move |_| {
                                open_faq.set(if is_open { None } else { Some(index) });
                            })
                        };
                        html! {
                            <div key={question} class="faq-item">
                                <button class="faq-question glass-card" onclick={toggle}>
                                    <span>{ question }</span>
                                    <i class={classes!("fas", "fa-circle-question", is_open.then_some("open"))}></i>
                                </button>
                                if is_open {
                                    <div class="faq-answer glass-card">{ answer }</div>
                                }
                            </div>
                        }
                    }) }
                </div>
                <div class="closing-cta">
                    <h3 class="gradient-text">{ "Still Have Questions?" }</h3>
                    <p>
                        { "Our team is here to help you find the perfect solution for your needs." }
                    </p>
                    <div class="buttons">
                        <button class="primary-btn" onclick={sales_cta}>{ "Contact Sales" }</button>
                        <button class="ghost-btn" onclick={schedule_cta}>{ "Schedule a Demo" }</button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn billing_toggle_selects_the_matching_rate() {
        let price = Price::PerMonth { monthly: 79, annually: 59 };
        assert_eq!(price.for_period(BillingPeriod::Monthly), Some(79));
        assert_eq!(price.for_period(BillingPeriod::Annually), Some(59));
    }

    #[test]
    fn custom_plans_have_no_listed_rate() {
        assert_eq!(Price::Custom.for_period(BillingPeriod::Monthly), None);
        assert_eq!(Price::Custom.for_period(BillingPeriod::Annually), None);
    }
}
