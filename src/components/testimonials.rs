use yew::prelude::*;

use crate::mailer;

struct Testimonial {
    name: &'static str,
    role: &'static str,
    icon: &'static str,
    gradient: &'static str,
    quote: &'static str,
}

static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Dr. Sarah Chen",
        role: "Clinical Psychologist",
        icon: "fas fa-user-check",
        gradient: "#3b82f6, #06b6d4",
        quote: "The predictive therapy simulation has transformed my practice. I have reduced \
                treatment time by 40% while seeing significantly better outcomes for my patients \
                with complex trauma histories.",
    },
    Testimonial {
        name: "Michael Rodriguez",
        role: "Personal Growth User",
        icon: "fas fa-user",
        gradient: "#a855f7, #6366f1",
        quote: "After six months with my Digital Twin, I have gained more self-awareness than I \
                did in years of traditional therapy. The future self interactions have been \
                particularly transformative for my anxiety management.",
    },
    Testimonial {
        name: "Prof. Emily Johnson",
        role: "Director of Clinical Psychology",
        icon: "fas fa-book-open",
        gradient: "#ec4899, #f43f5e",
        quote: "Our university has integrated the Omni Digital Twin into our clinical psychology \
                program with remarkable results. Students now graduate with practical experience \
                that previously took years in the field to develop.",
    },
    Testimonial {
        name: "Dr. James Wilson",
        role: "Research Psychiatrist",
        icon: "fas fa-comment",
        gradient: "#22c55e, #10b981",
        quote: "The perspective shifting engine has provided unprecedented insights into \
                treatment-resistant depression. We are seeing breakthrough moments that simply \
                were not possible with traditional approaches.",
    },
    Testimonial {
        name: "Lisa Thompson",
        role: "Family Therapist",
        icon: "fas fa-star",
        gradient: "#f97316, #f59e0b",
        quote: "Family therapy has been revolutionized by the multi-perspective capabilities. \
                Being able to model communication patterns and show family members how their \
                words are perceived has been game-changing.",
    },
    Testimonial {
        name: "Alex Patel",
        role: "Telehealth Platform CEO",
        icon: "fas fa-headphones",
        gradient: "#8b5cf6, #a855f7",
        quote: "Integrating the Omni Digital Twin API into our telehealth platform has increased \
                therapist effectiveness by 78% and patient satisfaction by 92%. It is the future \
                of mental healthcare delivery.",
    },
];

const CASE_STUDIES: &[(&str, &str, &str)] = &[
    (
        "Clinical Impact Study",
        "How a network of 50+ therapists reduced treatment time by 43%",
        "Case Study Request - Clinical Applications",
    ),
    (
        "Educational Implementation",
        "Stanford's approach to revolutionizing clinical psychology education",
        "Case Study Request - Educational Implementation",
    ),
    (
        "Personal Transformation",
        "12-month longitudinal study of personal growth outcomes",
        "Case Study Request - Personal Transformation",
    ),
];

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section id="testimonials">
            <style>{r#"
                .testimonial-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
                    gap: 2rem;
                }
                .testimonial-card { padding: 2rem; }
                .testimonial-head {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }
                .testimonial-avatar {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    flex-shrink: 0;
                }
                .testimonial-head .name { font-weight: 600; }
                .testimonial-head .role { font-size: 0.85rem; color: #9ca3af; }
                .testimonial-quote {
                    color: #d1d5db;
                    font-style: italic;
                    line-height: 1.7;
                    margin-bottom: 1.5rem;
                }
                .star-row { display: flex; gap: 0.25rem; color: #facc15; font-size: 0.85rem; }
                .case-study-panel { margin-top: 5rem; padding: 3rem; text-align: center; }
                .case-study-panel h3 { font-size: 1.9rem; margin-bottom: 1.5rem; }
                .case-study-panel > p {
                    font-size: 1.25rem;
                    color: #d1d5db;
                    max-width: 56rem;
                    margin: 0 auto 2rem;
                }
                .case-study-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                    gap: 1.5rem;
                }
                .case-study-card {
                    padding: 1.5rem;
                    text-align: left;
                    cursor: pointer;
                }
                .case-study-card:hover { background: rgba(255, 255, 255, 0.05); }
                .case-study-card h4 { font-size: 1.1rem; margin-bottom: 0.5rem; }
                .case-study-card p { font-size: 0.9rem; color: #9ca3af; margin-bottom: 0.75rem; }
                .case-study-card span { font-size: 0.9rem; color: #60a5fa; }
            "#}</style>
            <div class="section-inner">
                <div class="section-header">
                    <h2 class="gradient-text">{ "Success Stories" }</h2>
                    <p>
                        { "Hear from the professionals and individuals who have transformed their \
                           approach to mental health with the Omni Digital Twin™." }
                    </p>
                </div>
                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <div key={t.name} class="testimonial-card perspective-card">
                            <div class="testimonial-head">
                                <div
                                    class="testimonial-avatar"
                                    style={format!("background: linear-gradient(to bottom right, {});", t.gradient)}
                                >
                                    <i class={t.icon}></i>
                                </div>
                                <div>
                                    <div class="name">{ t.name }</div>
                                    <div class="role">{ t.role }</div>
                                </div>
                            </div>
                            <p class="testimonial-quote">{ format!("\"{}\"", t.quote) }</p>
                            <div class="star-row">
                                { for (0..5).map(|i| html! { <i key={i} class="fas fa-star"></i> }) }
                            </div>
                        </div>
                    }) }
                </div>
                <div class="case-study-panel glass-card">
                    <h3 class="gradient-text">{ "Detailed Case Studies" }</h3>
                    <p>
                        { "Explore in-depth case studies that showcase the transformative impact \
                           of the Omni Digital Twin™ across different domains." }
                    </p>
                    <div class="case-study-grid">
                        { for CASE_STUDIES.iter().map(|&(title, blurb, subject)| html! {
                            <div
                                key={title}
                                class="case-study-card glass-card"
                                onclick={Callback::from(move |_| mailer::compose(mailer::GENERAL, subject))}
                            >
                                <h4>{ title }</h4>
                                <p>{ blurb }</p>
                                <span>{ "Download Case Study →" }</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
