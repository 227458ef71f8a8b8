use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::modal::ModalShell;
use crate::{mailer, nav};

/// The demo-request form fields. Name and email are required; everything else
/// is rendered with a placeholder in the composed message when left empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemoRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub role: String,
    pub use_case: String,
    pub message: String,
}

impl DemoRequest {
    /// The browser's `required` inputs normally gate submission; this is the
    /// equivalent check for anything that bypasses them.
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }

    pub fn subject(&self) -> String {
        let organization = or_placeholder(&self.organization, "Individual");
        format!("Demo Request - {} ({})", self.name, organization)
    }

    /// Plain-text message body handed to the mail client.
    pub fn body(&self) -> String {
        format!(
            "Demo Request from {name}\n\
             \n\
             Contact Information:\n\
             - Name: {name}\n\
             - Email: {email}\n\
             - Phone: {phone}\n\
             - Organization: {organization}\n\
             - Role: {role}\n\
             \n\
             Use Case: {use_case}\n\
             \n\
             Message:\n\
             {message}\n\
             \n\
             ---\n\
             This demo request was submitted through the Omni Digital Twin™ website.",
            name = self.name,
            email = self.email,
            phone = or_placeholder(&self.phone, "Not provided"),
            organization = or_placeholder(&self.organization, "Not provided"),
            role = or_placeholder(&self.role, "Not provided"),
            use_case = or_placeholder(&self.use_case, "Not specified"),
            message = or_placeholder(&self.message, "No additional message"),
        )
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// NotSubmitted → Submitting → Submitted. The second transition is
/// unconditional: the mail hand-off gives no acknowledgment to await.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    NotSubmitted,
    Submitting,
    Submitted,
}

/// Form fields and submission status as one value, so the submit and reset
/// transitions live outside the component callbacks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub request: DemoRequest,
    pub status: SubmissionStatus,
}

impl FormState {
    /// First half of the submit transition: moves to `Submitting` when the
    /// request passes validation. An unsubmittable request stays put.
    pub fn begin_submit(&mut self) -> bool {
        if !self.request.is_submittable() {
            return false;
        }
        self.status = SubmissionStatus::Submitting;
        true
    }

    /// Second half: the hand-off gives no acknowledgment to await, so this
    /// is unconditional.
    pub fn finish_submit(&mut self) {
        self.status = SubmissionStatus::Submitted;
    }

    /// Clears every field and returns to `NotSubmitted`. Runs on every close
    /// so a reopened form is always empty.
    pub fn reset(&mut self) {
        *self = FormState::default();
    }
}

const ROLES: &[&str] = &[
    "Clinical Psychologist",
    "Therapist",
    "Psychiatrist",
    "Mental Health Counselor",
    "Educator",
    "Researcher",
    "Healthcare Administrator",
    "Technology Leader",
    "Individual User",
    "Other",
];

const USE_CASES: &[&str] = &[
    "Clinical Practice",
    "Educational Institution",
    "Personal Growth",
    "Research",
    "Healthcare System",
    "Enterprise Solution",
    "Other",
];

#[derive(Properties, PartialEq)]
pub struct RequestDemoModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

#[function_component(RequestDemoModal)]
pub fn request_demo_modal(props: &RequestDemoModalProps) -> Html {
    let state = use_state(FormState::default);

    let input_setter = |apply: fn(&mut DemoRequest, String)| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*state).clone();
            apply(&mut next.request, input.value());
            state.set(next);
        })
    };
    let select_setter = |apply: fn(&mut DemoRequest, String)| {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*state).clone();
            apply(&mut next.request, select.value());
            state.set(next);
        })
    };

    // Closing always resets first so a reopened form never shows stale data.
    // Memoized so typing does not cycle the shell's listener and scroll lock.
    let handle_close = {
        let state = state.clone();
        use_callback(
            move |_: (), on_close| {
                state.set(FormState::default());
                on_close.emit(());
            },
            props.on_close.clone(),
        )
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*state).clone();
            if !next.begin_submit() {
                return;
            }
            mailer::compose_with_body(
                mailer::DEMO_REQUESTS,
                &next.request.subject(),
                &next.request.body(),
            );
            // Fire-and-forget: nothing to await, so this is immediately done.
            next.finish_submit();
            state.set(next);
        })
    };

    let explore_features = {
        let state = state.clone();
        Callback::from(move |_| {
            state.set(FormState::default());
            nav::scroll_to_section("features");
        })
    };

    let on_message = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*state).clone();
            next.request.message = textarea.value();
            state.set(next);
        })
    };

    let submitting = state.status == SubmissionStatus::Submitting;

    html! {
        <ModalShell is_open={props.is_open} on_close={handle_close.clone()} panel_class="narrow">
            <style>{r#"
                .demo-form { display: flex; flex-direction: column; gap: 1.5rem; }
                .field-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                @media (max-width: 768px) {
                    .field-row { grid-template-columns: 1fr; }
                }
                .field label {
                    display: block;
                    font-weight: 500;
                    margin-bottom: 0.5rem;
                }
                .field label i { color: #60a5fa; margin-right: 0.5rem; }
                .field input,
                .field select,
                .field textarea {
                    width: 100%;
                    padding: 0.75rem;
                    border-radius: 0.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: rgba(255, 255, 255, 0.05);
                    color: #fff;
                    font-size: 0.95rem;
                }
                .field input:focus,
                .field select:focus,
                .field textarea:focus {
                    outline: none;
                    border-color: #60a5fa;
                }
                .field select option { background: #1f2937; }
                .field textarea { resize: none; }
                .submit-btn {
                    width: 100%;
                    padding: 1rem 2rem;
                    font-size: 1.1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                }
                .submit-btn:disabled { opacity: 0.5; cursor: not-allowed; }
                .form-note { font-size: 0.85rem; color: #9ca3af; text-align: center; }
                .submitted-view { text-align: center; padding: 2rem 0; }
                .submitted-badge {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1.5rem;
                    border-radius: 9999px;
                    background: linear-gradient(to bottom right, #22c55e, #10b981);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    color: #fff;
                }
                .submitted-view h3 { font-size: 1.5rem; margin-bottom: 1rem; }
                .submitted-view p { color: #d1d5db; margin-bottom: 2rem; line-height: 1.7; }
            "#}</style>
            <div class="modal-header">
                <div>
                    <h2 class="gradient-text">{ "Request Demo" }</h2>
                    <p class="subtitle">{ "Experience the future of mental health technology" }</p>
                </div>
                <button class="modal-close" onclick={handle_close.reform(|_: MouseEvent| ())}>
                    <i class="fas fa-xmark"></i>
                </button>
            </div>
            if state.status != SubmissionStatus::Submitted {
                <form class="demo-form" onsubmit={on_submit}>
                    <div class="field-row">
                        <div class="field">
                            <label><i class="fas fa-user"></i>{ "Full Name *" }</label>
                            <input
                                type="text"
                                required=true
                                placeholder="Enter your full name"
                                value={state.request.name.clone()}
                                oninput={input_setter(|f, v| f.name = v)}
                            />
                        </div>
                        <div class="field">
                            <label><i class="fas fa-envelope"></i>{ "Email Address *" }</label>
                            <input
                                type="email"
                                required=true
                                placeholder="Enter your email"
                                value={state.request.email.clone()}
                                oninput={input_setter(|f, v| f.email = v)}
                            />
                        </div>
                    </div>
                    <div class="field-row">
                        <div class="field">
                            <label><i class="fas fa-phone"></i>{ "Phone Number" }</label>
                            <input
                                type="tel"
                                placeholder="Enter your phone number"
                                value={state.request.phone.clone()}
                                oninput={input_setter(|f, v| f.phone = v)}
                            />
                        </div>
                        <div class="field">
                            <label><i class="fas fa-briefcase"></i>{ "Organization" }</label>
                            <input
                                type="text"
                                placeholder="Company or institution"
                                value={state.request.organization.clone()}
                                oninput={input_setter(|f, v| f.organization = v)}
                            />
                        </div>
                    </div>
                    <div class="field-row">
                        <div class="field">
                            <label>{ "Your Role" }</label>
                            <select
                                value={state.request.role.clone()}
                                onchange={select_setter(|f, v| f.role = v)}
                            >
                                <option value="" selected={state.request.role.is_empty()}>
                                    { "Select your role" }
                                </option>
                                { for ROLES.iter().map(|role| html! {
                                    <option
                                        key={*role}
                                        value={*role}
                                        selected={state.request.role == *role}
                                    >
                                        { *role }
                                    </option>
                                }) }
                            </select>
                        </div>
                        <div class="field">
                            <label>{ "Primary Use Case" }</label>
                            <select
                                value={state.request.use_case.clone()}
                                onchange={select_setter(|f, v| f.use_case = v)}
                            >
                                <option value="" selected={state.request.use_case.is_empty()}>
                                    { "Select use case" }
                                </option>
                                { for USE_CASES.iter().map(|use_case| html! {
                                    <option
                                        key={*use_case}
                                        value={*use_case}
                                        selected={state.request.use_case == *use_case}
                                    >
                                        { *use_case }
                                    </option>
                                }) }
                            </select>
                        </div>
                    </div>
                    <div class="field">
                        <label><i class="fas fa-comment"></i>{ "Additional Message" }</label>
                        <textarea
                            rows="4"
                            placeholder="Tell us about your specific needs or questions..."
                            value={state.request.message.clone()}
                            oninput={on_message}
                        />
                    </div>
                    <button type="submit" class="primary-btn submit-btn" disabled={submitting}>
                        <i class="fas fa-paper-plane"></i>
                        <span>
                            { if submitting { "Sending Request..." } else { "Request Demo" } }
                        </span>
                    </button>
                    <p class="form-note">
                        { "* Required fields. We'll get back to you within 24 hours." }
                    </p>
                </form>
            } else {
                <div class="submitted-view">
                    <div class="submitted-badge"><i class="fas fa-paper-plane"></i></div>
                    <h3>{ "Demo Request Sent!" }</h3>
                    <p>
                        { "Thank you for your interest in the Omni Digital Twin™. Your demo \
                           request has been sent to our team, and we'll get back to you within \
                           24 hours to schedule your personalized demonstration." }
                    </p>
                    <div class="modal-actions">
                        <button class="primary-btn" onclick={handle_close.reform(|_: MouseEvent| ())}>
                            { "Close" }
                        </button>
                        <button class="ghost-btn" onclick={explore_features}>
                            { "Explore Features" }
                        </button>
                    </div>
                </div>
            }
        </ModalShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_request() -> DemoRequest {
        DemoRequest {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            ..DemoRequest::default()
        }
    }

    #[test]
    fn submission_requires_name_and_email() {
        assert!(minimal_request().is_submittable());
        assert!(!DemoRequest::default().is_submittable());
        assert!(!DemoRequest { email: "jane@x.com".into(), ..DemoRequest::default() }
            .is_submittable());
        assert!(!DemoRequest { name: "   ".into(), email: "jane@x.com".into(), ..DemoRequest::default() }
            .is_submittable());
    }

    #[test]
    fn empty_optionals_render_as_placeholders() {
        let body = minimal_request().body();
        assert!(body.contains("Demo Request from Jane Doe"));
        assert!(body.contains("- Phone: Not provided"));
        assert!(body.contains("- Organization: Not provided"));
        assert!(body.contains("- Role: Not provided"));
        assert!(body.contains("Use Case: Not specified"));
        assert!(body.contains("No additional message"));
    }

    #[test]
    fn filled_fields_appear_verbatim() {
        let request = DemoRequest {
            phone: "+1 555 0100".into(),
            organization: "Acme Clinic".into(),
            role: "Therapist".into(),
            use_case: "Clinical Practice".into(),
            message: "Interested in a pilot.".into(),
            ..minimal_request()
        };
        let body = request.body();
        assert!(body.contains("- Phone: +1 555 0100"));
        assert!(body.contains("- Organization: Acme Clinic"));
        assert!(body.contains("- Role: Therapist"));
        assert!(body.contains("Use Case: Clinical Practice"));
        assert!(body.contains("Interested in a pilot."));
        assert!(!body.contains("Not provided"));
    }

    #[test]
    fn subject_falls_back_to_individual_without_an_organization() {
        assert_eq!(minimal_request().subject(), "Demo Request - Jane Doe (Individual)");
        let request = DemoRequest { organization: "Acme Clinic".into(), ..minimal_request() };
        assert_eq!(request.subject(), "Demo Request - Jane Doe (Acme Clinic)");
    }

    #[test]
    fn status_starts_not_submitted() {
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::NotSubmitted);
    }

    #[test]
    fn submit_walks_the_status_sequence() {
        let mut state = FormState { request: minimal_request(), ..FormState::default() };
        assert_eq!(state.status, SubmissionStatus::NotSubmitted);
        assert!(state.begin_submit());
        assert_eq!(state.status, SubmissionStatus::Submitting);
        state.finish_submit();
        assert_eq!(state.status, SubmissionStatus::Submitted);
    }

    #[test]
    fn unsubmittable_request_never_starts_submitting() {
        let mut state = FormState::default();
        assert!(!state.begin_submit());
        assert_eq!(state.status, SubmissionStatus::NotSubmitted);
    }

    #[test]
    fn close_reset_leaves_an_empty_not_submitted_form() {
        let mut state = FormState {
            request: DemoRequest {
                organization: "Acme Clinic".into(),
                message: "Interested in a pilot.".into(),
                ..minimal_request()
            },
            status: SubmissionStatus::Submitted,
        };
        state.reset();
        assert_eq!(state, FormState::default());
        assert!(state.request.name.is_empty());
        assert_eq!(state.status, SubmissionStatus::NotSubmitted);
    }
}
