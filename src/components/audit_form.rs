use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::audit::contact::CallbackRequest;
use crate::audit::flow::{self, browser_drafts, browser_outbox, webhook_client};
use crate::audit::questions::{AnswerSet, FieldDefinition, FieldId, FieldKind, AUDIT_STEPS};
use crate::audit::session::{Advance, FormSession};
use crate::audit::submit::browser_timezone;
use crate::config;
use crate::copy::audit as text;

#[derive(Properties, PartialEq)]
pub struct AuditFormProps {
    pub on_close: Callback<()>,
}

fn render_field(
    def: &'static FieldDefinition,
    session: &FormSession,
    on_answer: &Callback<(FieldId, String)>,
) -> Html {
    let id = def.id;
    let value = session.answers.get(id).to_string();
    let error = session.errors.get(&id).cloned();
    let suggestion = session.suggestions.get(&id).cloned();

    let control = match def.kind {
        FieldKind::Select(options) => {
            let onchange = {
                let on_answer = on_answer.clone();
                Callback::from(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    on_answer.emit((id, select.value()));
                })
            };
            html! {
                <select id={id.as_str()} class={classes!("audit-input", error.is_some().then(|| "invalid"))} {onchange}>
                    { for options.iter().map(|o| html! {
                        <option value={o.value} selected={o.value == value}>{o.label}</option>
                    }) }
                </select>
            }
        }
        FieldKind::Text | FieldKind::Email => {
            let oninput = {
                let on_answer = on_answer.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_answer.emit((id, input.value()));
                })
            };
            let input_type = if def.kind == FieldKind::Email { "email" } else { "text" };
            html! {
                <input id={id.as_str()} type={input_type}
                    class={classes!("audit-input", error.is_some().then(|| "invalid"))}
                    placeholder={def.placeholder.unwrap_or_default()}
                    value={value.clone()} {oninput} />
            }
        }
    };

    html! {
        <div class="audit-field">
            <label for={id.as_str()}>
                {def.label}
                if def.required { <span class="required-mark">{" *"}</span> }
            </label>
            {control}
            if let Some(helper) = def.helper_text {
                <p class="field-helper">{helper}</p>
            }
            if let Some(message) = error {
                <p class="field-error">{message}</p>
            }
            if let Some(suggested) = suggestion {
                <p class="field-suggestion">
                    {"Did you mean "}
                    <button type="button" class="suggestion-link" onclick={{
                        let on_answer = on_answer.clone();
                        let suggested = suggested.clone();
                        Callback::from(move |_: MouseEvent| on_answer.emit((id, suggested.clone())))
                    }}>{suggested.clone()}</button>
                    {"?"}
                </p>
            }
        </div>
    }
}

#[function_component(AuditForm)]
pub fn audit_form(props: &AuditFormProps) -> Html {
    let session = use_state(|| FormSession::start(&browser_drafts()));
    let show_resume = {
        let resumed = session.resumed;
        use_state(move || resumed)
    };

    {
        let show_resume = show_resume.clone();
        use_timeout(move || show_resume.set(false), config::TIMINGS.resume_notice_ms);
    }

    let on_answer = {
        let session = session.clone();
        Callback::from(move |(id, value): (FieldId, String)| {
            let mut next = (*session).clone();
            next.set_answer(id, value, &browser_drafts());
            session.set(next);
        })
    };

    let on_back = {
        let session = session.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = (*session).clone();
            if next.back(&browser_drafts()) {
                session.set(next);
            }
        })
    };

    let on_next = {
        let session = session.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let drafts = browser_drafts();
            let mut next = (*session).clone();
            match next.next(&drafts) {
                Advance::Submit => {
                    let mut pending = next.clone();
                    session.set(next);
                    let session = session.clone();
                    spawn_local(async move {
                        let outbox = browser_outbox();
                        let client = webhook_client();
                        let delivery = flow::submit_audit(
                            &mut pending,
                            &drafts,
                            Some(&outbox),
                            &client,
                            browser_timezone(),
                            &config::TIMINGS,
                        )
                        .await;
                        if !delivery.is_delivered() {
                            warn!("Audit confirmed without a delivered webhook: {:?}", delivery);
                        }
                        session.set(pending);
                    });
                }
                Advance::Moved(step) => {
                    info!("Audit advanced to step {}", step.index());
                    session.set(next);
                }
                Advance::Blocked => session.set(next),
                Advance::Busy => {}
            }
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        let submitting = session.submitting;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if !submitting {
                on_close.emit(());
            }
        })
    };
    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());

    let step = session.step;
    let body = if session.submitting {
        html! {
            <div class="audit-building">
                <div class="loading-spinner"></div>
                <h2>{text::CONFIRMATION_HEADLINE}</h2>
                <p>{text::BUILDING_MESSAGE}</p>
            </div>
        }
    } else if step.is_confirmation() {
        html! { <Confirmation answers={session.answers.clone()} on_close={close.clone()} /> }
    } else if let Some(def) = step.definition() {
        html! {
            <>
                <p class="step-meta">
                    {format!("Step {} of {} · about {} seconds", def.number, AUDIT_STEPS.len(), def.estimated_time)}
                </p>
                <h2>{def.title}</h2>
                <p class="step-intro">{def.intro}</p>
                { for def.fields.iter().map(|f| render_field(f, &session, &on_answer)) }
            </>
        }
    } else {
        html! {
            <>
                <h2>{text::INTRO_HEADLINE}</h2>
                <p class="step-intro">{text::INTRO_PARAGRAPH}</p>
                <p class="step-reassurance">{text::INTRO_REASSURANCE}</p>
                { for step.fields().iter().map(|f| render_field(f, &session, &on_answer)) }
                <p class="trust-line">{text::TRUST_LINE}</p>
            </>
        }
    };

    let show_nav = !session.submitting && !step.is_confirmation();
    let next_disabled = step.is_audit() && !session.is_current_audit_step_complete();
    let next_label = if step.is_contact() {
        "Start My Audit"
    } else if step.is_last_audit() {
        text::SUBMIT_BUTTON
    } else {
        "Next"
    };

    html! {
        <div class="audit-overlay" onclick={close.clone()}>
            <style>{AUDIT_FORM_CSS}</style>
            <div class="audit-modal" onclick={stop_propagation}>
                if !session.submitting {
                    <button class="audit-close" aria-label="Close" onclick={close.clone()}>{"×"}</button>
                }
                if step.is_audit() || step.is_confirmation() {
                    <div class="audit-progress">
                        <div class="audit-progress-bar" style={format!("width: {}%;", session.progress_percent())}></div>
                    </div>
                }
                if *show_resume && !session.submitting && !step.is_confirmation() {
                    <div class="resume-notice">{text::RESUME_NOTICE}</div>
                }
                {body}
                if show_nav {
                    <div class="audit-nav">
                        <button class="audit-back" disabled={step.is_contact()} onclick={on_back}>
                            {"Back"}
                        </button>
                        <button class="audit-next" disabled={next_disabled} onclick={on_next}>
                            {next_label}
                        </button>
                    </div>
                    if step.is_last_audit() {
                        <p class="step-reassurance">{text::SUBMIT_REASSURANCE}</p>
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ConfirmationProps {
    answers: AnswerSet,
    on_close: Callback<MouseEvent>,
}

#[function_component(Confirmation)]
fn confirmation(props: &ConfirmationProps) -> Html {
    let request = use_state(|| CallbackRequest {
        name: props.answers.name.clone(),
        email: props.answers.email.clone(),
        company: props.answers.company.clone(),
        ..CallbackRequest::default()
    });
    let sending = use_state(|| false);
    let sent = use_state(|| false);

    let on_phone = {
        let request = request.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*request).clone();
            next.phone = input.value();
            request.set(next);
        })
    };
    let on_message = {
        let request = request.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*request).clone();
            next.message = input.value();
            request.set(next);
        })
    };
    let on_send = {
        let request = request.clone();
        let sending = sending.clone();
        let sent = sent.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if *sending || !request.is_complete() {
                return;
            }
            sending.set(true);
            let payload = (*request).clone();
            let sending = sending.clone();
            let sent = sent.clone();
            spawn_local(async move {
                let outbox = browser_outbox();
                flow::submit_single(
                    &webhook_client(),
                    Some(&outbox),
                    config::source::CALLBACK,
                    payload,
                    browser_timezone(),
                )
                .await;
                sending.set(false);
                sent.set(true);
            });
        })
    };

    html! {
        <div class="audit-confirmation">
            <div class="confirmation-check">{"✓"}</div>
            <h2>{text::CONFIRMATION_HEADLINE}</h2>
            <div class="next-steps">
                <h3>{text::NEXT_STEPS_HEADLINE}</h3>
                <ol>
                    { for text::NEXT_STEPS.iter().map(|(title, detail)| html! {
                        <li><strong>{*title}</strong><span>{*detail}</span></li>
                    }) }
                </ol>
            </div>
            <div class="callback-form">
                <h3>{text::LEAD_FORM_HEADLINE}</h3>
                if *sent {
                    <p class="callback-sent">{"Thanks! We'll call you to go through your report."}</p>
                } else {
                    <p>{text::LEAD_FORM_SUBHEADLINE}</p>
                    <input type="tel" class="audit-input" placeholder="Phone number"
                        value={request.phone.clone()} oninput={on_phone} />
                    <textarea class="audit-input" rows="3" placeholder="Anything we should know? (optional)"
                        value={request.message.clone()} oninput={on_message} />
                    <button class="audit-next" disabled={*sending || !request.is_complete()} onclick={on_send}>
                        { if *sending { "Sending..." } else { text::LEAD_FORM_BUTTON } }
                    </button>
                }
            </div>
            <p class="trust-line">{text::CONFIRMATION_TRUST_LINE}</p>
            <button class="audit-back" onclick={props.on_close.clone()}>{"Close"}</button>
        </div>
    }
}

const AUDIT_FORM_CSS: &str = r#"
.audit-overlay {
    position: fixed;
    inset: 0;
    z-index: 50;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
    background: rgba(0, 0, 0, 0.6);
    backdrop-filter: blur(4px);
    overflow-y: auto;
}
.audit-modal {
    position: relative;
    width: 100%;
    max-width: 640px;
    background: #fff;
    color: #0F1C3F;
    border-radius: 24px;
    padding: 2.5rem;
    box-shadow: 0 24px 48px rgba(0, 0, 0, 0.25);
}
.audit-close {
    position: absolute;
    top: 1.25rem;
    right: 1.25rem;
    border: none;
    background: none;
    font-size: 1.75rem;
    color: #9CA3AF;
    cursor: pointer;
}
.audit-progress {
    height: 6px;
    background: #F6F7FB;
    border-radius: 3px;
    margin-bottom: 1.5rem;
    overflow: hidden;
}
.audit-progress-bar {
    height: 100%;
    background: #2676FF;
    transition: width 0.4s ease;
}
.resume-notice {
    background: #EFF6FF;
    border: 1px solid #BFDBFE;
    border-radius: 12px;
    padding: 0.75rem 1rem;
    margin-bottom: 1rem;
    font-size: 0.9rem;
}
.step-meta { color: #2676FF; font-weight: 700; font-size: 0.85rem; }
.step-intro { color: #4B5563; margin-bottom: 1.5rem; }
.step-reassurance { color: #6B7280; font-size: 0.85rem; text-align: center; }
.trust-line { color: #9CA3AF; font-size: 0.8rem; text-align: center; margin-top: 1rem; }
.audit-field { margin-bottom: 1.25rem; }
.audit-field label { display: block; font-weight: 700; font-size: 0.9rem; margin-bottom: 0.5rem; }
.required-mark { color: #EF4444; }
.audit-input {
    width: 100%;
    padding: 0.8rem 1rem;
    border: 2px solid #E5E7EB;
    border-radius: 12px;
    font-size: 16px;
    background: #fff;
    box-sizing: border-box;
}
.audit-input:focus { border-color: #2676FF; outline: none; }
.audit-input.invalid { border-color: #EF4444; }
.field-helper { color: #6B7280; font-size: 0.8rem; margin-top: 0.35rem; }
.field-error { color: #EF4444; font-size: 0.85rem; margin-top: 0.35rem; }
.field-suggestion { color: #92400E; font-size: 0.85rem; margin-top: 0.35rem; }
.suggestion-link {
    border: none;
    background: none;
    padding: 0;
    color: #2676FF;
    font-weight: 700;
    text-decoration: underline;
    cursor: pointer;
}
.audit-nav { display: flex; gap: 1rem; margin-top: 1.5rem; }
.audit-back, .audit-next {
    flex: 1;
    padding: 1rem 1.5rem;
    border-radius: 12px;
    font-weight: 700;
    cursor: pointer;
}
.audit-back { border: 2px solid #E5E7EB; background: #fff; color: #374151; }
.audit-next { border: none; background: #2676FF; color: #fff; box-shadow: 0 8px 20px rgba(38, 118, 255, 0.3); }
.audit-back:disabled, .audit-next:disabled { opacity: 0.5; cursor: not-allowed; }
.audit-building, .audit-confirmation { text-align: center; padding: 1.5rem 0; }
.loading-spinner {
    display: inline-block;
    width: 40px;
    height: 40px;
    border: 4px solid rgba(38, 118, 255, 0.2);
    border-radius: 50%;
    border-top-color: #2676FF;
    animation: spin 1s ease-in-out infinite;
    margin-bottom: 1rem;
}
@keyframes spin { to { transform: rotate(360deg); } }
.confirmation-check {
    width: 72px;
    height: 72px;
    margin: 0 auto 1rem;
    border-radius: 50%;
    background: #10B981;
    color: #fff;
    font-size: 2.5rem;
    line-height: 72px;
}
.next-steps { text-align: left; background: #F6F7FB; border-radius: 16px; padding: 1.25rem 1.5rem; margin: 1.5rem 0; }
.next-steps li { margin-bottom: 0.75rem; }
.next-steps li span { display: block; color: #6B7280; font-size: 0.85rem; }
.callback-form { display: flex; flex-direction: column; gap: 0.75rem; margin-bottom: 1rem; }
.callback-sent { color: #10B981; font-weight: 700; }
@media (max-width: 640px) {
    .audit-modal { padding: 1.5rem; border-radius: 16px; }
    .audit-nav { flex-direction: column-reverse; }
}
"#;
