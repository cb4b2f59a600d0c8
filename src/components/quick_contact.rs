use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;

use crate::audit::contact::QuickContact;
use crate::audit::flow::{self, browser_outbox, webhook_client};
use crate::audit::submit::browser_timezone;
use crate::audit::validate::suggest_email;
use crate::config;
use crate::storage::LocalStorage;

#[derive(Properties, PartialEq)]
pub struct QuickContactProps {
    pub on_close: Callback<()>,
}

#[function_component(QuickContactForm)]
pub fn quick_contact_form(props: &QuickContactProps) -> Html {
    let form = use_state(|| QuickContact::load_draft(&LocalStorage, config::QUICK_CONTACT_DRAFT_KEY));
    let loading = use_state(|| false);
    let submitted = use_state(|| false);

    let update = {
        let form = form.clone();
        move |apply: fn(&mut QuickContact, String)| {
            let form = form.clone();
            move |value: String| {
                let mut next = (*form).clone();
                apply(&mut next, value);
                next.save_draft(&LocalStorage, config::QUICK_CONTACT_DRAFT_KEY);
                form.set(next);
            }
        }
    };
    let on_name = {
        let set = update(|f, v| f.name = v);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        })
    };
    let on_email = {
        let set = update(|f, v| f.email = v);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        })
    };
    let on_message = {
        let set = update(|f, v| f.message = v);
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            set(input.value());
        })
    };

    let on_submit = {
        let form = form.clone();
        let loading = loading.clone();
        let submitted = submitted.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading || !form.is_complete() {
                return;
            }
            loading.set(true);
            let payload = (*form).clone();
            let loading = loading.clone();
            let submitted = submitted.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                let outbox = browser_outbox();
                let delivery = flow::submit_single(
                    &webhook_client(),
                    Some(&outbox),
                    config::source::QUICK_CONTACT,
                    payload,
                    browser_timezone(),
                )
                .await;
                info!("Quick contact finished, delivered: {}", delivery.is_delivered());
                QuickContact::clear_draft(&LocalStorage, config::QUICK_CONTACT_DRAFT_KEY);
                loading.set(false);
                submitted.set(true);
                Timeout::new(config::TIMINGS.close_after_quick_contact_ms, move || {
                    on_close.emit(());
                })
                .forget();
            });
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };
    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());
    let suggestion = suggest_email(&form.email);

    html! {
        <div class="quick-overlay" onclick={close.clone()}>
            <style>{QUICK_CONTACT_CSS}</style>
            <div class="quick-modal" onclick={stop_propagation}>
                <button class="quick-close" aria-label="Close" onclick={close.clone()}>{"×"}</button>
                if *submitted {
                    <div class="quick-success">
                        <div class="quick-check">{"✓"}</div>
                        <h3>{"Message Sent!"}</h3>
                        <p>{"Thanks for getting in touch. We've received your message and will respond as quickly as possible."}</p>
                        <ul>
                            <li>{"Your message goes directly to our team"}</li>
                            <li>{"We'll review and respond within 24 hours"}</li>
                            <li>{"Check your inbox (and spam folder)"}</li>
                        </ul>
                        <button class="quick-link" onclick={close}>{"Close"}</button>
                    </div>
                } else {
                    <form onsubmit={on_submit}>
                        <h2>{"Contact Us Now"}</h2>
                        <p class="quick-sub">{"Get in touch and we'll respond as quickly as possible."}</p>
                        <label for="qc-name">{"Your Name"}</label>
                        <input id="qc-name" type="text" placeholder="John Smith"
                            value={form.name.clone()} oninput={on_name} />
                        <label for="qc-email">{"Email Address"}</label>
                        <input id="qc-email" type="email" placeholder="john@company.com"
                            value={form.email.clone()} oninput={on_email} />
                        if let Some(suggested) = suggestion {
                            <p class="quick-hint">{format!("Did you mean {}?", suggested)}</p>
                        }
                        <label for="qc-message">{"Message"}</label>
                        <textarea id="qc-message" rows="5" placeholder="How can we help you today?"
                            value={form.message.clone()} oninput={on_message} />
                        <button type="submit" class="quick-send" disabled={*loading || !form.is_complete()}>
                            { if *loading { "Sending..." } else { "Send Message" } }
                        </button>
                        <p class="quick-sub">{"We'll get back to you within 24 hours"}</p>
                    </form>
                }
            </div>
        </div>
    }
}

const QUICK_CONTACT_CSS: &str = r#"
.quick-overlay {
    position: fixed;
    inset: 0;
    z-index: 50;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
    background: rgba(0, 0, 0, 0.7);
    backdrop-filter: blur(4px);
}
.quick-modal {
    position: relative;
    width: 100%;
    max-width: 480px;
    background: rgba(255, 255, 255, 0.97);
    color: #0F1C3F;
    border-radius: 24px;
    padding: 2.5rem;
}
.quick-modal form { display: flex; flex-direction: column; gap: 0.5rem; }
.quick-modal h2 { text-align: center; margin: 0 0 0.25rem; }
.quick-modal label { font-weight: 700; font-size: 0.9rem; margin-top: 0.5rem; }
.quick-modal input, .quick-modal textarea {
    padding: 0.85rem 1rem;
    border: 2px solid #E5E7EB;
    border-radius: 12px;
    font-size: 16px;
    resize: none;
}
.quick-sub { text-align: center; color: #6B7280; font-size: 0.85rem; }
.quick-hint { color: #92400E; font-size: 0.85rem; margin: 0; }
.quick-close {
    position: absolute;
    top: 1rem;
    right: 1.25rem;
    border: none;
    background: none;
    font-size: 1.75rem;
    color: #9CA3AF;
    cursor: pointer;
}
.quick-send {
    margin-top: 1rem;
    padding: 1rem;
    border: none;
    border-radius: 12px;
    background: linear-gradient(90deg, #2676FF, #7C3AED);
    color: #fff;
    font-weight: 800;
    font-size: 1.05rem;
    cursor: pointer;
}
.quick-send:disabled { opacity: 0.5; cursor: not-allowed; }
.quick-success { text-align: center; }
.quick-check {
    width: 80px;
    height: 80px;
    margin: 0 auto 1rem;
    border-radius: 50%;
    background: #10B981;
    color: #fff;
    font-size: 2.5rem;
    line-height: 80px;
}
.quick-success ul { text-align: left; background: #EFF6FF; border-radius: 12px; padding: 1rem 1rem 1rem 2rem; }
.quick-link { border: none; background: none; color: #6B7280; cursor: pointer; }
"#;
