use web_sys::MouseEvent;
use yew::prelude::*;
use yew::{Children, Properties};
use yew_router::prelude::*;

use crate::components::audit_form::AuditForm;
use crate::components::impact_chart::Sparkline;
use crate::components::quick_contact::QuickContactForm;
use crate::copy;
use crate::{Footer, Nav, Route};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    /// Open the audit wizard straight away (the `/audit` route).
    pub open_audit: bool,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let show_audit = use_state(|| props.open_audit);
    let show_contact = use_state(|| false);
    let navigator = use_navigator();

    {
        let show_audit = show_audit.clone();
        use_effect_with_deps(
            move |open| {
                if *open {
                    show_audit.set(true);
                }
                || ()
            },
            props.open_audit,
        );
    }

    let open_audit = {
        let show_audit = show_audit.clone();
        Callback::from(move |_: ()| show_audit.set(true))
    };
    let open_audit_click = {
        let open_audit = open_audit.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open_audit.emit(());
        })
    };
    let close_audit = {
        let show_audit = show_audit.clone();
        let from_link = props.open_audit;
        Callback::from(move |_: ()| {
            show_audit.set(false);
            if from_link {
                if let Some(navigator) = navigator.as_ref() {
                    navigator.replace(&Route::Home);
                }
            }
        })
    };
    let open_contact = {
        let show_contact = show_contact.clone();
        Callback::from(move |_: ()| show_contact.set(true))
    };
    let close_contact = {
        let show_contact = show_contact.clone();
        Callback::from(move |_: ()| show_contact.set(false))
    };

    let hero = &copy::HERO;

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <Nav on_book_audit={open_audit.clone()} />

            <header class="hero">
                <div class="hero-content">
                    <h1>
                        <span class="headline-blue">{hero.headline_blue}</span>
                        <span class="headline-rest">{hero.headline_rest}</span>
                    </h1>
                    <ul class="hero-lines">
                        { for hero.lines.iter().map(|line| html! { <li>{*line}</li> }) }
                    </ul>
                    <p class="hero-insight">
                        <strong>{hero.insight_intro}</strong>{" "}{hero.insight_main}
                    </p>
                    <button class="hero-cta" onclick={open_audit_click.clone()}>{hero.cta}</button>
                    <p class="hero-cta-sub">{hero.cta_subtext}</p>
                </div>
            </header>

            <section class="trust-bar">
                { for copy::TRUST_POINTS.iter().map(|p| html! {
                    <div class="trust-point">
                        <span class="trust-label">{p.label}</span>
                        <span class="trust-value">{p.value}</span>
                    </div>
                }) }
            </section>

            <section class="pain">
                <h2>{copy::PAIN_HEADLINE}</h2>
                <div class="pain-grid">
                    { for copy::PAIN_CARDS.iter().map(|(text, severe)| html! {
                        <div class={classes!("pain-card", if *severe { "severe" } else { "warning" })}>{*text}</div>
                    }) }
                </div>
            </section>

            <section class="friction">
                <h2>{copy::FRICTION_HEADLINE}</h2>
                <p class="section-sub">{copy::FRICTION_SUBHEAD}</p>
                <div class="delay-grid">
                    { for copy::FRICTION_DELAYS.iter().map(|d| html! {
                        <div class="delay-card">
                            <h3>{d.title}</h3>
                            <p class="delay-sub">{d.subtitle}</p>
                            <div class="delay-duration">{d.duration}</div>
                            <div class="delay-track">
                                <div class="delay-fill" style={format!("width: {}%;", d.percentage)}></div>
                            </div>
                            <ul>
                                { for d.examples.iter().map(|e| html! { <li>{*e}</li> }) }
                            </ul>
                        </div>
                    }) }
                </div>
                <p class="friction-closing">{copy::FRICTION_CLOSING}</p>
            </section>

            <section class="how-it-works">
                <h2>{copy::HOW_IT_WORKS_HEADLINE}</h2>
                <div class="how-grid">
                    { for copy::HOW_IT_WORKS.iter().enumerate().map(|(i, s)| html! {
                        <div class="how-step">
                            <span class="how-phase">{format!("{:02} · {}", i + 1, s.phase)}</span>
                            <h3>{s.title}</h3>
                            <p>{s.desc}</p>
                            <span class="how-example">{s.example}</span>
                        </div>
                    }) }
                </div>
            </section>

            <section class="impact">
                <h2>{"What Changes When Operations Run Themselves"}</h2>
                <div class="impact-grid">
                    { for copy::IMPACT_METRICS.iter().map(|m| html! {
                        <div class="impact-card">
                            <div class="impact-head">
                                <span class="impact-label">{m.label}</span>
                                <span class="impact-change">{m.change}</span>
                            </div>
                            <div class="impact-values">
                                <span class="impact-was">{m.was}</span>
                                <span class="impact-now">{m.now}</span>
                            </div>
                            <Sparkline points={m.trend} color={m.color} />
                        </div>
                    }) }
                </div>
            </section>

            <section class="outcomes">
                <h2>{"What You Actually Get"}</h2>
                <div class="outcome-grid">
                    { for copy::OUTCOMES.iter().map(|o| html! {
                        <div class="outcome-card">
                            <span class="outcome-stat">{o.stat}</span>
                            <h3>{o.title}</h3>
                            <p>{o.desc}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="audience">
                <h2>{"Is This For You?"}</h2>
                <div class="industry-grid">
                    { for copy::INDUSTRIES.iter().map(|i| html! {
                        <div class="industry-card">
                            <h3>{i.label}</h3>
                            <p>{i.desc}</p>
                            <p class="industry-outcome">{i.outcome}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="faq-section">
                <h2>{"Frequently Asked Questions"}</h2>
                { for copy::FAQ_ITEMS.iter().map(|(question, answer)| html! {
                    <FaqItem question={question.to_string()}>
                        { for answer.iter().map(|p| html! { <p>{*p}</p> }) }
                    </FaqItem>
                }) }
            </section>

            <section class="urgency">
                <h2>{copy::URGENCY_HEADLINE}</h2>
                <p class="section-sub">{copy::URGENCY_SUBHEAD}</p>
                <ul>
                    { for copy::URGENCY_POINTS.iter().map(|p| html! { <li>{*p}</li> }) }
                </ul>
            </section>

            <section class="audit-cta">
                <h2>{copy::FINAL_CTA_HEADLINE}</h2>
                <p class="section-sub">{copy::FINAL_CTA_SUBHEAD}</p>
                <ul class="audit-points">
                    { for copy::AUDIT_POINTS.iter().map(|p| html! { <li>{*p}</li> }) }
                </ul>
                <button class="hero-cta" onclick={open_audit_click}>{"Book My Free Audit"}</button>
                <p class="guarantee">{copy::FINAL_CTA_GUARANTEE}</p>
            </section>

            <Footer on_contact={open_contact} />

            if *show_audit {
                <AuditForm on_close={close_audit} />
            }
            if *show_contact {
                <QuickContactForm on_close={close_contact} />
            }
        </div>
    }
}

const LANDING_CSS: &str = r#"
.landing-page {
    color: #0F1C3F;
    background: #fff;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}
.scroll-progress {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    height: 4px;
    background: #2676FF;
    transform-origin: left;
    z-index: 60;
}
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 40;
    padding: 1.5rem 0;
    transition: all 0.3s ease;
}
.top-nav.scrolled {
    background: rgba(255, 255, 255, 0.95);
    backdrop-filter: blur(10px);
    box-shadow: 0 1px 4px rgba(0, 0, 0, 0.08);
    padding: 1rem 0;
}
.nav-content {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.nav-logo {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-size: 1.5rem;
    font-weight: 800;
    color: #0F1C3F;
    text-decoration: none;
}
.logo-mark { width: 24px; height: 24px; background: #2676FF; border-radius: 6px; }
.nav-cta, .hero-cta {
    border: none;
    border-radius: 16px;
    padding: 1rem 2rem;
    font-size: 1.1rem;
    font-weight: 700;
    color: #fff;
    background: linear-gradient(90deg, #2676FF, #2563EB);
    box-shadow: 0 12px 32px rgba(38, 118, 255, 0.45);
    cursor: pointer;
}
.nav-cta-arrow { margin-left: 0.5rem; }
.hero {
    min-height: 90vh;
    display: flex;
    align-items: center;
    padding: 8rem 1.5rem 4rem;
    background: radial-gradient(circle at top right, #EFF6FF, #fff 60%);
}
.hero-content { max-width: 900px; margin: 0 auto; text-align: center; }
.hero h1 { font-size: 3.5rem; line-height: 1.1; margin-bottom: 2rem; }
.headline-blue { display: block; color: #2676FF; }
.headline-rest { display: block; font-size: 2rem; margin-top: 1rem; }
.hero-lines { list-style: none; padding: 0; font-size: 1.2rem; color: #4B5563; }
.hero-insight { font-size: 1.25rem; margin: 2rem auto; max-width: 700px; }
.hero-cta-sub { color: #6B7280; font-size: 0.95rem; max-width: 600px; margin: 1rem auto 0; }
.trust-bar { display: flex; justify-content: center; gap: 3rem; padding: 2rem 1.5rem; background: #F6F7FB; flex-wrap: wrap; }
.trust-point { display: flex; flex-direction: column; text-align: center; }
.trust-label { font-size: 0.8rem; text-transform: uppercase; color: #2676FF; font-weight: 700; }
.trust-value { font-weight: 600; }
section { padding: 5rem 1.5rem; max-width: 1200px; margin: 0 auto; }
section h2 { font-size: 2.5rem; text-align: center; margin-bottom: 1.5rem; }
.section-sub { text-align: center; color: #4B5563; font-size: 1.15rem; max-width: 720px; margin: 0 auto 2.5rem; }
.pain-grid, .how-grid, .impact-grid, .outcome-grid, .industry-grid, .delay-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 1.25rem;
}
.pain-card { padding: 1.25rem; border-radius: 16px; font-weight: 700; text-align: center; }
.pain-card.severe { background: #FEF2F2; color: #B91C1C; }
.pain-card.warning { background: #FFF7ED; color: #C2410C; }
.delay-card, .how-step, .impact-card, .outcome-card, .industry-card {
    background: #fff;
    border: 1px solid #F3F4F6;
    border-radius: 16px;
    padding: 1.5rem;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
}
.delay-card h3 { color: #EF4444; font-size: 1rem; }
.delay-duration { font-size: 2.5rem; font-weight: 800; }
.delay-track { height: 10px; background: #F6F7FB; border-radius: 5px; overflow: hidden; margin: 0.75rem 0; }
.delay-fill { height: 100%; background: #EF4444; }
.friction-closing { max-width: 760px; margin: 2.5rem auto 0; text-align: center; font-size: 1.1rem; }
.how-phase, .outcome-stat { color: #2676FF; font-size: 0.8rem; font-weight: 700; text-transform: uppercase; }
.how-example { display: inline-block; margin-top: 0.75rem; padding: 0.25rem 0.75rem; background: #EFF6FF; border-radius: 999px; font-size: 0.8rem; }
.impact-head, .impact-values { display: flex; justify-content: space-between; align-items: baseline; }
.impact-label { font-weight: 700; }
.impact-change { color: #10B981; font-weight: 800; }
.impact-was { color: #9CA3AF; text-decoration: line-through; }
.impact-now { font-size: 1.75rem; font-weight: 800; }
.sparkline { width: 100%; height: 64px; margin-top: 0.75rem; }
.industry-outcome { color: #2676FF; font-weight: 600; }
.faq-section { max-width: 800px; }
.faq-item { border-bottom: 1px solid #E5E7EB; }
.faq-question {
    width: 100%;
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1.25rem 0;
    background: none;
    border: none;
    font-size: 1.1rem;
    font-weight: 700;
    color: #0F1C3F;
    text-align: left;
    cursor: pointer;
}
.faq-answer { max-height: 0; overflow: hidden; transition: max-height 0.3s ease; color: #4B5563; }
.faq-item.open .faq-answer { max-height: 1000px; padding-bottom: 1rem; }
.urgency ul, .audit-points { max-width: 640px; margin: 0 auto 2rem; }
.urgency li, .audit-points li { margin-bottom: 0.75rem; font-size: 1.1rem; }
.audit-cta { text-align: center; }
.guarantee { color: #6B7280; margin-top: 1rem; }
.site-footer { background: #0F1C3F; color: #fff; padding: 3rem 1.5rem; }
.site-footer .nav-logo { color: #fff; }
.footer-content {
    max-width: 1200px;
    margin: 0 auto;
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 1.5rem;
    flex-wrap: wrap;
}
.footer-contact { background: none; border: 1px solid rgba(255, 255, 255, 0.3); color: #fff; border-radius: 12px; padding: 0.6rem 1.25rem; cursor: pointer; }
.footer-legal { color: #9CA3AF; font-size: 0.85rem; }
@media (max-width: 768px) {
    .hero h1 { font-size: 2.25rem; }
    .headline-rest { font-size: 1.35rem; }
    section h2 { font-size: 1.85rem; }
    .nav-cta { padding: 0.75rem 1.25rem; font-size: 0.95rem; }
}
"#;
