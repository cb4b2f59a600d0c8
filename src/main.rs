use log::{error, info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod copy;
mod storage;
mod audit {
    pub mod contact;
    pub mod draft;
    pub mod flow;
    pub mod outbox;
    pub mod questions;
    pub mod session;
    pub mod submit;
    pub mod validate;
}
mod components {
    pub mod audit_form;
    pub mod impact_chart;
    pub mod quick_contact;
}
mod pages {
    pub mod landing;
}

use audit::flow::{browser_outbox, webhook_client};
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    /// Same page with the audit wizard already open, for ad and email links.
    #[at("/audit")]
    Audit,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Landing open_audit={false} /> },
        Route::Audit => {
            info!("Opening audit from direct link");
            html! { <Landing open_audit={true} /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_book_audit: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let is_scrolled = use_state(|| false);
    let progress = use_state(|| 0.0_f64);

    {
        let is_scrolled = is_scrolled.clone();
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let window = window();
                let scroll_callback = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        let Some(root) = window
                            .as_ref()
                            .and_then(|w| w.document())
                            .and_then(|d| d.document_element())
                        else {
                            return;
                        };
                        let scroll_top = root.scroll_top() as f64;
                        let scrollable = (root.scroll_height() - root.client_height()) as f64;
                        is_scrolled.set(scroll_top > 50.0);
                        progress.set(if scrollable > 0.0 { scroll_top / scrollable } else { 0.0 });
                    }) as Box<dyn FnMut()>)
                };

                if let Some(w) = window.as_ref() {
                    let _ = w.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(w) = window.as_ref() {
                        let _ = w.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let book = {
        let on_book_audit = props.on_book_audit.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_book_audit.emit(());
        })
    };

    html! {
        <>
            <div class="scroll-progress" style={format!("transform: scaleX({:.4});", *progress)}></div>
            <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
                <div class="nav-content">
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        <span class="logo-mark"></span>
                        {"Thraiv."}
                    </Link<Route>>
                    <button class="nav-cta" onclick={book}>
                        {"Book Free Audit"}
                        <span class="nav-cta-arrow">{"→"}</span>
                    </button>
                </div>
            </nav>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_contact: Callback<()>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let contact = {
        let on_contact = props.on_contact.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_contact.emit(());
        })
    };
    let year = chrono::Utc::now().format("%Y").to_string();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="nav-logo"><span class="logo-mark"></span>{"Thraiv."}</div>
                <button class="footer-contact" onclick={contact}>{"Contact Us"}</button>
                <div class="footer-legal">{format!("© {} Thraiv Systems. All rights reserved.", year)}</div>
            </div>
        </footer>
    }
}

#[function_component]
fn App() -> Html {
    // Submissions that failed on an earlier visit get one more attempt.
    use_effect_with_deps(
        move |_| {
            spawn_local(async move {
                let report = browser_outbox().flush(&webhook_client()).await;
                if report.delivered > 0 || report.kept > 0 {
                    info!(
                        "Outbox flushed: {} delivered, {} still pending",
                        report.delivered, report.kept
                    );
                }
            });
            || ()
        },
        (),
    );

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    if let Err(e) = audit::questions::check_table() {
        error!("Audit question table is inconsistent: {}", e);
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
