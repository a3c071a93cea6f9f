//! Site footer: content from `GET /footer` with static fallbacks (a footer
//! fetch failure must never break the page), plus the newsletter form.

use contracts::content::FooterContent;
use leptos::prelude::*;
use leptos_router::components::A;
use wasm_bindgen_futures::spawn_local;

use crate::content::api::{fetch_footer, subscribe};
use crate::forms::validation::is_valid_email;

const FALLBACK_ADDRESS: &str = "No. 12, Industrial Estate, Chennai 600058, India";
const FALLBACK_EMAIL: &str = "info@hikotek.com";

#[derive(Clone, Copy, PartialEq)]
enum SubscribeState {
    Idle,
    Sending,
    Done,
    Failed,
}

#[component]
fn NewsletterForm() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (state, set_state) = signal(SubscribeState::Idle);
    let (message, set_message) = signal::<Option<String>>(None);

    let submit = move |_| {
        let address = email.get_untracked().trim().to_string();
        if !is_valid_email(&address) {
            set_state.set(SubscribeState::Failed);
            set_message.set(Some("Please enter a valid email address".to_string()));
            return;
        }
        set_state.set(SubscribeState::Sending);
        set_message.set(None);
        spawn_local(async move {
            match subscribe(&address).await {
                Ok(()) => {
                    set_state.set(SubscribeState::Done);
                    set_message.set(Some("Thanks for subscribing!".to_string()));
                    set_email.set(String::new());
                }
                Err(e) => {
                    set_state.set(SubscribeState::Failed);
                    set_message.set(Some(e));
                }
            }
        });
    };

    view! {
        <div class="footer__newsletter">
            <h2>"Join Our Newsletter"</h2>
            <p>"Subscribe for product news, application notes and training updates."</p>
            <div class="footer__newsletter-row">
                <input
                    type="email"
                    placeholder="Your email address"
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <button
                    disabled=move || state.get() == SubscribeState::Sending
                    on:click=submit
                >
                    {move || {
                        if state.get() == SubscribeState::Sending {
                            "Subscribing..."
                        } else {
                            "Subscribe"
                        }
                    }}
                </button>
            </div>
            {move || {
                message.get().map(|m| {
                    view! {
                        <p
                            class="footer__newsletter-message"
                            class=("footer__newsletter-message--error", move || {
                                state.get() == SubscribeState::Failed
                            })
                        >
                            {m}
                        </p>
                    }
                })
            }}
        </div>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    let (content, set_content) = signal(FooterContent::default());

    spawn_local(async move {
        match fetch_footer().await {
            Ok(footer) => set_content.set(footer),
            // Fallback content stays in place; the footer never breaks the page.
            Err(e) => log::warn!("Footer content unavailable: {}", e),
        }
    });

    let address = move || {
        content
            .with(|c| c.address.clone())
            .unwrap_or_else(|| FALLBACK_ADDRESS.to_string())
    };
    let email = move || {
        content
            .with(|c| c.email.clone())
            .unwrap_or_else(|| FALLBACK_EMAIL.to_string())
    };

    view! {
        <footer class="footer">
            <NewsletterForm />

            <div class="footer__main">
                <div class="footer__company">
                    <A href="/">
                        <img src="/Hikotek_Logo.png" alt="Hikotek Logo" class="footer__logo" />
                    </A>
                    {move || {
                        content
                            .with(|c| c.description.clone())
                            .map(|d| view! { <p>{d}</p> })
                    }}
                    <p>{address}</p>
                    <p>{email}</p>
                    {move || content.with(|c| c.phone.clone()).map(|p| view! { <p>{p}</p> })}
                </div>

                <div class="footer__links">
                    <h4>"Company"</h4>
                    <ul>
                        <li><A href="/">"Home"</A></li>
                        <li><A href="/moreproducts">"Products"</A></li>
                        <li><A href="/distributor">"Distributor Apply"</A></li>
                        <li><A href="/about">"About Us"</A></li>
                        <li><A href="/contact">"Contact Us"</A></li>
                    </ul>
                </div>
            </div>
        </footer>
    }
}
