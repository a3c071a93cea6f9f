//! Contact page: office cards from `GET /addresses/active`, with the usual
//! loading/error/retry states.

use contracts::content::OfficeAddress;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::content::api::fetch_active_addresses;
use crate::shared::fetch_guard::FetchGuard;

fn office_card(office: OfficeAddress) -> impl IntoView {
    view! {
        <div class="office-card">
            <h3>{office.title}</h3>
            {office.name.map(|name| view! { <p class="office-card__name">{name}</p> })}
            {office.address.map(|address| view! { <p class="office-card__address">{address}</p> })}
            {office
                .phone
                .map(|phone| view! { <p class="office-card__phone">{format!("Phone: {}", phone)}</p> })}
            {office
                .email
                .map(|email| view! { <p class="office-card__email">{format!("Email: {}", email)}</p> })}
        </div>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let (offices, set_offices) = signal::<Vec<OfficeAddress>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (retries, set_retries) = signal(0u32);
    let guard = FetchGuard::new();

    Effect::new(move |_| {
        retries.track();
        set_loading.set(true);
        let token = guard.issue();
        let guard = guard.clone();
        spawn_local(async move {
            let outcome = fetch_active_addresses().await;
            if !guard.is_current(token) {
                return;
            }
            match outcome {
                Ok(loaded) => {
                    set_offices.set(loaded);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    let body = move || {
        if loading.get() {
            return view! {
                <div class="page-status">
                    <p>"Loading offices..."</p>
                </div>
            }
            .into_any();
        }
        if let Some(e) = error.get() {
            return view! {
                <div class="page-status page-status--error">
                    <p>{format!("Error: {}", e)}</p>
                    <button class="retry-button" on:click=move |_| set_retries.update(|r| *r += 1)>
                        "Try Again"
                    </button>
                </div>
            }
            .into_any();
        }
        if offices.with(|o| o.is_empty()) {
            return view! {
                <div class="page-status">
                    <p>"No office information available"</p>
                </div>
            }
            .into_any();
        }
        view! {
            <div class="contact-page__grid">
                {offices.get().into_iter().map(office_card).collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="contact-page">
            <h1>"Contact Us"</h1>
            <p class="contact-page__intro">
                "Reach out to the Hikotek office nearest to you."
            </p>
            {body}
        </div>
    }
}
