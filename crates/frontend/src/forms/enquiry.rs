//! "Request Information" modal, opened from the product detail page.

use contracts::content::EnquiryRequest;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::content::api::submit_enquiry;
use crate::forms::validation::{error_for, validate_enquiry, FieldError};

const COUNTRIES: [&str; 5] = ["India", "USA", "UK", "Saudi Arabia", "UAE"];

#[component]
pub fn EnquiryForm(
    on_close: Callback<()>,
    #[prop(optional)] product_id: Option<String>,
) -> impl IntoView {
    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (company, set_company) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (country, set_country) = signal(String::new());
    let (comments, set_comments) = signal(String::new());
    let (subscribe, set_subscribe) = signal(true);
    let (errors, set_errors) = signal::<Vec<FieldError>>(Vec::new());
    let (submitting, set_submitting) = signal(false);
    let (submit_error, set_submit_error) = signal::<Option<String>>(None);
    let (succeeded, set_succeeded) = signal(false);

    let field_error = move |field: &'static str| {
        move || {
            errors
                .with(|e| error_for(e, field).map(str::to_string))
                .map(|message| view! { <p class="form-error">{message}</p> })
        }
    };

    let submit = move |_| {
        let enquiry = EnquiryRequest {
            full_name: full_name.get_untracked(),
            email: email.get_untracked(),
            company: company.get_untracked(),
            phone: phone.get_untracked(),
            country: country.get_untracked(),
            comments: comments.get_untracked(),
            subscribe: subscribe.get_untracked(),
            product_id: product_id.clone(),
        };
        let found = validate_enquiry(&enquiry);
        if !found.is_empty() {
            set_errors.set(found);
            return;
        }
        set_errors.set(Vec::new());
        set_submitting.set(true);
        set_submit_error.set(None);
        spawn_local(async move {
            match submit_enquiry(&enquiry).await {
                Ok(()) => {
                    set_succeeded.set(true);
                    // Let the confirmation show briefly, then close.
                    TimeoutFuture::new(2_000).await;
                    on_close.run(());
                }
                Err(e) => set_submit_error.set(Some(e)),
            }
            // The modal may already be gone when the response lands.
            let _ = set_submitting.try_set(false);
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal enquiry-form" on:click=move |ev| ev.stop_propagation()>
                <button class="modal__close" aria-label="Close" on:click=move |_| on_close.run(())>
                    "\u{00D7}"
                </button>

                <Show
                    when=move || !succeeded.get()
                    fallback=|| {
                        view! {
                            <div class="enquiry-form__success">
                                <h2>"Thank You!"</h2>
                                <p>"Your enquiry has been submitted successfully."</p>
                            </div>
                        }
                    }
                >
                    <h2 class="enquiry-form__title">"Request Information"</h2>

                    <div class="enquiry-form__grid">
                        <div>
                            <input
                                type="text"
                                placeholder="Full Name *"
                                prop:value=full_name
                                on:input=move |ev| set_full_name.set(event_target_value(&ev))
                            />
                            {field_error("fullName")}
                        </div>
                        <div>
                            <input
                                type="email"
                                placeholder="Email *"
                                prop:value=email
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                            {field_error("email")}
                        </div>
                        <div>
                            <input
                                type="text"
                                placeholder="Company *"
                                prop:value=company
                                on:input=move |ev| set_company.set(event_target_value(&ev))
                            />
                            {field_error("company")}
                        </div>
                        <div>
                            <input
                                type="tel"
                                placeholder="Phone (optional)"
                                prop:value=phone
                                on:input=move |ev| set_phone.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="enquiry-form__full-row">
                            <select on:change=move |ev| set_country.set(event_target_value(&ev))>
                                <option value="">"-- Select Country --"</option>
                                {COUNTRIES
                                    .iter()
                                    .map(|c| view! { <option value=*c>{*c}</option> })
                                    .collect_view()}
                            </select>
                            {field_error("country")}
                        </div>
                    </div>

                    <div>
                        <textarea
                            placeholder="Comments *"
                            rows="4"
                            prop:value=comments
                            on:input=move |ev| set_comments.set(event_target_value(&ev))
                        ></textarea>
                        {field_error("comments")}
                    </div>

                    <label class="enquiry-form__subscribe">
                        <input
                            type="checkbox"
                            prop:checked=subscribe
                            on:change=move |ev| set_subscribe.set(event_target_checked(&ev))
                        />
                        "Yes, email me the latest news, training and deals from Hikotek."
                    </label>

                    {move || {
                        submit_error
                            .get()
                            .map(|e| view! { <p class="form-error">{e}</p> })
                    }}

                    <button
                        class="enquiry-form__submit"
                        disabled=move || submitting.get()
                        on:click=submit.clone()
                    >
                        {move || if submitting.get() { "Processing..." } else { "SUBMIT" }}
                    </button>
                </Show>
            </div>
        </div>
    }
}
