//! "Become a Distributor" application form.

use contracts::content::DistributorApplication;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::content::api::submit_distributor_application;
use crate::forms::validation::{error_for, validate_distributor, FieldError};

#[component]
pub fn DistributorApplyPage() -> impl IntoView {
    let (company, set_company) = signal(String::new());
    let (contact_name, set_contact_name) = signal(String::new());
    let (title, set_title) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (channels, set_channels) = signal(String::new());
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
        let application = DistributorApplication {
            company: company.get_untracked(),
            contact_name: contact_name.get_untracked(),
            title: title.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            channels: channels.get_untracked(),
        };
        let found = validate_distributor(&application);
        if !found.is_empty() {
            set_errors.set(found);
            return;
        }
        set_errors.set(Vec::new());
        set_submitting.set(true);
        set_submit_error.set(None);
        spawn_local(async move {
            match submit_distributor_application(&application).await {
                Ok(()) => set_succeeded.set(true),
                Err(e) => set_submit_error.set(Some(e)),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="distributor-page">
            <h1>"Become a Distributor"</h1>
            <p class="distributor-page__intro">
                "Partner with Hikotek to bring precision instruments to your market."
            </p>

            <Show
                when=move || !succeeded.get()
                fallback=|| {
                    view! {
                        <div class="distributor-page__success">
                            <h2>"Application Received"</h2>
                            <p>"Thank you for your interest. Our team will contact you shortly."</p>
                        </div>
                    }
                }
            >
                <div class="distributor-form">
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
                            type="text"
                            placeholder="Contact Name *"
                            prop:value=contact_name
                            on:input=move |ev| set_contact_name.set(event_target_value(&ev))
                        />
                        {field_error("contactName")}
                    </div>
                    <div>
                        <input
                            type="text"
                            placeholder="Title (optional)"
                            prop:value=title
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
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
                            type="tel"
                            placeholder="Phone *"
                            prop:value=phone
                            on:input=move |ev| set_phone.set(event_target_value(&ev))
                        />
                        {field_error("phone")}
                    </div>
                    <div>
                        <textarea
                            placeholder="Current sales channels and territories *"
                            rows="4"
                            prop:value=channels
                            on:input=move |ev| set_channels.set(event_target_value(&ev))
                        ></textarea>
                        {field_error("channels")}
                    </div>

                    {move || {
                        submit_error
                            .get()
                            .map(|e| view! { <p class="form-error">{e}</p> })
                    }}

                    <button
                        class="distributor-form__submit"
                        disabled=move || submitting.get()
                        on:click=submit.clone()
                    >
                        {move || if submitting.get() { "Submitting..." } else { "Apply" }}
                    </button>
                </div>
            </Show>
        </div>
    }
}
