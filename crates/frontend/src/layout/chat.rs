//! Floating chat support widget, mounted next to the router outlet.
//!
//! Client-only: a toggle button in the corner, a greeting, and a message
//! box. Messages stay local; there is no chat backend.

use leptos::prelude::*;

#[component]
pub fn ChatWidget() -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let (draft, set_draft) = signal(String::new());
    let (messages, set_messages) = signal::<Vec<String>>(Vec::new());

    let send = move || {
        let text = draft.get_untracked().trim().to_string();
        if text.is_empty() {
            return;
        }
        set_messages.update(|m| m.push(text));
        set_draft.set(String::new());
    };

    view! {
        <div class="chat-widget">
            <button
                class="chat-widget__toggle"
                aria-label="Chat support"
                on:click=move |_| set_is_open.update(|open| *open = !*open)
            >
                {move || if is_open.get() { "\u{00D7}" } else { "\u{1F4AC}" }}
            </button>

            <Show when=move || is_open.get()>
                <div class="chat-widget__window">
                    <div class="chat-widget__header">"Chat Support"</div>
                    <div class="chat-widget__messages">
                        <div class="chat-widget__message chat-widget__message--bot">
                            "Hello! How can I help you today?"
                        </div>
                        {move || {
                            messages
                                .get()
                                .into_iter()
                                .map(|text| {
                                    view! {
                                        <div class="chat-widget__message chat-widget__message--user">
                                            {text}
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                    <input
                        type="text"
                        class="chat-widget__input"
                        placeholder="Type your message..."
                        prop:value=draft
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                send();
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
