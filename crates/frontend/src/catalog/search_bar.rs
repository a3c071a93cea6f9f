//! Inline product search in the header.
//!
//! Submission-triggered (button or Enter), not keystroke-driven. While a
//! query is in flight a "Searching..." placeholder shows in the results
//! dropdown; results navigate to the product detail page. A blank submission
//! clears the results without touching the network.

use contracts::catalog::SearchHit;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::catalog::api::{search_products, validate_search_term};
use crate::shared::fetch_guard::FetchGuard;

#[component]
pub fn SearchBar() -> impl IntoView {
    let (term, set_term) = signal(String::new());
    let (results, set_results) = signal::<Vec<SearchHit>>(Vec::new());
    let (searching, set_searching) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (open, set_open) = signal(false);
    let guard = FetchGuard::new();
    let navigate = use_navigate();

    let submit = {
        let guard = guard.clone();
        move || {
            let query = term.get_untracked();
            // Blank input clears the dropdown; no network call.
            if validate_search_term(&query).is_err() {
                set_results.set(Vec::new());
                set_error.set(None);
                set_open.set(false);
                return;
            }

            let token = guard.issue();
            let guard = guard.clone();
            set_searching.set(true);
            set_error.set(None);
            set_open.set(true);
            spawn_local(async move {
                let outcome = search_products(&query).await;
                if !guard.is_current(token) {
                    log::debug!("Dropping stale search response for '{}'", query);
                    return;
                }
                match outcome {
                    Ok(hits) => set_results.set(hits),
                    Err(e) => {
                        set_results.set(Vec::new());
                        set_error.set(Some(e));
                    }
                }
                set_searching.set(false);
            });
        }
    };

    let open_result = {
        let navigate = navigate.clone();
        move |id: &str| {
            set_open.set(false);
            set_term.set(String::new());
            navigate(&format!("/products/{}", id), Default::default());
        }
    };

    let dropdown_body = move || {
        if searching.get() {
            return view! { <div class="search-bar__status">"Searching..."</div> }.into_any();
        }
        if let Some(e) = error.get() {
            return view! { <div class="search-bar__status search-bar__status--error">{e}</div> }
                .into_any();
        }
        let hits = results.get();
        if hits.is_empty() {
            return view! { <div class="search-bar__status">"No products found"</div> }.into_any();
        }
        let open_result = open_result.clone();
        view! {
            <ul class="search-bar__results">
                {hits
                    .into_iter()
                    .map(|hit| {
                        let open_result = open_result.clone();
                        let id = hit.id.as_key();
                        view! {
                            <li class="search-bar__result" on:click=move |_| open_result(&id)>
                                {hit.name}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    let submit_on_click = submit.clone();
    let submit_on_enter = submit.clone();

    view! {
        <div class="search-bar">
            <input
                type="text"
                class="search-bar__input"
                placeholder="Search products"
                aria-label="Search"
                prop:value=term
                on:input=move |ev| set_term.set(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        submit_on_enter();
                    }
                }
            />
            <button type="button" class="search-bar__button" on:click=move |_| submit_on_click()>
                "Search"
            </button>
            <Show when=move || open.get()>
                // Clicking anywhere outside the results closes the dropdown.
                <div class="search-bar__backdrop" on:click=move |_| set_open.set(false)></div>
                <div class="search-bar__dropdown">{dropdown_body.clone()}</div>
            </Show>
        </div>
    }
}
