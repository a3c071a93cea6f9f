//! Products navigation dropdown.
//!
//! Hover/focus-driven menu over the category index: categories in the left
//! column, the active category's products on the right. The fetch states are
//! mirrored into the dropdown body ("Loading...", error text, "No categories
//! available") instead of hiding the trigger.

use contracts::catalog::{build_index, CategoryIndexEntry};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::catalog::api::fetch_showcase_all;

#[component]
pub fn ProductDropdown() -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let (index, set_index) = signal::<Vec<CategoryIndexEntry>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (active, set_active) = signal(0usize);
    let navigate = use_navigate();

    // One snapshot per page load is enough for the menu.
    spawn_local(async move {
        match fetch_showcase_all().await {
            Ok(products) => {
                set_index.set(build_index(&products));
                set_error.set(None);
            }
            Err(e) => set_error.set(Some(e)),
        }
        set_loading.set(false);
    });

    let open_category = {
        let navigate = navigate.clone();
        move |label: &str| {
            set_is_open.set(false);
            navigate(
                &format!("/categoryproducts?category={}", urlencoding::encode(label)),
                Default::default(),
            );
        }
    };

    let open_product = {
        let navigate = navigate.clone();
        move |id: &str| {
            set_is_open.set(false);
            navigate(&format!("/products/{}", id), Default::default());
        }
    };

    let body = move || {
        if loading.get() {
            return view! { <div class="product-dropdown__status">"Loading..."</div> }.into_any();
        }
        if let Some(e) = error.get() {
            return view! {
                <div class="product-dropdown__status product-dropdown__status--error">{e}</div>
            }
            .into_any();
        }
        let entries = index.get();
        if entries.is_empty() {
            return view! { <div class="product-dropdown__status">"No categories available"</div> }
                .into_any();
        }

        let active_entry = entries[active.get().min(entries.len() - 1)].clone();
        let open_category = open_category.clone();
        let open_product = open_product.clone();

        view! {
            <div class="product-dropdown__columns">
                <div class="product-dropdown__categories">
                    {entries
                        .into_iter()
                        .enumerate()
                        .map(|(i, entry)| {
                            let open_category = open_category.clone();
                            let label = entry.category.clone();
                            view! {
                                <div
                                    class="product-dropdown__category"
                                    class=("product-dropdown__category--active", move || active.get() == i)
                                    on:mouseenter=move |_| set_active.set(i)
                                    on:click=move |_| open_category(&label)
                                >
                                    {entry.category}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="product-dropdown__items">
                    {active_entry
                        .items
                        .into_iter()
                        .map(|item| {
                            let open_product = open_product.clone();
                            let id = item.id;
                            view! {
                                <span
                                    class="product-dropdown__item"
                                    on:click=move |_| open_product(&id)
                                >
                                    {item.name}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        <div
            class="product-dropdown"
            on:mouseenter=move |_| set_is_open.set(true)
            on:mouseleave=move |_| set_is_open.set(false)
            on:focusin=move |_| set_is_open.set(true)
            on:focusout=move |_| set_is_open.set(false)
        >
            <a class="product-dropdown__trigger" tabindex="0">
                "Products"
                <span class="product-dropdown__caret"></span>
            </a>
            <Show when=move || is_open.get()>
                <div class="product-dropdown__panel">{body.clone()}</div>
            </Show>
        </div>
    }
}
