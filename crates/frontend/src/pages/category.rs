//! Category catalog view, a pure function of the URL.
//!
//! The selected category travels in the `category` query parameter
//! (`/categoryproducts?category=Dimension`), so the page is bookmarkable and
//! shareable. Without the parameter the full catalog renders. The snapshot
//! is re-fetched on entry and on every category change; a stale-response
//! token keeps a superseded fetch from overwriting newer state.

use contracts::catalog::{filter_by_category, group_by_subcategory, ProductRecord};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;
use wasm_bindgen_futures::spawn_local;

use crate::catalog::api::fetch_showcase_all;
use crate::catalog::product_card::ProductCard;
use crate::shared::fetch_guard::FetchGuard;

fn product_grid(products: Vec<ProductRecord>) -> impl IntoView {
    view! {
        <div class="product-grid">
            {products
                .into_iter()
                .map(|product| view! { <ProductCard product=product /> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn CategoryProductsPage() -> impl IntoView {
    let query = use_query_map();
    let category = move || query.get().get("category").filter(|c| !c.trim().is_empty());

    let (products, set_products) = signal::<Vec<ProductRecord>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (retries, set_retries) = signal(0u32);
    let guard = FetchGuard::new();

    // Re-fetch on entry, on every category change, and on retry.
    Effect::new(move |_| {
        let _ = category();
        retries.track();
        set_loading.set(true);
        let token = guard.issue();
        let guard = guard.clone();
        spawn_local(async move {
            let outcome = fetch_showcase_all().await;
            if !guard.is_current(token) {
                log::debug!("Dropping stale catalog response");
                return;
            }
            match outcome {
                Ok(list) => {
                    set_products.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    let filtered = move || match category() {
        Some(label) => filter_by_category(&products.get(), &label),
        None => products.get(),
    };

    let heading = move || match category() {
        Some(label) => format!("{} Products", label),
        None => "All Products".to_string(),
    };

    let body = move || {
        if loading.get() {
            return view! {
                <div class="page-status">
                    <p>"Loading products..."</p>
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

        let selection = filtered();
        if selection.is_empty() {
            let empty_message = match category() {
                Some(label) => format!("No products found in {} category", label),
                None => "No products available".to_string(),
            };
            return view! {
                <div class="page-status">
                    <p>{empty_message}</p>
                    <Show when=move || category().is_some()>
                        <A href="/moreproducts">"View all products"</A>
                    </Show>
                </div>
            }
            .into_any();
        }

        match group_by_subcategory(&selection) {
            // At least one subcategory present: one labeled grid per group.
            Some(groups) => groups
                .into_iter()
                .map(|group| {
                    view! {
                        <section class="subcategory-section">
                            <h2 class="subcategory-section__label">{group.label}</h2>
                            {product_grid(group.products)}
                        </section>
                    }
                })
                .collect_view()
                .into_any(),
            None => product_grid(selection).into_any(),
        }
    };

    view! {
        <div class="category-page">
            <h1 class="category-page__heading">{heading}</h1>
            {body}
        </div>
    }
}
